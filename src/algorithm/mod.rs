/// Memoization of search states proven infeasible
pub mod cache;
/// Line packing loop with degrading target width
pub mod executor;
/// Words grouped by padded length with per-length supply
pub mod inventory;
/// Longest-first exact-sum search over an inventory shape
pub mod sequencer;
