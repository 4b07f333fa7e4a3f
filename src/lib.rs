//! Packs a multiset of words into lines of fixed maximum width
//!
//! Each line is built from an exact-sum search over padded word lengths.
//! When no combination reaches the full width exactly, the target width is
//! lowered one unit at a time until a combination is found.

#![forbid(unsafe_code)]

/// Word inventory, exact-sum search and the line packing loop
pub mod algorithm;
/// Input/output collaborators, configuration and error handling
pub mod io;

pub use io::error::{PackError, Result};
