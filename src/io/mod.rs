//! Input/output operations and ambient concerns

/// Command-line parsing and file processing
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress display
pub mod progress;
/// Line destinations
pub mod sink;
/// Word sources and tokenization
pub mod source;
