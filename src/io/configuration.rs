//! Packing constants and runtime configuration defaults

/// Default maximum line width in characters
pub const DEFAULT_LINE_WIDTH: usize = 80;

// Search depth reaches width / 2 frames, held on the heap
/// Largest accepted maximum line width
pub const MAX_LINE_WIDTH: usize = 10_000;

/// Character placed between words on a line
pub const SEPARATOR: char = ' ';

/// Width units consumed by one separator
pub const SEPARATOR_WIDTH: usize = 1;

/// Argument value that selects standard input as the word source
pub const STDIN_TARGET: &str = "-";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
