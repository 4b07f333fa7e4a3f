//! Error types and context management for packing operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all packing operations
#[derive(Debug)]
pub enum PackError {
    /// A word cannot fit on a line even when placed alone
    ///
    /// Detected while loading the inventory, before any search begins.
    WordTooLong {
        /// The offending word
        word: String,
        /// Padded length of the word (characters plus one separator)
        length: usize,
        /// Configured maximum line width
        max_width: usize,
    },

    /// Every target width down to zero failed while words remain
    NoSequenceFound {
        /// Number of words still in the inventory
        remaining_words: usize,
        /// Configured maximum line width
        max_line_width: usize,
    },

    /// A word of the requested length was not available for withdrawal
    MissingWord {
        /// Padded length that was requested
        length: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system or stream failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordTooLong {
                word,
                length,
                max_width,
            } => {
                write!(
                    f,
                    "Word '{word}' has padded length {length}, longer than the line length {max_width}"
                )
            }
            Self::NoSequenceFound {
                remaining_words,
                max_line_width,
            } => {
                write!(
                    f,
                    "No sequence found for {remaining_words} remaining words at any width up to {max_line_width}"
                )
            }
            Self::MissingWord { length } => {
                write!(f, "No word of padded length {length} left in the inventory")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for packing results
pub type Result<T> = std::result::Result<T, PackError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Path being read or written
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the file and operation involved
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add path and operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<PackError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file system errors carry a location
            if let PackError::FileSystem {
                path, operation, ..
            } = &mut error
            {
                if let Some(context_path) = context.path {
                    *path = context_path;
                }
                if let Some(context_operation) = context.operation {
                    *operation = context_operation;
                }
            }
            error
        })
    }

    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.into()),
            operation: Some(operation),
        })
    }
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PackError {
    PackError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
