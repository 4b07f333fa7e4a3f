//! Word sources: whitespace tokenization of files and streams

use crate::io::configuration::STDIN_TARGET;
use crate::io::error::{Result, WithContext};
use std::io::Read;
use std::path::Path;

/// Split text into whitespace-delimited words
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Read every word from a reader
///
/// # Errors
///
/// Returns an error if the stream cannot be read or is not valid UTF-8
pub fn read_words_from<R: Read>(mut reader: R, origin: &Path) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_path(origin, "read")?;
    Ok(tokenize(&text).map(str::to_owned).collect())
}

/// Read every word from a file, or from standard input when `path` is `-`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == STDIN_TARGET {
        return read_words_from(std::io::stdin().lock(), path);
    }

    let file = std::fs::File::open(path).with_path(path, "open")?;
    read_words_from(file, path)
}
