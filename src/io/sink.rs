//! Destinations for packed lines

use crate::io::error::{Result, WithContext};
use std::io::Write;
use std::path::PathBuf;

/// Receives finished lines in the order they are produced
pub trait LineSink {
    /// Accept one line without its terminator
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be written
    fn emit(&mut self, line: &str) -> Result<()>;

    /// Push buffered output to its destination
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be written
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}

/// Writes each line followed by a newline
pub struct WriterSink<W: Write> {
    writer: W,
    destination: PathBuf,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer; `destination` names it in error messages
    pub fn new(writer: W, destination: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            destination: destination.into(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}").with_path(&self.destination, "write")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().with_path(&self.destination, "flush")
    }
}
