//! Command-line interface for packing a text file into fixed-width lines

use crate::algorithm::executor::{LinePacker, PackStats, PackerConfig};
use crate::algorithm::inventory::WordInventory;
use crate::io::configuration::DEFAULT_LINE_WIDTH;
use crate::io::error::{Result, WithContext};
use crate::io::progress::ProgressManager;
use crate::io::sink::{LineSink, WriterSink};
use crate::io::source::read_words;
use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "linepack")]
#[command(
    author,
    version,
    about = "Pack the words of a text into lines of fixed width with as little slack as possible"
)]
/// Command-line arguments for the packing tool
pub struct Cli {
    /// Text file whose whitespace-separated words are packed ("-" reads standard input)
    #[arg(value_name = "TEXTFILE")]
    pub target: PathBuf,

    /// Maximum line width in characters
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub width: usize,

    /// Write lines to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates reading, packing and writing with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Pack the target according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the width is invalid, the input cannot be read,
    /// a word is longer than the line width, packing fails or the output
    /// cannot be written
    pub fn process(&mut self) -> Result<PackStats> {
        let config = PackerConfig::new(self.cli.width)?;
        let start_time = Instant::now();

        let words = read_words(&self.cli.target)?;
        let inventory = WordInventory::load(words, config.max_line_width)?;
        tracing::debug!(
            words = inventory.len(),
            lengths = inventory.distinct_lengths().len(),
            "loaded inventory"
        );

        let stats = match self.cli.output.clone() {
            Some(path) => {
                let file = File::create(&path).with_path(&path, "create")?;
                let mut sink = WriterSink::new(BufWriter::new(file), path);
                self.pack(inventory, config, &mut sink)?
            }
            None => {
                let stdout = BufWriter::new(std::io::stdout().lock());
                let mut sink = WriterSink::new(stdout, "<stdout>");
                self.pack(inventory, config, &mut sink)?
            }
        };

        tracing::info!(
            lines = stats.lines,
            words = stats.words,
            degradations = stats.degradations,
            memo_hits = stats.memo_hits,
            memo_misses = stats.memo_misses,
            elapsed_ms = start_time.elapsed().as_millis(),
            "packing complete"
        );

        Ok(stats)
    }

    fn pack<S: LineSink>(
        &mut self,
        inventory: WordInventory,
        config: PackerConfig,
        sink: &mut S,
    ) -> Result<PackStats> {
        self.progress_manager.initialize(inventory.len());

        let mut packer = LinePacker::new(inventory, config);
        let progress = &mut self.progress_manager;
        let result = packer.pack_into(sink, |words| progress.line_packed(words));

        self.progress_manager.finish();
        result
    }
}
