use crate::{
    algorithm::cache::SearchMemo,
    algorithm::inventory::WordInventory,
    algorithm::sequencer::LineSequencer,
    io::configuration::{DEFAULT_LINE_WIDTH, MAX_LINE_WIDTH, SEPARATOR, SEPARATOR_WIDTH},
    io::error::{PackError, Result, invalid_parameter},
    io::sink::LineSink,
};

/// Parameters controlling line packing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PackerConfig {
    /// Maximum number of characters on an emitted line
    pub max_line_width: usize,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl PackerConfig {
    /// Create a configuration with the given maximum line width
    ///
    /// # Errors
    ///
    /// Returns an error if the width is zero or above [`MAX_LINE_WIDTH`]
    pub fn new(max_line_width: usize) -> Result<Self> {
        if max_line_width == 0 {
            return Err(invalid_parameter(
                "width",
                &max_line_width,
                &"must be at least 1",
            ));
        }
        if max_line_width > MAX_LINE_WIDTH {
            return Err(invalid_parameter(
                "width",
                &max_line_width,
                &format!("must not exceed {MAX_LINE_WIDTH}"),
            ));
        }
        Ok(Self { max_line_width })
    }

    /// Sum of padded lengths a full line matches exactly
    ///
    /// One unit above the line width, for the trailing separator trimmed
    /// from every finished line.
    pub const fn full_target(&self) -> usize {
        self.max_line_width + SEPARATOR_WIDTH
    }
}

/// Running totals across a packing run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PackStats {
    /// Lines emitted
    pub lines: usize,
    /// Words placed on emitted lines
    pub words: usize,
    /// Target widths abandoned before a line was found
    pub degradations: usize,
    /// Memo lookups that pruned a state
    pub memo_hits: usize,
    /// Memo lookups that did not prune
    pub memo_misses: usize,
}

/// Drives the sequencer line by line until the inventory is exhausted
///
/// Each line starts at the full target width. When no exact sum exists the
/// target is lowered one unit at a time and searched again from the same
/// inventory. One memo serves every retry of a line and is dropped before
/// the next line.
pub struct LinePacker {
    inventory: WordInventory,
    config: PackerConfig,
    stats: PackStats,
}

impl LinePacker {
    /// Create a packer over a loaded inventory
    pub const fn new(inventory: WordInventory, config: PackerConfig) -> Self {
        Self {
            inventory,
            config,
            stats: PackStats {
                lines: 0,
                words: 0,
                degradations: 0,
                memo_hits: 0,
                memo_misses: 0,
            },
        }
    }

    /// Load tokens and create a packer in one step
    ///
    /// # Errors
    ///
    /// Returns [`PackError::WordTooLong`] if any token cannot fit on a line
    pub fn from_tokens<I, S>(tokens: I, config: PackerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let inventory = WordInventory::load(tokens, config.max_line_width)?;
        Ok(Self::new(inventory, config))
    }

    /// Words not yet placed
    pub const fn inventory(&self) -> &WordInventory {
        &self.inventory
    }

    /// Active configuration
    pub const fn config(&self) -> PackerConfig {
        self.config
    }

    /// Totals accumulated so far
    pub const fn stats(&self) -> PackStats {
        self.stats
    }

    /// True once every word has been placed
    pub fn is_finished(&self) -> bool {
        self.inventory.is_exhausted()
    }

    /// Padded lengths for the next line, searched from the full target downward
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NoSequenceFound`] if every target width down to
    /// zero fails while words remain
    pub fn next_sequence(&mut self) -> Result<Option<Vec<usize>>> {
        if self.inventory.is_exhausted() {
            return Ok(None);
        }

        // Keys carry the target, so failures stay valid across degraded retries
        let mut memo = SearchMemo::new();
        let mut target = self.config.full_target();
        let found = loop {
            let sequence =
                LineSequencer::new(self.inventory.snapshot(), &mut memo).find_sequence(target);
            if sequence.is_some() {
                break sequence;
            }

            tracing::trace!(width = target, "no exact sequence, lowering target");
            self.stats.degradations += 1;
            target -= 1;
            if target == 0 {
                break None;
            }
        };

        self.stats.memo_hits += memo.stats.hits;
        self.stats.memo_misses += memo.stats.misses;

        found.map(Some).ok_or_else(|| PackError::NoSequenceFound {
            remaining_words: self.inventory.len(),
            max_line_width: self.config.max_line_width,
        })
    }

    /// Build and return the next line, or `None` when the inventory is empty
    ///
    /// # Errors
    ///
    /// Returns [`PackError::NoSequenceFound`] if the remaining words cannot
    /// be packed at any width, or [`PackError::MissingWord`] if the inventory
    /// disagrees with the sequence found for it
    pub fn pack_next_line(&mut self) -> Result<Option<String>> {
        let Some(sequence) = self.next_sequence()? else {
            return Ok(None);
        };

        let words = sequence
            .iter()
            .map(|&length| self.inventory.withdraw_one(length))
            .collect::<Result<Vec<_>>>()?;

        let mut line = String::new();
        for word in &words {
            line.push_str(word);
            line.push(SEPARATOR);
        }
        // Drop the separator after the last word
        line.pop();

        self.stats.lines += 1;
        self.stats.words += words.len();
        tracing::debug!(
            line = self.stats.lines,
            width = sequence.iter().sum::<usize>() - SEPARATOR_WIDTH,
            words = words.len(),
            "packed line"
        );

        Ok(Some(line))
    }

    /// Pack every remaining word, emitting lines in order
    ///
    /// `on_line` is called after each emitted line with the number of words
    /// it carried.
    ///
    /// # Errors
    ///
    /// Propagates packing failures and sink write failures
    pub fn pack_into<S, F>(&mut self, sink: &mut S, mut on_line: F) -> Result<PackStats>
    where
        S: LineSink + ?Sized,
        F: FnMut(usize),
    {
        loop {
            let placed_before = self.stats.words;
            let Some(line) = self.pack_next_line()? else {
                break;
            };
            sink.emit(&line)?;
            on_line(self.stats.words - placed_before);
        }
        sink.flush()?;
        Ok(self.stats)
    }

    /// Pack every remaining word into a vector of lines
    ///
    /// # Errors
    ///
    /// Propagates packing failures
    pub fn pack_all(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        self.pack_into(&mut lines, |_| {})?;
        Ok(lines)
    }
}
