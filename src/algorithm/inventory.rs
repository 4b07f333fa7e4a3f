use crate::algorithm::sequencer::InventoryShape;
use crate::io::configuration::SEPARATOR_WIDTH;
use crate::io::error::{PackError, Result};
use std::collections::BTreeMap;

/// Padded length of a word: its character count plus one separator
pub fn padded_length(word: &str) -> usize {
    word.chars().count() + SEPARATOR_WIDTH
}

/// Words grouped by padded length
///
/// Each length owns a stack of words; withdrawals take the most recently
/// loaded word of that length. A length is present in the map exactly when
/// at least one word of that length remains.
#[derive(Clone, Debug, Default)]
pub struct WordInventory {
    words: BTreeMap<usize, Vec<String>>,
    word_count: usize,
}

impl WordInventory {
    /// Group tokens by padded length
    ///
    /// # Errors
    ///
    /// Returns [`PackError::WordTooLong`] for the first token whose padded
    /// length exceeds `max_line_width`
    pub fn load<I, S>(tokens: I, max_line_width: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inventory = Self::default();

        for token in tokens {
            let word = token.into();
            let length = padded_length(&word);
            if length > max_line_width {
                return Err(PackError::WordTooLong {
                    word,
                    length,
                    max_width: max_line_width,
                });
            }
            inventory.words.entry(length).or_default().push(word);
            inventory.word_count += 1;
        }

        Ok(inventory)
    }

    /// Remove and return one word of the given padded length
    ///
    /// # Errors
    ///
    /// Returns [`PackError::MissingWord`] if no word of that length remains
    pub fn withdraw_one(&mut self, length: usize) -> Result<String> {
        let stack = self
            .words
            .get_mut(&length)
            .ok_or(PackError::MissingWord { length })?;
        let word = stack.pop().ok_or(PackError::MissingWord { length })?;

        if stack.is_empty() {
            self.words.remove(&length);
        }
        self.word_count -= 1;

        Ok(word)
    }

    /// True when every word has been withdrawn
    pub fn is_exhausted(&self) -> bool {
        self.words.is_empty()
    }

    /// Total number of words remaining
    pub const fn len(&self) -> usize {
        self.word_count
    }

    /// True when no words remain
    pub fn is_empty(&self) -> bool {
        self.is_exhausted()
    }

    /// Remaining count of words with the given padded length
    pub fn supply_of(&self, length: usize) -> usize {
        self.words.get(&length).map_or(0, Vec::len)
    }

    /// Distinct padded lengths still present, ascending
    pub fn distinct_lengths(&self) -> Vec<usize> {
        self.words.keys().copied().collect()
    }

    /// Distinct lengths (ascending) with a parallel vector of remaining counts
    pub fn snapshot(&self) -> InventoryShape {
        let (lengths, supply) = self
            .words
            .iter()
            .map(|(&length, stack)| (length, stack.len()))
            .unzip();
        InventoryShape::from_parts(lengths, supply)
    }
}
