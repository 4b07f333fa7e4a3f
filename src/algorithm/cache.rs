use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Key for caching search failures
///
/// Identifies a search state by its remaining target width and the shape of
/// the inventory (distinct lengths available). Exact supplies are not part of
/// the key; they are compared at lookup time.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SearchKey {
    target: usize,
    lengths: Vec<usize>,
}

impl SearchKey {
    /// Create a key from a target width and ascending distinct lengths
    pub fn new(target: usize, lengths: &[usize]) -> Self {
        Self {
            target,
            lengths: lengths.to_vec(),
        }
    }

    /// Remaining target width of this state
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Distinct lengths available in this state
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }
}

/// Memoization of proven-infeasible search states
///
/// Each entry maps a state to the supply vector in effect when no sequence
/// could be completed from it. A later query for the same state is prunable
/// when its supply is componentwise no greater than the recorded one.
/// One instance serves a single line search and is then discarded.
#[derive(Default)]
pub struct SearchMemo {
    /// State to infeasibility witness mapping
    failures: HashMap<SearchKey, Vec<usize>>,

    /// Cache performance statistics
    pub stats: MemoStats,
}

/// Performance metrics for memo effectiveness
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq)]
pub struct MemoStats {
    /// Lookups answered with a prune
    pub hits: usize,
    /// Lookups that could not prune
    pub misses: usize,
    /// Failures recorded
    pub recorded: usize,
}

impl SearchMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the state already failed with at least the current supply
    ///
    /// A missing entry is never prunable.
    pub fn lookup_prunable(&mut self, target: usize, lengths: &[usize], supply: &[usize]) -> bool {
        let prunable = self
            .failures
            .get(&SearchKey::new(target, lengths))
            .is_some_and(|witness| dominates(witness, supply));

        if prunable {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        prunable
    }

    /// Store `supply` as the witness of infeasibility for the state
    ///
    /// Replaces any earlier witness for the same state.
    pub fn record_failure(&mut self, target: usize, lengths: &[usize], supply: &[usize]) {
        self.stats.recorded += 1;

        match self.failures.entry(SearchKey::new(target, lengths)) {
            Entry::Occupied(mut entry) => {
                supply.clone_into(entry.get_mut());
            }
            Entry::Vacant(entry) => {
                entry.insert(supply.to_vec());
            }
        }
    }

    /// Number of distinct states recorded as infeasible
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// True when no failures have been recorded
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Componentwise `witness >= supply`
fn dominates(witness: &[usize], supply: &[usize]) -> bool {
    witness.len() == supply.len()
        && witness
            .iter()
            .zip(supply.iter())
            .all(|(recorded, current)| recorded >= current)
}
