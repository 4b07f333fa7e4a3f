use crate::algorithm::cache::SearchMemo;

/// Distinct word lengths still available along one search branch, with a
/// parallel supply count per length
///
/// Lengths are kept ascending and a length is present only while its supply
/// is positive. Every branch of the search owns its own shape.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InventoryShape {
    lengths: Vec<usize>,
    supply: Vec<usize>,
}

impl InventoryShape {
    /// Build a shape from ascending lengths and their supplies
    ///
    /// Pairs with zero supply are dropped and the pairs are sorted by length.
    pub fn from_parts(lengths: Vec<usize>, supply: Vec<usize>) -> Self {
        let mut pairs: Vec<(usize, usize)> = lengths
            .into_iter()
            .zip(supply)
            .filter(|&(_, count)| count > 0)
            .collect();
        pairs.sort_unstable_by_key(|&(length, _)| length);
        pairs.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });

        let (lengths, supply) = pairs.into_iter().unzip();
        Self { lengths, supply }
    }

    /// Distinct available lengths, ascending
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Supply per length, parallel to [`Self::lengths`]
    pub fn supply(&self) -> &[usize] {
        &self.supply
    }

    /// True when nothing is available
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Sum of all available lengths weighted by supply
    pub fn total_width(&self) -> usize {
        self.lengths
            .iter()
            .zip(&self.supply)
            .map(|(length, count)| length * count)
            .sum()
    }

    /// Take one unit of `length`, dropping the length once its supply hits zero
    ///
    /// Returns false if the length is not available.
    pub fn select_one(&mut self, length: usize) -> bool {
        let Ok(pos) = self.lengths.binary_search(&length) else {
            return false;
        };
        let Some(count) = self.supply.get_mut(pos) else {
            return false;
        };

        *count -= 1;
        if *count == 0 {
            self.lengths.remove(pos);
            self.supply.remove(pos);
        }
        true
    }

    fn without_one(&self, length: usize) -> Self {
        let mut branch = self.clone();
        branch.select_one(length);
        branch
    }
}

/// Exact-sum search over an inventory shape
///
/// Finds a multiset of available lengths summing exactly to a target width,
/// trying longer lengths first. Failed states are recorded in the shared
/// [`SearchMemo`] so sibling branches that reach the same state with no more
/// supply are cut immediately.
pub struct LineSequencer<'memo> {
    shape: InventoryShape,
    memo: &'memo mut SearchMemo,
    nodes_visited: usize,
}

impl<'memo> LineSequencer<'memo> {
    /// Create a sequencer rooted at `shape`, sharing `memo` across the search
    pub const fn new(shape: InventoryShape, memo: &'memo mut SearchMemo) -> Self {
        Self {
            shape,
            memo,
            nodes_visited: 0,
        }
    }

    /// Shape the search starts from
    pub const fn shape(&self) -> &InventoryShape {
        &self.shape
    }

    /// Number of search states entered so far
    pub const fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Lengths summing exactly to `target`, longest first in discovery order
    ///
    /// Returns `None` if no combination of the available supply sums to the
    /// target. A remaining width of one or less never completes a line.
    pub fn find_sequence(&mut self, target: usize) -> Option<Vec<usize>> {
        let root = self.enter(self.shape.clone(), target)?;
        let mut frames = vec![root];
        // Length each open frame branched on, root first
        let mut chosen: Vec<usize> = Vec::new();

        while let Some(frame) = frames.last_mut() {
            let Some(length) = frame.next_candidate() else {
                if let Some(failed) = frames.pop() {
                    let shape = &failed.shape;
                    self.memo
                        .record_failure(failed.target, shape.lengths(), shape.supply());
                }
                chosen.pop();
                continue;
            };

            if length == frame.target {
                chosen.push(length);
                return Some(chosen);
            }

            let branch = frame.shape.without_one(length);
            let remaining = frame.target - length;
            if let Some(child) = self.enter(branch, remaining) {
                chosen.push(length);
                frames.push(child);
            }
        }

        None
    }

    /// Open a search state, or `None` if it cannot complete or was already
    /// proven infeasible with at least this much supply
    fn enter(&mut self, shape: InventoryShape, target: usize) -> Option<SearchFrame> {
        self.nodes_visited += 1;

        if target <= 1 {
            return None;
        }

        if self
            .memo
            .lookup_prunable(target, shape.lengths(), shape.supply())
        {
            return None;
        }

        Some(SearchFrame::new(shape, target))
    }
}

/// One open state of the depth-first search, held on an explicit stack so
/// depth is bounded by heap rather than thread stack
struct SearchFrame {
    shape: InventoryShape,
    target: usize,
    untried: usize,
}

impl SearchFrame {
    fn new(shape: InventoryShape, target: usize) -> Self {
        let untried = shape.lengths().len();
        Self {
            shape,
            target,
            untried,
        }
    }

    /// Next length to branch on, longest first, skipping any over the target
    fn next_candidate(&mut self) -> Option<usize> {
        while self.untried > 0 {
            self.untried -= 1;
            let length = self.shape.lengths().get(self.untried).copied()?;
            if length <= self.target {
                return Some(length);
            }
        }
        None
    }
}
