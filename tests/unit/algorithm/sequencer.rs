//! Tests for longest-first exact-sum search and branch-local inventory shapes

#[cfg(test)]
mod tests {
    use linepack::algorithm::cache::SearchMemo;
    use linepack::algorithm::sequencer::{InventoryShape, LineSequencer};
    use linepack::io::configuration::MAX_LINE_WIDTH;

    fn shape(pairs: &[(usize, usize)]) -> InventoryShape {
        let (lengths, supply) = pairs.iter().copied().unzip();
        InventoryShape::from_parts(lengths, supply)
    }

    fn find(pairs: &[(usize, usize)], target: usize) -> Option<Vec<usize>> {
        let mut memo = SearchMemo::new();
        LineSequencer::new(shape(pairs), &mut memo).find_sequence(target)
    }

    /// Exhaustive search without memoization, used as a reference
    fn exact_sum_exists(lengths: &[usize], supply: &[usize], target: usize) -> bool {
        if target == 0 {
            return true;
        }
        lengths.iter().zip(supply).enumerate().any(|(i, (&length, &count))| {
            if count == 0 || length > target {
                return false;
            }
            let mut remaining = supply.to_vec();
            remaining[i] -= 1;
            exact_sum_exists(lengths, &remaining, target - length)
        })
    }

    // Tests shapes normalize order, merge duplicates and drop empty supplies
    // Verified by skipping the zero-supply filter
    #[test]
    fn test_shape_from_parts_normalizes() {
        let shape = InventoryShape::from_parts(vec![5, 3, 4, 3], vec![1, 2, 0, 1]);

        assert_eq!(shape.lengths(), &[3, 5]);
        assert_eq!(shape.supply(), &[3, 1]);
        assert_eq!(shape.total_width(), 14);
    }

    // Tests selecting the last unit removes the length entirely
    // Verified by leaving zero-supply lengths in place
    #[test]
    fn test_shape_select_one() {
        let mut shape = shape(&[(3, 2), (4, 1)]);

        assert!(shape.select_one(4));
        assert_eq!(shape.lengths(), &[3]);
        assert_eq!(shape.supply(), &[2]);

        assert!(shape.select_one(3));
        assert_eq!(shape.supply(), &[1]);

        assert!(!shape.select_one(9));
        assert!(shape.select_one(3));
        assert!(shape.is_empty());
    }

    // Tests the worked example: no sum of {3,3,4} reaches 11 but all reach 10
    // Verified by allowing a length to be used beyond its supply
    #[test]
    fn test_example_degrades_from_eleven_to_ten() {
        assert_eq!(find(&[(3, 2), (4, 1)], 11), None);

        let sequence = find(&[(3, 2), (4, 1)], 10).unwrap();
        assert_eq!(sequence, vec![4, 3, 3]);
    }

    // Tests a single length equal to the target is returned immediately
    // Verified by descending past an exact match
    #[test]
    fn test_exact_leaf() {
        assert_eq!(find(&[(2, 1), (5, 1)], 5), Some(vec![5]));
    }

    // Tests longer lengths are tried before shorter ones
    // Verified by iterating lengths in ascending order
    #[test]
    fn test_longest_first_order() {
        let sequence = find(&[(2, 5), (3, 2), (6, 1)], 8).unwrap();
        assert_eq!(sequence, vec![6, 2]);
    }

    // Tests remaining widths of one or less never complete
    // Verified by treating target 1 as a leaf
    #[test]
    fn test_tiny_targets_fail() {
        assert_eq!(find(&[(1, 3), (2, 3)], 1), None);
        assert_eq!(find(&[(2, 3)], 0), None);
    }

    // Tests an empty shape finds nothing and records the failure
    // Verified by skipping the failure record
    #[test]
    fn test_empty_shape_records_failure() {
        let mut memo = SearchMemo::new();
        let result = LineSequencer::new(InventoryShape::default(), &mut memo).find_sequence(7);

        assert_eq!(result, None);
        assert_eq!(memo.stats.recorded, 1);
        assert!(memo.lookup_prunable(7, &[], &[]));
    }

    // Tests sibling branches do not share supply
    // Verified by mutating the parent shape instead of a branch copy
    #[test]
    fn test_branches_are_independent() {
        let root = shape(&[(3, 1), (4, 2)]);
        let mut memo = SearchMemo::new();
        let mut sequencer = LineSequencer::new(root.clone(), &mut memo);

        assert_eq!(sequencer.find_sequence(7), Some(vec![4, 3]));
        assert_eq!(sequencer.shape(), &root);
        assert_eq!(sequencer.find_sequence(8), Some(vec![4, 4]));
    }

    // Tests the memo cuts repeated dead ends
    // Verified by disabling the prune lookup
    #[test]
    fn test_memo_prunes_repeated_states() {
        let pairs = [(4, 6), (6, 6)];

        let mut memo = SearchMemo::new();
        let mut sequencer = LineSequencer::new(shape(&pairs), &mut memo);
        assert_eq!(sequencer.find_sequence(23), None);
        let nodes = sequencer.nodes_visited();

        assert!(memo.stats.hits > 0);
        assert!(memo.stats.recorded > 0);
        assert!(nodes < 200, "search visited {nodes} nodes");
    }

    // Tests returned sequences sum to the target within supply
    // Verified by returning the partial sequence on failure
    #[test]
    fn test_sequence_respects_supply() {
        let pairs = [(2, 1), (3, 3), (5, 2), (8, 1)];

        for target in 2..=30 {
            if let Some(sequence) = find(&pairs, target) {
                assert_eq!(sequence.iter().sum::<usize>(), target);
                for &(length, count) in &pairs {
                    let used = sequence.iter().filter(|&&l| l == length).count();
                    assert!(used <= count, "length {length} used {used} times");
                }
                assert!(sequence.windows(2).all(|w| w[0] >= w[1]));
            }
        }
    }

    // Tests memoized search agrees with exhaustive search
    // Verified by pruning when current supply exceeds the witness
    #[test]
    fn test_memo_soundness_against_exhaustive_search() {
        let shapes: [&[(usize, usize)]; 4] = [
            &[(3, 2), (4, 1)],
            &[(2, 2), (5, 3), (7, 1)],
            &[(4, 3), (6, 2), (9, 1)],
            &[(3, 4), (5, 2), (11, 1), (13, 1)],
        ];

        for pairs in shapes {
            let (lengths, supply): (Vec<usize>, Vec<usize>) = pairs.iter().copied().unzip();
            for target in 2..=45 {
                let expected = exact_sum_exists(&lengths, &supply, target);
                let found = find(pairs, target).is_some();
                assert_eq!(found, expected, "pairs {pairs:?} target {target}");
            }
        }
    }

    // Tests a search thousands of levels deep completes off the thread stack
    // Verified by recursing once per chosen length
    #[test]
    fn test_deep_search_at_max_width() {
        let supply = MAX_LINE_WIDTH / 2;

        let exact = find(&[(2, supply)], MAX_LINE_WIDTH).unwrap();
        assert_eq!(exact.len(), supply);
        assert!(exact.iter().all(|&length| length == 2));

        let mut memo = SearchMemo::new();
        let mut sequencer = LineSequencer::new(shape(&[(2, supply)]), &mut memo);
        assert_eq!(sequencer.find_sequence(MAX_LINE_WIDTH + 1), None);
        assert_eq!(sequencer.nodes_visited(), supply + 1);
        assert_eq!(memo.stats.recorded, supply);
    }
}
