//! Tests for word grouping, withdrawal and inventory snapshots

#[cfg(test)]
mod tests {
    use linepack::PackError;
    use linepack::algorithm::inventory::{WordInventory, padded_length};

    // Tests padded length counts characters plus one separator
    // Verified by counting bytes instead of characters
    #[test]
    fn test_padded_length_counts_characters() {
        assert_eq!(padded_length("ab"), 3);
        assert_eq!(padded_length("a"), 2);
        assert_eq!(padded_length("naïve"), 6);
    }

    // Tests words are grouped by padded length with matching supplies
    // Verified by keying the map on raw character count
    #[test]
    fn test_load_groups_by_padded_length() {
        let inventory = WordInventory::load(["ab", "cd", "efg"], 10).unwrap();

        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.distinct_lengths(), vec![3, 4]);
        assert_eq!(inventory.supply_of(3), 2);
        assert_eq!(inventory.supply_of(4), 1);
        assert_eq!(inventory.supply_of(5), 0);
    }

    // Tests a word whose padded length exceeds the width is rejected
    // Verified by comparing against width + 1
    #[test]
    fn test_load_rejects_word_too_long() {
        let word = "x".repeat(80);
        let result = WordInventory::load([word.as_str()], 80);

        match result {
            Err(PackError::WordTooLong {
                word: rejected,
                length,
                max_width,
            }) => {
                assert_eq!(rejected, word);
                assert_eq!(length, 81);
                assert_eq!(max_width, 80);
            }
            _ => unreachable!("Expected WordTooLong error"),
        }
    }

    // Tests a word whose padded length equals the width is accepted
    // Verified by using >= in the length check
    #[test]
    fn test_load_accepts_word_at_limit() {
        let word = "x".repeat(79);
        let inventory = WordInventory::load([word], 80).unwrap();

        assert_eq!(inventory.distinct_lengths(), vec![80]);
    }

    // Tests withdrawal follows stack order within a length
    // Verified by removing from the front of the stack
    #[test]
    fn test_withdraw_is_last_in_first_out() {
        let mut inventory = WordInventory::load(["ab", "cd", "ef"], 10).unwrap();

        assert_eq!(inventory.withdraw_one(3).unwrap(), "ef");
        assert_eq!(inventory.withdraw_one(3).unwrap(), "cd");
        assert_eq!(inventory.supply_of(3), 1);
    }

    // Tests a length leaves the distinct list once its last word is withdrawn
    // Verified by keeping empty stacks in the map
    #[test]
    fn test_withdraw_last_word_removes_length() {
        let mut inventory = WordInventory::load(["ab", "efg"], 10).unwrap();

        inventory.withdraw_one(4).unwrap();

        assert_eq!(inventory.distinct_lengths(), vec![3]);
        assert!(!inventory.is_exhausted());

        inventory.withdraw_one(3).unwrap();

        assert!(inventory.is_exhausted());
        assert!(inventory.is_empty());
        assert_eq!(inventory.len(), 0);
    }

    // Tests withdrawing an absent length reports an error
    // Verified by returning an empty word instead of an error
    #[test]
    fn test_withdraw_missing_length() {
        let mut inventory = WordInventory::load(["ab"], 10).unwrap();

        let result = inventory.withdraw_one(7);
        assert!(matches!(result, Err(PackError::MissingWord { length: 7 })));
        assert_eq!(inventory.len(), 1);
    }

    // Tests snapshots list lengths ascending with parallel supplies
    // Verified by reversing the snapshot order
    #[test]
    fn test_snapshot_shape() {
        let inventory = WordInventory::load(["abcd", "a", "bb", "c", "dd", "ee"], 20).unwrap();
        let shape = inventory.snapshot();

        assert_eq!(shape.lengths(), &[2, 3, 5]);
        assert_eq!(shape.supply(), &[2, 3, 1]);
    }

    // Tests empty input yields an exhausted inventory
    // Verified by initializing the count to one
    #[test]
    fn test_empty_input() {
        let inventory = WordInventory::load(Vec::<String>::new(), 80).unwrap();

        assert!(inventory.is_exhausted());
        assert!(inventory.snapshot().is_empty());
    }
}
