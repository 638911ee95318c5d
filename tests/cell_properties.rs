//! Property tests for the result cell.

use proptest::prelude::*;
use result_cell::{get_cell, new_cell, set_cell, Cell, Unset};

proptest! {
    #[test]
    fn read_after_write_returns_written_value(v in any::<String>()) {
        let cell: Cell<String> = new_cell();
        set_cell(&cell, v.clone());
        prop_assert_eq!(get_cell(&cell), Ok(v));
    }

    #[test]
    fn repeated_reads_are_equal(values in prop::collection::vec(any::<i64>(), 0..8)) {
        let cell: Cell<i64> = new_cell();
        for v in values {
            set_cell(&cell, v);
        }
        prop_assert_eq!(get_cell(&cell), get_cell(&cell));
    }

    #[test]
    fn last_write_wins(v1 in any::<i64>(), v2 in any::<i64>()) {
        let cell: Cell<i64> = new_cell();
        set_cell(&cell, v1);
        set_cell(&cell, v2);
        prop_assert_eq!(get_cell(&cell), Ok(v2));
    }

    #[test]
    fn writes_are_visible_through_every_alias(v in any::<u32>(), aliases in 1usize..6) {
        let cell: Cell<u32> = new_cell();
        let handles: Vec<_> = (0..aliases).map(|_| cell.clone()).collect();
        for h in &handles {
            prop_assert_eq!(get_cell(h), Err(Unset));
        }

        set_cell(&handles[0], v);

        prop_assert_eq!(get_cell(&cell), Ok(v));
        for h in &handles {
            prop_assert_eq!(get_cell(h), Ok(v));
        }
    }
}
