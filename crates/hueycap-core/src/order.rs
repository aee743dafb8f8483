// crates/hueycap-core/src/order.rs

/// Row order of a capture log as stored on disk.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RowOrder {
    /// Capture tools export the most recent transfer first.
    #[default]
    NewestFirst,
    Chronological,
}

/// Put rows into the order the transfers happened.
pub fn chronological<T>(mut rows: Vec<T>, order: RowOrder) -> Vec<T> {
    if order == RowOrder::NewestFirst {
        rows.reverse();
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_is_reversed() {
        assert_eq!(chronological(vec![3, 2, 1], RowOrder::NewestFirst), vec![1, 2, 3]);
    }

    #[test]
    fn chronological_is_untouched() {
        assert_eq!(chronological(vec![1, 2, 3], RowOrder::Chronological), vec![1, 2, 3]);
    }

    #[test]
    fn double_reverse_is_identity() {
        let rows = vec!["a", "b", "c", "d"];
        let twice = chronological(chronological(rows.clone(), RowOrder::NewestFirst), RowOrder::NewestFirst);
        assert_eq!(twice, rows);
    }
}
