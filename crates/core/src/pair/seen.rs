use std::collections::HashMap;

/// Tracks the earliest position at which each value has been seen.
///
/// Scoped to a single search and dropped when it returns.
pub(super) struct Seen {
    first_index: HashMap<i64, usize>,
}

impl Seen {
    /// Creates an empty table sized for a sequence of `len` values.
    pub(super) fn with_capacity(len: usize) -> Self {
        Self {
            first_index: HashMap::with_capacity(len),
        }
    }

    /// Returns the earliest recorded position of `value`, if any.
    pub(super) fn first_index(&self, value: i64) -> Option<usize> {
        self.first_index.get(&value).copied()
    }

    /// Records `value` at `index` unless the value was already recorded.
    ///
    /// An existing entry keeps its earlier index.
    pub(super) fn record(&mut self, value: i64, index: usize) {
        self.first_index.entry(value).or_insert(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_entries() {
        let seen = Seen::with_capacity(4);
        assert_eq!(seen.first_index(0), None);
        assert_eq!(seen.first_index(-7), None);
    }

    #[test]
    fn record_then_lookup() {
        let mut seen = Seen::with_capacity(2);
        seen.record(5, 0);
        seen.record(-3, 1);

        assert_eq!(seen.first_index(5), Some(0));
        assert_eq!(seen.first_index(-3), Some(1));
        assert_eq!(seen.first_index(3), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let mut seen = Seen::with_capacity(3);
        seen.record(2, 1);
        seen.record(2, 4);
        seen.record(2, 7);

        assert_eq!(seen.first_index(2), Some(1));
    }

    #[test]
    fn handles_extreme_values() {
        let mut seen = Seen::with_capacity(2);
        seen.record(i64::MIN, 0);
        seen.record(i64::MAX, 1);

        assert_eq!(seen.first_index(i64::MIN), Some(0));
        assert_eq!(seen.first_index(i64::MAX), Some(1));
    }
}
