use std::fmt;

/// Two distinct positions whose values sum to the target.
///
/// `first` is the position discovered earlier in the scan and `second` is the
/// position at which the match was confirmed. The two are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPair {
    /// Position of the earlier-seen value.
    pub first: usize,

    /// Position at which the match was confirmed.
    pub second: usize,
}

impl IndexPair {
    /// Returns the values at both positions of `numbers`.
    ///
    /// Returns `None` if either position is out of bounds, which can only
    /// happen when `numbers` is not the sequence that was searched.
    #[must_use]
    pub fn values(&self, numbers: &[i64]) -> Option<(i64, i64)> {
        Some((*numbers.get(self.first)?, *numbers.get(self.second)?))
    }
}

impl fmt::Display for IndexPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
