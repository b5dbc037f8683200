//! Pair search over an integer sequence.
//!
//! # Algorithm
//!
//! The search makes a single left-to-right pass. For each position `i` it
//! computes the complement `target - numbers[i]` and looks it up in a table of
//! values seen so far. A hit ends the search immediately; a miss records
//! `numbers[i]` at position `i` unless that value was already recorded.
//!
//! The pass takes O(n) time and O(n) auxiliary space. The table lives only for
//! the duration of one call.
//!
//! # Tie-break
//!
//! The returned pair has the smallest possible `second` position. Among pairs
//! sharing that `second`, `first` is the earliest occurrence of the
//! complement, because the table keeps the first index at which each value
//! appears.
//!
//! A position never pairs with itself: the lookup for position `i` happens
//! before `i` is recorded.
//!
//! # Arithmetic
//!
//! The complement is computed with checked subtraction. If it overflows, the
//! true complement lies outside `i64` and cannot be in the sequence, so the
//! lookup is skipped for that position.

mod error;
mod seen;
mod solution;


pub use error::Error;
pub use solution::IndexPair;

use seen::Seen;

/// Finds two distinct positions in `numbers` whose values sum to `target`.
///
/// Returns the first match found in scan order. See the [module docs](self)
/// for the tie-break policy.
///
/// # Errors
///
/// Returns [`Error::NoSolution`] if no two distinct positions sum to
/// `target`, including when `numbers` has fewer than two elements.
pub fn find(numbers: &[i64], target: i64) -> Result<IndexPair, Error> {
    let mut seen = Seen::with_capacity(numbers.len());

    for (second, &value) in numbers.iter().enumerate() {
        if let Some(first) = target
            .checked_sub(value)
            .and_then(|complement| seen.first_index(complement))
        {
            return Ok(IndexPair { first, second });
        }
        seen.record(value, second);
    }

    Err(Error::NoSolution)
}
