use thiserror::Error;

/// Errors that can occur during a pair search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("no two distinct positions sum to the target")]
    NoSolution,
}
