use pairsum_core::{IndexPair, pair};

/// The line to print for a search outcome.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Report {
    /// Printed to stdout.
    Found(String),

    /// Printed to stderr.
    Failed(String),
}

impl Report {
    /// Renders the outcome of searching `numbers`.
    pub(crate) fn render(numbers: &[i64], outcome: &Result<IndexPair, pair::Error>) -> Self {
        match outcome {
            Ok(found) => match found.values(numbers) {
                Some((first, second)) => Self::Found(format!(
                    "first[{}] = {first}, second[{}] = {second}",
                    found.first, found.second
                )),
                None => Self::Failed(format!("error: pair {found} is out of bounds")),
            },
            Err(e) => Self::Failed(format!("error: {e}")),
        }
    }
}
