use clap::Parser;

/// Command line arguments.
///
/// Each input can also be supplied through the environment.
#[derive(Debug, Parser)]
#[command(name = "pairsum", version)]
#[command(about = "Find two positions in a sequence whose values sum to a target")]
pub(crate) struct Args {
    /// Comma-separated sequence to search
    #[arg(
        long,
        env = "PAIRSUM_NUMBERS",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [3, 4, 5, 1]
    )]
    pub numbers: Vec<i64>,

    /// Target sum
    #[arg(
        long,
        env = "PAIRSUM_TARGET",
        allow_negative_numbers = true,
        default_value_t = 9
    )]
    pub target: i64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
