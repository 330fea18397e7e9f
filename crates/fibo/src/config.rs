//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use fibo_cli::PresentationConfig;
use fibo_core::memory_budget::parse_memory_limit;
use fibo_core::options::Options;

/// Compute the n-th Fibonacci number exactly, using fast doubling.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibo", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Index of the Fibonacci number to compute.
    #[arg(env = "FIBO_N", required_unless_present = "completion")]
    pub n: Option<u64>,

    /// Algorithm to use: fast, iterative, gmp, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Only print the result line.
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the complete decimal expansion.
    #[arg(short = 'f', long)]
    pub full: bool,

    /// Also print the algorithm name and bit length.
    #[arg(short, long)]
    pub details: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a progress bar on stderr.
    #[arg(short, long)]
    pub progress: bool,

    /// Write the full decimal value to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Operand size in bits from which the products of a step run in
    /// parallel (0 = sequential).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Skip pre-sizing the working integers.
    #[arg(long)]
    pub no_presize: bool,

    /// Timeout duration (e.g. "30s", "5m", "1h", "500ms").
    #[arg(long, default_value = "1h", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Memory limit (e.g. "8G", "512M").
    #[arg(long, value_parser = parse_memory_limit)]
    pub memory_limit: Option<u64>,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options derived from the flags.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            parallel_threshold: self.threshold,
            presize: !self.no_presize,
        }
    }

    /// Presentation settings derived from the flags.
    #[must_use]
    pub fn presentation(&self) -> PresentationConfig {
        PresentationConfig {
            quiet: self.quiet,
            print_full: self.full,
            details: self.details,
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms". A bare number
/// means seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let parse = |v: &str| {
        v.parse::<u64>()
            .map_err(|_| format!("invalid duration: {s:?}"))
    };

    if let Some(ms) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(parse(ms)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Ok(Duration::from_secs(parse(secs)?))
    } else if let Some(mins) = s.strip_suffix('m') {
        Ok(Duration::from_secs(parse(mins)?.saturating_mul(60)))
    } else if let Some(hours) = s.strip_suffix('h') {
        Ok(Duration::from_secs(parse(hours)?.saturating_mul(3600)))
    } else {
        Ok(Duration::from_secs(parse(s)?))
    }
}
