//! Golden Fibonacci values shared by the workspace integration tests.
//!
//! The data lives in `tests/testdata/fibonacci_golden.json`. Small indices
//! carry the exact decimal value; large ones carry a decimal prefix, suffix
//! and digit count.

use std::path::Path;

use num_bigint::BigUint;
use serde::Deserialize;
use thiserror::Error;

/// Path of the golden file inside this package.
pub const GOLDEN_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/testdata/fibonacci_golden.json"
);

#[derive(Debug, Error)]
pub enum GoldenError {
    #[error("failed to read golden file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse golden file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("F({n}): {what} mismatch (expected {expected}, got {actual})")]
    Mismatch {
        n: u64,
        what: &'static str,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<String>,
    #[serde(default)]
    pub fib_prefix: Option<String>,
    #[serde(default)]
    pub fib_suffix: Option<String>,
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

impl GoldenEntry {
    /// Check a computed value against every field this entry carries.
    pub fn verify(&self, value: &BigUint) -> Result<(), GoldenError> {
        let digits = value.to_string();
        let mismatch = |what, expected: &str| GoldenError::Mismatch {
            n: self.n,
            what,
            expected: expected.to_string(),
            actual: digits.clone(),
        };

        if let Some(expected) = &self.fib {
            if &digits != expected {
                return Err(mismatch("value", expected));
            }
        }
        if let Some(prefix) = &self.fib_prefix {
            if !digits.starts_with(prefix.as_str()) {
                return Err(mismatch("prefix", prefix));
            }
        }
        if let Some(suffix) = &self.fib_suffix {
            if !digits.ends_with(suffix.as_str()) {
                return Err(mismatch("suffix", suffix));
            }
        }
        if let Some(count) = self.fib_digits {
            if digits.len() != count {
                return Err(GoldenError::Mismatch {
                    n: self.n,
                    what: "digit count",
                    expected: count.to_string(),
                    actual: digits.len().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Load golden data from `path`.
pub fn load_from(path: impl AsRef<Path>) -> Result<GoldenData, GoldenError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Load the bundled golden data.
pub fn load() -> Result<GoldenData, GoldenError> {
    load_from(GOLDEN_PATH)
}
