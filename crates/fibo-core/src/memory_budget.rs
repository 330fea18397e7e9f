//! Memory budget estimation and validation.

use crate::calculator::FibError;
use crate::capacity::estimated_bits;

/// Memory estimate for a Fibonacci computation.
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Estimated memory for the result itself (in bytes).
    pub result_bytes: u64,
    /// Estimated memory for temporaries (in bytes).
    pub temp_bytes: u64,
    /// Total estimated memory (in bytes).
    pub total_bytes: u64,
}

impl MemoryEstimate {
    /// Live values during a doubling step besides the result: the other
    /// pair register, 2*F(k+1) - F(k), and the three products.
    const TEMPORARIES: u64 = 5;

    /// Estimate memory usage for computing F(n).
    #[must_use]
    pub fn estimate(n: u64) -> Self {
        let result_bytes = estimated_bits(n).div_ceil(8);
        let temp_bytes = result_bytes.saturating_mul(Self::TEMPORARIES);

        Self {
            result_bytes,
            temp_bytes,
            total_bytes: result_bytes.saturating_add(temp_bytes),
        }
    }

    /// Check if the computation fits within `limit` bytes (0 = unlimited).
    #[must_use]
    pub fn fits_in(&self, limit: u64) -> bool {
        limit == 0 || self.total_bytes <= limit
    }

    /// The estimate for F(n), or `MemoryLimit` when it exceeds `limit`.
    pub fn check(n: u64, limit: u64) -> Result<Self, FibError> {
        let estimate = Self::estimate(n);
        if estimate.fits_in(limit) {
            Ok(estimate)
        } else {
            Err(FibError::MemoryLimit {
                needed: estimate.total_bytes,
                limit,
            })
        }
    }
}

/// Parse a memory limit string (e.g., "8G", "512M", "1024K", "64B").
///
/// An empty string means unlimited and parses to 0.
pub fn parse_memory_limit(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: u64 = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .ok_or_else(|| format!("memory limit {s:?} is too large"))
}
