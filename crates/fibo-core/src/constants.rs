//! Constants shared by the engine, the calculators and the CLI.

/// log2 of the golden ratio. F(n) has at most `ceil(LOG2_PHI * n)` bits.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617_3;

/// Extra bits added on top of the `LOG2_PHI * n` capacity estimate.
pub const CAPACITY_SLACK_BITS: u64 = 100;

/// Additions between two stop checks in the linear reference.
pub const ITERATIVE_CHECK_INTERVAL: u64 = 4096;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation exceeded its deadline. Distinct from clap's usage code 2.
    pub const ERROR_TIMEOUT: i32 = 124;
    /// Calculators disagreed during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[3], 2);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }
}
