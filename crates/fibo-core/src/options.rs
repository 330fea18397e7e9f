//! Calculation options.

/// Options for a Fibonacci calculation.
///
/// Neither option changes the numeric result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Operand size (in bits) from which the three products of a doubling
    /// step run concurrently. 0 keeps every step sequential.
    pub parallel_threshold: usize,
    /// Reserve the estimated result size in the pair registers up front.
    pub presize: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            parallel_threshold: 0,
            presize: true,
        }
    }
}

impl Options {
    /// Whether the doubling step may use the rayon pool.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel_threshold > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_sequential() {
        let opts = Options::default();
        assert_eq!(opts.parallel_threshold, 0);
        assert!(opts.presize);
        assert!(!opts.is_parallel());
    }

    #[test]
    fn nonzero_threshold_is_parallel() {
        let opts = Options {
            parallel_threshold: 4096,
            ..Default::default()
        };
        assert!(opts.is_parallel());
    }
}
