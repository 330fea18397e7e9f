//! Seams between orchestration and the terminal front end.

use std::time::Duration;

use num_bigint::BigUint;

use fibo_core::calculator::FibError;
use fibo_core::progress::Progress;

/// Shows progress records to the user.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, progress: &Progress);

    /// Called once the record stream has ended.
    fn complete(&self);
}

/// Renders the run to the user.
pub trait ResultPresenter {
    /// Announce that F(n) is about to be computed.
    fn present_start(&self, n: u64);

    fn present_result(&self, algorithm: &str, n: u64, result: &BigUint, duration: Duration);

    /// Per-calculator summary, shown when several ran.
    fn present_comparison(&self, results: &[CalculationResult]);

    fn present_error(&self, error: &str);
}

/// What one calculator produced, and how long it took.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    pub algorithm: &'static str,
    pub outcome: Result<BigUint, FibError>,
    pub duration: Duration,
}

impl CalculationResult {
    #[must_use]
    pub fn value(&self) -> Option<&BigUint> {
        self.outcome.as_ref().ok()
    }
}

/// The result chosen for presentation once every run agreed.
#[derive(Debug, Clone, Copy)]
pub struct Selected<'a> {
    pub algorithm: &'static str,
    pub value: &'a BigUint,
    pub duration: Duration,
}
