//! The calculator contract and its shared entry point.
//!
//! Algorithms implement [`Calculator::compute`]; callers go through
//! [`calculate`], which answers n <= 93 from the table and checks the stop
//! token once before handing over.

use std::time::Duration;

use num_bigint::BigUint;

use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::options::Options;
use crate::progress::{Progress, ProgressSink};
use crate::stop::StopToken;

/// Why a run did not produce F(n).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    #[error("unknown calculator: {0}")]
    UnknownAlgorithm(String),

    #[error("estimated memory ({needed} bytes) exceeds limit ({limit} bytes)")]
    MemoryLimit { needed: u64, limit: u64 },

    #[error("no calculator selected")]
    NoCalculator,

    #[error("calculation cancelled")]
    Cancelled,

    #[error("calculation timed out after {0:?}")]
    Timeout(Duration),

    #[error("result mismatch between {first} and {second}")]
    Mismatch {
        first: &'static str,
        second: &'static str,
    },
}

/// Everything one calculator needs for one F(n).
#[derive(Clone, Copy)]
pub struct Request<'a> {
    pub n: u64,
    pub options: Options,
    pub stop: &'a StopToken,
    pub sink: &'a dyn ProgressSink,
    /// Slot reported with every progress record.
    pub slot: usize,
}

impl<'a> Request<'a> {
    #[must_use]
    pub fn new(n: u64, stop: &'a StopToken, sink: &'a dyn ProgressSink) -> Self {
        Self {
            n,
            options: Options::default(),
            stop,
            sink,
            slot: 0,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn in_slot(mut self, slot: usize) -> Self {
        self.slot = slot;
        self
    }

    /// Report `done` of `total` steps for `algorithm`.
    pub fn report(&self, algorithm: &'static str, done: u64, total: u64) {
        self.sink
            .record(&Progress::new(self.slot, algorithm, done, total));
    }

    /// Report that `algorithm` has finished.
    pub fn finish(&self, algorithm: &'static str) {
        self.sink.record(&Progress::finished(self.slot, algorithm));
    }
}

/// A Fibonacci algorithm.
pub trait Calculator: Send + Sync {
    /// Display name, also used in progress records and comparisons.
    fn name(&self) -> &'static str;

    /// Compute F(req.n). Polls `req.stop` and finishes with a final
    /// progress record.
    fn compute(&self, req: &Request<'_>) -> Result<BigUint, FibError>;
}

/// Run `calc` for `req`, short-circuiting indices covered by the table.
///
/// # Example
/// ```
/// use fibo_core::calculator::{calculate, Request};
/// use fibo_core::fastdoubling::FastDoubling;
/// use fibo_core::progress::Silent;
/// use fibo_core::stop::StopToken;
///
/// let stop = StopToken::new();
/// let f = calculate(&FastDoubling, &Request::new(100, &stop, &Silent)).unwrap();
/// assert_eq!(f.to_string(), "354224848179261915075");
/// ```
pub fn calculate(calc: &dyn Calculator, req: &Request<'_>) -> Result<BigUint, FibError> {
    if let Some(value) = table_value(req.n) {
        req.finish(calc.name());
        return Ok(value);
    }

    req.stop.check()?;
    calc.compute(req)
}

#[allow(clippy::cast_possible_truncation)]
fn table_value(n: u64) -> Option<BigUint> {
    (n <= MAX_FIB_U64).then(|| BigUint::from(FIB_TABLE[n as usize]))
}
