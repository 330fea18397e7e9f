//! # fibo-core
//!
//! Fast-doubling Fibonacci over arbitrary-precision integers: the doubling
//! engine, the integer contract it runs on, and the calculators built on
//! top of it.

pub mod arith;
pub mod calculator;
#[cfg(feature = "gmp")]
pub mod calculator_gmp;
pub mod capacity;
pub mod constants;
pub mod doubling;
pub mod fastdoubling;
pub mod iterative;
pub mod memory_budget;
pub mod options;
pub mod progress;
pub mod registry;
pub mod stop;
pub mod strategy;

// Re-exports
pub use arith::FibInteger;
pub use calculator::{calculate, Calculator, FibError, Request};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use doubling::{fib, PairState};
pub use options::Options;
pub use progress::{Progress, ProgressSink};
pub use stop::StopToken;
pub use strategy::{DoublingStep, ParallelStep, SequentialStep};

use num_bigint::BigUint;

/// Compute F(n) with `BigUint`.
///
/// Pure and infallible; for progress, a deadline or another backend use
/// [`doubling::fib`] or [`calculate`].
///
/// # Example
/// ```
/// assert_eq!(fibo_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibo_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    doubling::fib(n)
}
