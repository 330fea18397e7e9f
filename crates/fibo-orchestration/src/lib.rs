//! # fibo-orchestration
//!
//! Calculator selection, concurrent execution, and cross-validation of
//! results.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use calculator_selection::resolve_calculators;
pub use interfaces::{CalculationResult, ProgressReporter, ResultPresenter, Selected};
pub use orchestrator::{run_calculators, select_result};
