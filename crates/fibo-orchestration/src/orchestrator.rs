//! Running calculators and reconciling their results.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, warn};

use fibo_core::calculator::{calculate, Calculator, FibError, Request};

use crate::interfaces::{CalculationResult, Selected};

fn run_one(calc: &dyn Calculator, req: &Request<'_>) -> CalculationResult {
    let algorithm = calc.name();
    debug!(algorithm, n = req.n, slot = req.slot, "Starting calculation");
    let start = Instant::now();
    let outcome = calculate(calc, req);
    let duration = start.elapsed();

    match &outcome {
        Ok(_) => debug!(algorithm, ?duration, "Calculation finished"),
        Err(e) => warn!(algorithm, error = %e, "Calculation failed"),
    }

    CalculationResult {
        algorithm,
        outcome,
        duration,
    }
}

/// Compute F(n) with every calculator given, each in the slot matching
/// its position.
///
/// A single calculator runs on the calling thread; several run
/// concurrently on the rayon pool. Results keep the order of
/// `calculators`.
pub fn run_calculators(
    calculators: &[Arc<dyn Calculator>],
    req: &Request<'_>,
) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), &req.in_slot(0))];
    }

    calculators
        .iter()
        .enumerate()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(slot, calc)| run_one(calc.as_ref(), &req.in_slot(slot)))
        .collect()
}

/// Pick the result to present.
///
/// Successful results must all carry the same value, otherwise
/// `Mismatch` names the first pair that disagrees. When nothing
/// succeeded the first error is returned, and `NoCalculator` when
/// `results` is empty.
pub fn select_result(results: &[CalculationResult]) -> Result<Selected<'_>, FibError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.value().map(|v| (r, v)));

    let Some((first, value)) = valid.next() else {
        return Err(results
            .iter()
            .find_map(|r| r.outcome.as_ref().err().cloned())
            .unwrap_or(FibError::NoCalculator));
    };

    if let Some((other, _)) = valid.find(|(_, v)| *v != value) {
        warn!(
            first = first.algorithm,
            second = other.algorithm,
            "Calculators disagree"
        );
        return Err(FibError::Mismatch {
            first: first.algorithm,
            second: other.algorithm,
        });
    }

    Ok(Selected {
        algorithm: first.algorithm,
        value,
        duration: first.duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fibo_core::fastdoubling::FastDoubling;
    use fibo_core::iterative::IterativeReference;
    use fibo_core::progress::{ChannelSink, Silent};
    use fibo_core::stop::StopToken;
    use num_bigint::BigUint;

    fn both() -> Vec<Arc<dyn Calculator>> {
        vec![Arc::new(FastDoubling), Arc::new(IterativeReference)]
    }

    fn result(name: &'static str, outcome: Result<BigUint, FibError>) -> CalculationResult {
        CalculationResult {
            algorithm: name,
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn single_calculator() {
        let stop = StopToken::new();
        let calcs: Vec<Arc<dyn Calculator>> = vec![Arc::new(FastDoubling)];
        let results = run_calculators(&calcs, &Request::new(100, &stop, &Silent));
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].value().unwrap().to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn several_calculators_keep_order_and_agree() {
        let stop = StopToken::new();
        let results = run_calculators(&both(), &Request::new(1500, &stop, &Silent));
        assert_eq!(results[0].algorithm, "FastDoubling");
        assert_eq!(results[1].algorithm, "Iterative");
        let selected = select_result(&results).unwrap();
        assert_eq!(selected.algorithm, "FastDoubling");
        assert_eq!(Some(selected.value), results[1].value());
    }

    #[test]
    fn concurrent_runs_report_in_their_own_slots() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let sink = ChannelSink::new(tx);
        let stop = StopToken::new();
        run_calculators(&both(), &Request::new(20_000, &stop, &sink));
        drop(sink);

        let finished: Vec<usize> = rx
            .iter()
            .filter(|p| p.is_finished())
            .map(|p| p.slot)
            .collect();
        assert_eq!(finished.len(), 2);
        assert!(finished.contains(&0));
        assert!(finished.contains(&1));
    }

    #[test]
    fn stop_request_fails_every_run() {
        let stop = StopToken::new();
        stop.request();
        let results = run_calculators(&both(), &Request::new(10_000_000, &stop, &Silent));
        assert!(results
            .iter()
            .all(|r| r.outcome == Err(FibError::Cancelled)));
        assert_eq!(select_result(&results).err(), Some(FibError::Cancelled));
    }

    #[test]
    fn mismatch_names_both_sides() {
        let results = vec![
            result("A", Ok(BigUint::from(55u32))),
            result("B", Ok(BigUint::from(55u32))),
            result("C", Ok(BigUint::from(56u32))),
        ];
        assert_eq!(
            select_result(&results).err(),
            Some(FibError::Mismatch {
                first: "A",
                second: "C"
            })
        );
    }

    #[test]
    fn failed_entries_are_skipped() {
        let results = vec![
            result("A", Err(FibError::Timeout(Duration::from_secs(1)))),
            result("B", Ok(BigUint::from(55u32))),
        ];
        let selected = select_result(&results).unwrap();
        assert_eq!(selected.algorithm, "B");
        assert_eq!(selected.value, &BigUint::from(55u32));
    }

    #[test]
    fn all_failed_returns_first_error() {
        let results = vec![
            result("A", Err(FibError::Timeout(Duration::from_secs(1)))),
            result("B", Err(FibError::Cancelled)),
        ];
        assert_eq!(
            select_result(&results).err(),
            Some(FibError::Timeout(Duration::from_secs(1)))
        );
    }

    #[test]
    fn nothing_ran() {
        assert_eq!(select_result(&[]).err(), Some(FibError::NoCalculator));
    }
}
