//! CLI result presenter.

use std::time::Duration;

use num_bigint::BigUint;

use fibo_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{format_digits, format_duration, format_seconds};
use crate::ui;

/// What the presenter prints besides the result line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationConfig {
    /// Suppress everything but the result line, errors included.
    pub quiet: bool,
    /// Never elide long results.
    pub print_full: bool,
    /// Add algorithm name and bit length.
    pub details: bool,
}

/// Prints results to stdout and errors to stderr.
///
/// In quiet mode a failure is visible through the exit code only.
pub struct CLIResultPresenter {
    config: PresentationConfig,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    /// Lines printed before the computation starts.
    #[must_use]
    pub fn start_lines(&self, n: u64) -> Vec<String> {
        if self.config.quiet {
            Vec::new()
        } else {
            vec![format!("Computing F({n})...")]
        }
    }

    /// Lines printed for the selected result, result line last.
    #[must_use]
    pub fn result_lines(
        &self,
        algorithm: &str,
        n: u64,
        result: &BigUint,
        duration: Duration,
    ) -> Vec<String> {
        let digits = result.to_string();
        let mut lines = Vec::new();

        if !self.config.quiet {
            lines.push(format!(
                "Computation time: {} seconds",
                format_seconds(duration)
            ));
            lines.push(format!("F({n}) has {} decimal digits", digits.len()));
            if self.config.details {
                lines.push(format!("Algorithm: {algorithm}"));
                lines.push(format!("F({n}) has {} bits", result.bits()));
            }
        }

        lines.push(format!(
            "F({n}) = {}",
            format_digits(&digits, self.config.print_full)
        ));
        lines
    }

    /// Lines printed on stderr for a failed run.
    #[must_use]
    pub fn error_lines(&self, error: &str) -> Vec<String> {
        if self.config.quiet {
            Vec::new()
        } else {
            vec![ui::error_line(error)]
        }
    }

    /// Per-calculator summary rows.
    #[must_use]
    pub fn comparison_lines(&self, results: &[CalculationResult]) -> Vec<String> {
        if self.config.quiet {
            return Vec::new();
        }

        let mut lines = vec![ui::header_line("Comparison")];
        for r in results {
            let detail = match &r.outcome {
                Ok(value) => format!("{} bits", value.bits()),
                Err(e) => e.to_string(),
            };
            lines.push(format!(
                "  {:<18} {:>12}  {} {detail}",
                r.algorithm,
                format_duration(r.duration),
                ui::status_tag(r.outcome.is_ok()),
            ));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_start(&self, n: u64) {
        for line in self.start_lines(n) {
            println!("{line}");
        }
    }

    fn present_result(&self, algorithm: &str, n: u64, result: &BigUint, duration: Duration) {
        for line in self.result_lines(algorithm, n, result, duration) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        for line in self.comparison_lines(results) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        for line in self.error_lines(error) {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibo_core::calculator::FibError;

    fn f100() -> BigUint {
        BigUint::parse_bytes(b"354224848179261915075", 10).unwrap()
    }

    fn presenter(quiet: bool, print_full: bool, details: bool) -> CLIResultPresenter {
        CLIResultPresenter::new(PresentationConfig {
            quiet,
            print_full,
            details,
        })
    }

    #[test]
    fn default_result_lines() {
        let lines = presenter(false, false, false).result_lines(
            "FastDoubling",
            100,
            &f100(),
            Duration::from_millis(2),
        );
        assert_eq!(
            lines,
            vec![
                "Computation time: 0.002000 seconds".to_string(),
                "F(100) has 21 decimal digits".to_string(),
                "F(100) = 354224848179261915075".to_string(),
            ]
        );
    }

    #[test]
    fn quiet_prints_only_the_value() {
        let p = presenter(true, false, true);
        assert!(p.start_lines(100).is_empty());
        let lines = p.result_lines("FastDoubling", 100, &f100(), Duration::ZERO);
        assert_eq!(lines, vec!["F(100) = 354224848179261915075".to_string()]);
    }

    #[test]
    fn details_add_algorithm_and_bits() {
        let lines =
            presenter(false, false, true).result_lines("Iterative", 100, &f100(), Duration::ZERO);
        assert!(lines.contains(&"Algorithm: Iterative".to_string()));
        assert!(lines.contains(&"F(100) has 69 bits".to_string()));
    }

    #[test]
    fn long_values_elided_unless_full() {
        let big = BigUint::from(7u32).pow(200);
        let digits = big.to_string();
        assert!(digits.len() > 100);

        let elided = presenter(false, false, false).result_lines("x", 1, &big, Duration::ZERO);
        assert!(elided.last().unwrap().contains("..."));

        let full = presenter(false, true, false).result_lines("x", 1, &big, Duration::ZERO);
        assert_eq!(full.last().unwrap(), &format!("F(1) = {digits}"));
    }

    #[test]
    fn quiet_suppresses_errors() {
        let message = "unknown calculator: nope";
        assert!(presenter(true, false, false).error_lines(message).is_empty());

        let lines = presenter(false, false, false).error_lines(message);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(message));
    }

    #[test]
    fn start_line() {
        assert_eq!(
            presenter(false, false, false).start_lines(42),
            vec!["Computing F(42)...".to_string()]
        );
    }

    #[test]
    fn comparison_rows() {
        let results = vec![
            CalculationResult {
                algorithm: "FastDoubling",
                outcome: Ok(BigUint::from(55u32)),
                duration: Duration::from_millis(3),
            },
            CalculationResult {
                algorithm: "Iterative",
                outcome: Err(FibError::Cancelled),
                duration: Duration::from_millis(1),
            },
        ];
        let lines = presenter(false, false, false).comparison_lines(&results);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("FastDoubling"));
        assert!(lines[2].contains("calculation cancelled"));
        assert!(presenter(true, false, false)
            .comparison_lines(&results)
            .is_empty());
    }
}
