//! Error handling and exit codes.

use fibo_core::calculator::FibError;
use fibo_core::constants::exit_codes;

/// Exit code for a library error.
#[must_use]
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::UnknownAlgorithm(_) | FibError::MemoryLimit { .. } | FibError::NoCalculator => {
            exit_codes::ERROR_CONFIG
        }
        FibError::Cancelled => exit_codes::ERROR_CANCELED,
        FibError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error: the first `FibError` in the chain
/// decides, anything else is a generic failure.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::time::Duration;

    const MISMATCH: FibError = FibError::Mismatch {
        first: "FastDoubling",
        second: "Iterative",
    };

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&FibError::Cancelled), 130);
        assert_eq!(handle_error(&FibError::Timeout(Duration::from_secs(300))), 124);
        assert_eq!(handle_error(&MISMATCH), 3);
        assert_eq!(handle_error(&FibError::UnknownAlgorithm("x".into())), 4);
        assert_eq!(
            handle_error(&FibError::MemoryLimit {
                needed: 2,
                limit: 1
            }),
            4
        );
        assert_eq!(handle_error(&FibError::NoCalculator), 4);
    }

    #[test]
    fn timeout_code_is_not_a_usage_error() {
        // clap exits with 2 on bad arguments
        assert_ne!(exit_codes::ERROR_TIMEOUT, 2);
        assert_ne!(exit_codes::ERROR_TIMEOUT, exit_codes::ERROR_GENERIC);
    }

    #[test]
    fn exit_code_finds_wrapped_error() {
        let err = Err::<(), _>(MISMATCH)
            .context("comparing results")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_MISMATCH);
    }

    #[test]
    fn exit_code_for_foreign_error() {
        let err = anyhow::Error::new(std::io::Error::other("disk full"));
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
