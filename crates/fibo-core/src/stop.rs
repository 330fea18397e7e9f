//! Stop requests shared between the Ctrl+C handler and running calculators.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::calculator::FibError;

/// Stop flag plus an optional wall-clock limit.
///
/// Clones share the flag, so the signal handler can hold one while the
/// doubling loop polls another.
///
/// # Example
/// ```
/// use fibo_core::stop::StopToken;
/// use fibo_core::FibError;
///
/// let token = StopToken::new();
/// assert!(token.check().is_ok());
///
/// token.clone().request();
/// assert_eq!(token.check(), Err(FibError::Cancelled));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    requested: Arc<AtomicBool>,
    deadline: Option<(Instant, Duration)>,
}

impl StopToken {
    /// A token that only stops on request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also stops once `limit` has elapsed from now.
    #[must_use]
    pub fn with_deadline(limit: Duration) -> Self {
        Self {
            requested: Arc::default(),
            deadline: Instant::now().checked_add(limit).map(|at| (at, limit)),
        }
    }

    /// Ask every holder of this token to stop.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }

    /// `Cancelled` after a request, `Timeout` past the deadline.
    ///
    /// A request wins when both apply.
    pub fn check(&self) -> Result<(), FibError> {
        if self.requested.load(Ordering::Relaxed) {
            return Err(FibError::Cancelled);
        }
        match self.deadline {
            Some((at, limit)) if Instant::now() >= at => Err(FibError::Timeout(limit)),
            _ => Ok(()),
        }
    }
}
