//! Fast Doubling calculator over `num-bigint`.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! O(log n) big-integer multiplications.

use num_bigint::BigUint;

use crate::calculator::{Calculator, FibError, Request};
use crate::doubling::run_doubling;
use crate::strategy::select_step;

/// Fast doubling over `BigUint`, the default calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastDoubling;

impl Calculator for FastDoubling {
    fn name(&self) -> &'static str {
        "FastDoubling"
    }

    fn compute(&self, req: &Request<'_>) -> Result<BigUint, FibError> {
        let step = select_step::<BigUint>(&req.options);
        run_doubling(req, step.as_ref(), self.name())
    }
}
