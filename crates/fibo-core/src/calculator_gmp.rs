//! GMP-backed Fast Doubling using the `rug` crate.
//!
//! Only available when the `gmp` feature is enabled.

use num_bigint::BigUint;
use rug::Integer;

use crate::arith::FibInteger;
use crate::calculator::{Calculator, FibError, Request};
use crate::doubling::run_doubling;
use crate::strategy::select_step;

/// Fast doubling over `rug::Integer`; the result is converted to `BigUint`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GmpFastDoubling;

impl Calculator for GmpFastDoubling {
    fn name(&self) -> &'static str {
        "GmpFastDoubling"
    }

    fn compute(&self, req: &Request<'_>) -> Result<BigUint, FibError> {
        let step = select_step::<Integer>(&req.options);
        run_doubling(req, step.as_ref(), self.name()).map(|f| f.to_biguint())
    }
}
