//! Linear-recurrence reference calculator.
//!
//! O(n) big-integer additions. Slow for large n, but simple enough to
//! serve as the baseline fast doubling is cross-checked against.

use num_bigint::BigUint;

use crate::calculator::{Calculator, FibError, Request};
use crate::constants::ITERATIVE_CHECK_INTERVAL;
use crate::progress::Pacer;

/// F(n) by repeated addition.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeReference;

impl Calculator for IterativeReference {
    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn compute(&self, req: &Request<'_>) -> Result<BigUint, FibError> {
        let n = req.n;
        let mut pacer = Pacer::new(n);
        let mut a = BigUint::ZERO;
        let mut b = BigUint::from(1u32);

        for i in 0..n {
            if i % ITERATIVE_CHECK_INTERVAL == 0 {
                req.stop.check()?;
                if i > 0 && pacer.tick(i) {
                    req.report(self.name(), i, n);
                }
            }

            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }

        req.finish(self.name());
        Ok(a)
    }
}
