//! Doubling step strategies.
//!
//! A step maps (F(k), F(k+1)) to (F(2k), F(2k+1)):
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//! The three products are independent of each other, which is what
//! `ParallelStep` exploits.

use crate::arith::FibInteger;
use crate::options::Options;

/// Computes one doubling step.
pub trait DoublingStep<T: FibInteger>: Send + Sync {
    /// Given F(k) and F(k+1), return (F(2k), F(2k+1)).
    fn double_index(&self, fk: &T, fk1: &T) -> (T, T);

    /// Get the name of this strategy.
    fn name(&self) -> &'static str;
}

/// One product after the other.
pub struct SequentialStep;

impl SequentialStep {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SequentialStep {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FibInteger> DoublingStep<T> for SequentialStep {
    fn double_index(&self, fk: &T, fk1: &T) -> (T, T) {
        // 2*F(k+1) >= F(k) for every k, so this never goes negative
        let t = fk1.double().subtract(fk);
        let f2k = fk.multiply(&t);
        let f2k1 = fk.square().add(&fk1.square());
        (f2k, f2k1)
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}

/// Runs the multiply and both squarings on the rayon pool once F(k+1)
/// reaches `threshold` bits; below that it behaves like `SequentialStep`.
pub struct ParallelStep {
    threshold: u64,
}

impl ParallelStep {
    #[must_use]
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold: threshold as u64,
        }
    }
}

impl<T: FibInteger> DoublingStep<T> for ParallelStep {
    fn double_index(&self, fk: &T, fk1: &T) -> (T, T) {
        if fk1.bit_len() < self.threshold {
            return SequentialStep.double_index(fk, fk1);
        }

        let t = fk1.double().subtract(fk);
        let ((fk_sq, fk1_sq), f2k) = rayon::join(
            || rayon::join(|| fk.square(), || fk1.square()),
            || fk.multiply(&t),
        );
        (f2k, fk_sq.add(&fk1_sq))
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}

/// Pick the step strategy described by `opts`.
#[must_use]
pub fn select_step<T: FibInteger>(opts: &Options) -> Box<dyn DoublingStep<T>> {
    if opts.is_parallel() {
        Box::new(ParallelStep::new(opts.parallel_threshold))
    } else {
        Box::new(SequentialStep::new())
    }
}
