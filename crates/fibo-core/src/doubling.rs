//! Fast doubling over any `FibInteger` backend.
//!
//! The bits of n are consumed from the most significant one down. Each
//! bit doubles the index k held by the pair state and, when the bit is
//! set, moves it one further, so after the last bit k == n.

use crate::arith::FibInteger;
use crate::calculator::{FibError, Request};
use crate::capacity::estimated_bits;
use crate::progress::Pacer;
use crate::strategy::{DoublingStep, SequentialStep};

/// The pair (F(k), F(k+1)) advanced one bit at a time.
#[derive(Debug, Clone)]
pub struct PairState<T> {
    fk: T,
    fk1: T,
}

impl<T: FibInteger> PairState<T> {
    /// (F(0), F(1)).
    #[must_use]
    pub fn new() -> Self {
        Self {
            fk: T::zero(),
            fk1: T::one(),
        }
    }

    /// (F(0), F(1)) with both registers sized for `bits` bits.
    #[must_use]
    pub fn with_capacity_bits(bits: u64) -> Self {
        let mut state = Self::new();
        state.fk.reserve_bits(bits);
        state.fk1.reserve_bits(bits);
        state
    }

    /// Consume one bit of the index: k becomes 2k, or 2k+1 if `bit_set`.
    pub fn advance(&mut self, bit_set: bool, step: &dyn DoublingStep<T>) {
        let (f2k, f2k1) = step.double_index(&self.fk, &self.fk1);
        if bit_set {
            self.fk1 = f2k.add(&f2k1);
            self.fk = f2k1;
        } else {
            self.fk = f2k;
            self.fk1 = f2k1;
        }
    }

    /// Current F(k).
    #[must_use]
    pub fn fk(&self) -> &T {
        &self.fk
    }

    /// Current F(k+1).
    #[must_use]
    pub fn fk1(&self) -> &T {
        &self.fk1
    }

    /// Give up the pair, keeping F(k).
    #[must_use]
    pub fn into_fk(self) -> T {
        self.fk
    }
}

impl<T: FibInteger> Default for PairState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-based index of the highest set bit of `n` (floor(log2 n)).
///
/// `n` must be non-zero.
#[inline]
#[must_use]
pub fn highest_bit(n: u64) -> u32 {
    debug_assert!(n != 0);
    63 - n.leading_zeros()
}

fn base_case<T: FibInteger>(n: u64) -> Option<T> {
    match n {
        0 => Some(T::zero()),
        1 | 2 => Some(T::one()),
        _ => None,
    }
}

fn initial_state<T: FibInteger>(n: u64, presize: bool) -> PairState<T> {
    if presize {
        PairState::with_capacity_bits(estimated_bits(n))
    } else {
        PairState::new()
    }
}

/// Compute F(n) exactly.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
///
/// let f100: BigUint = fibo_core::doubling::fib(100);
/// assert_eq!(f100.to_string(), "354224848179261915075");
/// ```
#[must_use]
pub fn fib<T: FibInteger>(n: u64) -> T {
    fib_with(n, &SequentialStep, true)
}

/// Compute F(n) with an explicit step strategy and capacity hint.
#[must_use]
pub fn fib_with<T: FibInteger>(n: u64, step: &dyn DoublingStep<T>, presize: bool) -> T {
    if let Some(value) = base_case(n) {
        return value;
    }

    let mut state = initial_state(n, presize);
    for i in (0..=highest_bit(n)).rev() {
        state.advance((n >> i) & 1 == 1, step);
    }
    state.into_fk()
}

/// The doubling loop behind a [`Request`]: the stop token is polled
/// before every bit, progress goes out per whole percent of bits consumed,
/// and a final record marks completion.
pub fn run_doubling<T: FibInteger>(
    req: &Request<'_>,
    step: &dyn DoublingStep<T>,
    algorithm: &'static str,
) -> Result<T, FibError> {
    let n = req.n;
    if let Some(value) = base_case(n) {
        req.finish(algorithm);
        return Ok(value);
    }

    let num_bits = u64::from(highest_bit(n) + 1);
    let mut state = initial_state(n, req.options.presize);
    let mut pacer = Pacer::new(num_bits);

    for i in (0..num_bits).rev() {
        req.stop.check()?;

        state.advance((n >> i) & 1 == 1, step);

        let done = num_bits - i;
        if done < num_bits && pacer.tick(done) {
            req.report(algorithm, done, num_bits);
        }
    }

    req.finish(algorithm);
    Ok(state.into_fk())
}
