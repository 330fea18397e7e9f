//! Result-size estimate used to pre-size the pair registers.

use crate::constants::{CAPACITY_SLACK_BITS, LOG2_PHI};

/// Upper bound on the bit length of F(n): `ceil(n * log2(phi))` plus a
/// fixed slack.
///
/// F(n) <= phi^(n-1), so for every n below 2^53, where the product is
/// exact enough, the bound holds.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn estimated_bits(n: u64) -> u64 {
    (n as f64 * LOG2_PHI).ceil() as u64 + CAPACITY_SLACK_BITS
}
