//! Arbitrary-precision integer contract used by the doubling engine.
//!
//! `FibInteger` is the narrow set of operations fast doubling needs:
//! multiply, square, add, subtract (never below zero), double, and an
//! optional capacity hint. `BigUint` is the default backend; `rug::Integer`
//! (GMP) is available behind the `gmp` feature.

use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

/// Non-negative integer of unbounded magnitude.
pub trait FibInteger:
    Clone + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The value 0.
    fn zero() -> Self;

    /// The value 1.
    fn one() -> Self;

    /// `self * rhs`.
    fn multiply(&self, rhs: &Self) -> Self;

    /// `self * self`.
    fn square(&self) -> Self {
        self.multiply(self)
    }

    /// `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`. Callers guarantee `self >= rhs`.
    fn subtract(&self, rhs: &Self) -> Self;

    /// `2 * self`.
    fn double(&self) -> Self;

    /// Reserve room for at least `bits` bits. Backends without a
    /// capacity API ignore it.
    fn reserve_bits(&mut self, _bits: u64) {}

    /// Number of significant bits (0 for zero).
    fn bit_len(&self) -> u64;

    /// The same value as a `BigUint`.
    fn to_biguint(&self) -> BigUint;
}

impl FibInteger for BigUint {
    fn zero() -> Self {
        BigUint::ZERO
    }

    fn one() -> Self {
        <BigUint as One>::one()
    }

    fn multiply(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn square(&self) -> Self {
        self * self
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn subtract(&self, rhs: &Self) -> Self {
        debug_assert!(self >= rhs, "subtraction would go below zero");
        self - rhs
    }

    fn double(&self) -> Self {
        self << 1u32
    }

    fn bit_len(&self) -> u64 {
        self.bits()
    }

    fn to_biguint(&self) -> BigUint {
        self.clone()
    }
}

#[cfg(feature = "gmp")]
mod gmp {
    use num_bigint::BigUint;
    use rug::integer::Order;
    use rug::Integer;

    use super::FibInteger;

    impl FibInteger for Integer {
        fn zero() -> Self {
            Integer::new()
        }

        fn one() -> Self {
            Integer::from(1u32)
        }

        fn multiply(&self, rhs: &Self) -> Self {
            Integer::from(self * rhs)
        }

        fn square(&self) -> Self {
            Integer::from(self.square_ref())
        }

        fn add(&self, rhs: &Self) -> Self {
            Integer::from(self + rhs)
        }

        fn subtract(&self, rhs: &Self) -> Self {
            debug_assert!(self >= rhs, "subtraction would go below zero");
            Integer::from(self - rhs)
        }

        fn double(&self) -> Self {
            Integer::from(self << 1u32)
        }

        fn reserve_bits(&mut self, bits: u64) {
            if let Ok(target) = usize::try_from(bits) {
                if let Some(additional) = target.checked_sub(self.capacity()) {
                    self.reserve(additional);
                }
            }
        }

        fn bit_len(&self) -> u64 {
            self.significant_bits_64()
        }

        fn to_biguint(&self) -> BigUint {
            BigUint::from_bytes_le(&self.to_digits::<u8>(Order::Lsf))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 10).unwrap()
    }

    #[test]
    fn biguint_identities() {
        assert_eq!(<BigUint as FibInteger>::zero(), BigUint::from(0u32));
        assert_eq!(<BigUint as FibInteger>::one(), BigUint::from(1u32));
    }

    #[test]
    fn biguint_arithmetic() {
        let x = big("123456789012345678901234567890");
        let y = big("987654321");

        assert_eq!(
            x.multiply(&y),
            big("121932631124828532112482853211126352690")
        );
        assert_eq!(y.square(), big("975461057789971041"));
        assert_eq!(
            FibInteger::add(&x, &y),
            big("123456789012345678902222222211")
        );
        assert_eq!(x.subtract(&y), big("123456789012345678900246913569"));
        assert_eq!(x.double(), big("246913578024691357802469135780"));
    }

    #[test]
    fn biguint_subtract_to_zero() {
        let x = big("340282366920938463463374607431768211456");
        assert_eq!(x.subtract(&x), BigUint::ZERO);
    }

    #[test]
    fn biguint_bit_len() {
        assert_eq!(<BigUint as FibInteger>::zero().bit_len(), 0);
        assert_eq!(BigUint::from(1u32).bit_len(), 1);
        assert_eq!(BigUint::from(255u32).bit_len(), 8);
        assert_eq!((BigUint::from(1u32) << 200u32).bit_len(), 201);
    }

    #[test]
    fn biguint_reserve_is_value_neutral() {
        let mut x = BigUint::from(42u32);
        x.reserve_bits(1 << 20);
        assert_eq!(x, BigUint::from(42u32));
    }

    #[test]
    fn biguint_display_is_decimal() {
        assert_eq!(big("354224848179261915075").to_string(), "354224848179261915075");
    }
}
