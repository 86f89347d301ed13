use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// Arbitrary-precision unsigned arithmetic needed by the key exchange.
///
/// Implementations must accept any byte string (the empty string is zero),
/// serialize canonically (no leading zero bytes, zero is `[0x00]`) and never
/// panic inside `mod_pow`, including for a modulus of 0 or 1.
pub trait BigInteger: Clone + PartialEq + fmt::Debug + Sized {
    /// Parses an unsigned big-endian integer.
    fn from_bytes_be(bytes: &[u8]) -> Self;

    /// Canonical big-endian serialization.
    fn to_bytes_be(&self) -> Vec<u8>;

    /// `self^exponent mod modulus`. A zero modulus yields zero.
    fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Self;

    /// Number of significant bits.
    fn bits(&self) -> u64;
}

impl BigInteger for BigUint {
    fn from_bytes_be(bytes: &[u8]) -> Self {
        BigUint::from_bytes_be(bytes)
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        BigUint::to_bytes_be(self)
    }

    fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Self {
        // BigUint::modpow panics on a zero modulus
        if modulus.is_zero() || modulus.is_one() {
            return BigUint::zero();
        }
        (self % modulus).modpow(exponent, modulus)
    }

    fn bits(&self) -> u64 {
        BigUint::bits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn empty_bytes_parse_as_zero() {
        let zero = <BigUint as BigInteger>::from_bytes_be(&[]);
        assert!(zero.is_zero());
        assert_eq!(BigInteger::to_bytes_be(&zero), vec![0x00]);
    }

    #[test]
    fn leading_zeros_are_dropped() {
        let v = <BigUint as BigInteger>::from_bytes_be(&[0x00, 0x00, 0x01, 0x02]);
        assert_eq!(BigInteger::to_bytes_be(&v), vec![0x01, 0x02]);
    }

    #[test]
    fn mod_pow_matches_small_values() {
        assert_eq!(n(5).mod_pow(&n(6), &n(23)), n(8));
        assert_eq!(n(4).mod_pow(&n(13), &n(497)), n(445));
    }

    #[test]
    fn mod_pow_degenerate_moduli() {
        assert_eq!(n(5).mod_pow(&n(0), &n(1)), n(0));
        assert_eq!(n(5).mod_pow(&n(3), &n(0)), n(0));
    }

    #[test]
    fn mod_pow_zero_exponent_is_one() {
        assert_eq!(n(123).mod_pow(&n(0), &n(23)), n(1));
        assert_eq!(n(0).mod_pow(&n(0), &n(22)), n(1));
    }

    #[test]
    fn mod_pow_reduces_oversized_base() {
        assert_eq!(n(23 * 1000 + 5).mod_pow(&n(6), &n(23)), n(8));
    }
}
