use crate::bigint::BigInteger;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Modular exponentiation by square-and-multiply: base^exp mod modulus.
///
/// Walks the exponent from its least significant bit, reducing after every
/// multiplication so intermediates stay below modulus^2.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() {
        return BigUint::zero();
    }
    let mut base = base % modulus;
    // 1 mod 1 == 0
    let mut result = BigUint::one() % modulus;

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
    }
    result
}

/// Arithmetic backend that routes exponentiation through [`mod_pow`]
/// instead of `BigUint::modpow`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMultiply(pub BigUint);

impl BigInteger for SquareMultiply {
    fn from_bytes_be(bytes: &[u8]) -> Self {
        SquareMultiply(BigUint::from_bytes_be(bytes))
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Self {
        SquareMultiply(mod_pow(&self.0, &exponent.0, &modulus.0))
    }

    fn bits(&self) -> u64 {
        self.0.bits()
    }
}
