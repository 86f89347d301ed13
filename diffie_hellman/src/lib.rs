//! Finite-field Diffie-Hellman key agreement over big-endian byte strings.
//!
//! The engine draws an ephemeral private key from an injected
//! [`RandomSource`], derives `G^x mod P` and computes raw shared secrets.
//! Arithmetic goes through the [`BigInteger`] trait so the backend can be
//! swapped; `num-bigint` is the default.

pub mod bigint;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod groups;
pub mod number_theory;
pub mod random;

pub use bigint::BigInteger;
pub use config::{DhConfig, PrivateKeyWidth, DEFAULT_PRIVATE_KEY_LEN};
pub use crypto::{DhParameters, DiffieHellman, KeyExchangeAlgorithm, KeyPair, SharedSecret};
pub use error::{DhError, Result};
pub use number_theory::SquareMultiply;
pub use random::{OsRandom, RandomSource};
