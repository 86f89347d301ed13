//! Key exchange algorithms and their shared traits.

pub mod diffie_hellman_algorithm;
pub mod key_exchange_traits;

pub use self::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use self::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair, SharedSecret};
