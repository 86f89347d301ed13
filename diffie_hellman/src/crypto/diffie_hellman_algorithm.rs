use crate::bigint::BigInteger;
use crate::config::DhConfig;
use crate::crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair, SharedSecret};
use crate::encoding;
use crate::error::{DhError, Result};
use crate::random::RandomSource;
use log::{debug, error};
use num_bigint::BigUint;
use std::marker::PhantomData;
use std::time::Instant;
use zeroize::Zeroizing;

/// Group parameters: modulus P and base G, both canonical big-endian.
///
/// Primality and generator order are the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    modulus: Vec<u8>,
    base: Vec<u8>,
}

impl DhParameters {
    pub fn new(modulus: impl AsRef<[u8]>, base: impl AsRef<[u8]>) -> Self {
        Self {
            modulus: encoding::canonical(modulus.as_ref()).to_vec(),
            base: encoding::canonical(base.as_ref()).to_vec(),
        }
    }

    pub fn rfc3526_group14() -> Self {
        crate::groups::rfc3526_group14()
    }

    pub fn modulus(&self) -> &[u8] {
        &self.modulus
    }

    pub fn base(&self) -> &[u8] {
        &self.base
    }
}

/// Classic finite-field Diffie-Hellman.
///
/// Stateless apart from its configuration; every call parses its inputs,
/// exponentiates with the `B` backend and hands back canonical bytes.
/// Callers own all keys and secrets it produces.
pub struct DiffieHellman<B = BigUint> {
    config: DhConfig,
    backend: PhantomData<fn() -> B>,
}

impl DiffieHellman {
    pub fn new(config: DhConfig) -> Self {
        Self::with_backend(config)
    }
}

impl Default for DiffieHellman {
    fn default() -> Self {
        Self::new(DhConfig::default())
    }
}

impl<B: BigInteger> Clone for DiffieHellman<B> {
    fn clone(&self) -> Self {
        Self::with_backend(self.config)
    }
}

impl<B: BigInteger> DiffieHellman<B> {
    /// Builds an engine on an explicit arithmetic backend.
    pub fn with_backend(config: DhConfig) -> Self {
        Self {
            config,
            backend: PhantomData,
        }
    }

    pub fn config(&self) -> &DhConfig {
        &self.config
    }

    /// Draws a random private key and derives `base^private mod modulus`.
    ///
    /// The private key width comes from the engine's [`DhConfig`]; the random
    /// source read is the only thing that can fail.
    pub fn generate_key_pair<R: RandomSource + ?Sized>(
        &self,
        modulus: &[u8],
        base: &[u8],
        rng: &mut R,
    ) -> Result<KeyPair> {
        let start = Instant::now();
        let len = self.config.private_key_len(encoding::canonical_len(modulus));

        let mut private_bytes = Zeroizing::new(vec![0u8; len]);
        if let Err(source) = rng.fill_random(private_bytes.as_mut_slice()) {
            error!("Random source failed to provide {} bytes for a DH private key", len);
            return Err(DhError::RandomSourceFailure {
                requested: len,
                source,
            });
        }

        let pair = self.key_pair_from_private(&private_bytes, modulus, base);
        debug!(
            "DH key pair generated in {:.3} ms ({}-byte private key, {}-byte modulus)",
            elapsed_ms(start),
            len,
            modulus.len()
        );
        Ok(pair)
    }

    /// Rebuilds the key pair belonging to an existing private key.
    pub fn key_pair_from_private(&self, private_key: &[u8], modulus: &[u8], base: &[u8]) -> KeyPair {
        let modulus = B::from_bytes_be(modulus);
        let base = B::from_bytes_be(base);
        let private_key = B::from_bytes_be(private_key);

        let public_key = base.mod_pow(&private_key, &modulus);
        KeyPair::new(private_key.to_bytes_be(), public_key.to_bytes_be())
    }

    /// `remote_public_key^private_key mod modulus`.
    ///
    /// The remote key is not validated: empty input, values at or above the
    /// modulus and degenerate elements are all reduced and exponentiated.
    /// Reject small-subgroup keys before calling this if that matters.
    pub fn compute_shared_secret(
        &self,
        private_key: &[u8],
        remote_public_key: &[u8],
        modulus: &[u8],
    ) -> SharedSecret {
        let start = Instant::now();
        let private_key = B::from_bytes_be(private_key);
        let remote_public_key = B::from_bytes_be(remote_public_key);
        let modulus = B::from_bytes_be(modulus);

        let secret = remote_public_key.mod_pow(&private_key, &modulus);
        debug!(
            "DH shared secret computed in {:.3} ms ({}-bit modulus)",
            elapsed_ms(start),
            modulus.bits()
        );
        SharedSecret::new(secret.to_bytes_be())
    }
}

impl<B: BigInteger> KeyExchangeAlgorithm for DiffieHellman<B> {
    type Parameters = DhParameters;

    fn generate_keypair<R: RandomSource + ?Sized>(
        &self,
        params: &DhParameters,
        rng: &mut R,
    ) -> Result<KeyPair> {
        self.generate_key_pair(params.modulus(), params.base(), rng)
    }

    fn shared_secret(
        &self,
        params: &DhParameters,
        own_private_key: &[u8],
        other_public_key: &[u8],
    ) -> SharedSecret {
        self.compute_shared_secret(own_private_key, other_public_key, params.modulus())
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
