use crate::error::Result;
use crate::random::RandomSource;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Ephemeral key pair. Both halves are canonical big-endian integers and the
/// private half is wiped when the pair is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: Vec<u8>,
    public_key: Vec<u8>,
}

impl KeyPair {
    pub(crate) fn new(private_key: Vec<u8>, public_key: Vec<u8>) -> Self {
        Self {
            private_key,
            public_key,
        }
    }

    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &hex::encode(&self.public_key))
            .finish()
    }
}

/// Raw Diffie-Hellman output, wiped on drop. No key derivation is applied.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        SharedSecret(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret(<{} bytes redacted>)", self.0.len())
    }
}

/// A key agreement scheme bound to a parameter set.
pub trait KeyExchangeAlgorithm {
    type Parameters;

    fn generate_keypair<R: RandomSource + ?Sized>(
        &self,
        params: &Self::Parameters,
        rng: &mut R,
    ) -> Result<KeyPair>;

    fn shared_secret(
        &self,
        params: &Self::Parameters,
        own_private_key: &[u8],
        other_public_key: &[u8],
    ) -> SharedSecret;
}
