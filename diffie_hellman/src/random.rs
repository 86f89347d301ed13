use crate::error::BoxedSourceError;
use rand::{CryptoRng, RngCore};

/// Production entropy source backed by the operating system.
pub type OsRandom = rand::rngs::OsRng;

/// Source of cryptographically secure random bytes used for private keys.
///
/// Every `RngCore + CryptoRng` generator is a `RandomSource`, so callers can
/// pass `OsRng` in production and a seeded `StdRng` in tests. Implement the
/// trait directly to script the bytes or to simulate entropy failure.
pub trait RandomSource {
    /// Fills `dest` entirely or reports why it could not.
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), BoxedSourceError>;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), BoxedSourceError> {
        self.try_fill_bytes(dest).map_err(|e| Box::new(e) as BoxedSourceError)
    }
}
