use thiserror::Error;

/// Boxed cause reported by a [`RandomSource`](crate::RandomSource).
pub type BoxedSourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DhError {
    /// The secure random source could not supply the private key bytes.
    #[error("secure random source failed to provide {requested} bytes: {source}")]
    RandomSourceFailure {
        requested: usize,
        #[source]
        source: BoxedSourceError,
    },
}

pub type Result<T> = std::result::Result<T, DhError>;
