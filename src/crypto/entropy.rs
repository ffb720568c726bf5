//! Sources of nonce randomness.
//!
//! `Crypter` never reaches for a global RNG directly. It asks an
//! `EntropySource` to fill each nonce, which keeps production on the
//! operating-system RNG while letting tests plug in a fixed or failing
//! source.

use rand::rngs::OsRng;
use rand::TryRngCore;
use thiserror::Error;

/// The entropy source could not produce the requested bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EntropyError {
    message: String,
}

impl EntropyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A cryptographically secure random byte generator.
///
/// Implementations must either fill `dest` completely or return an error.
/// They must never fall back to a weaker generator.
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Entropy straight from the operating system (`getrandom` under the hood).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::new(format!("OS random source failed: {e}")))
    }
}
