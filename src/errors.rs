use thiserror::Error;

use crate::crypto::entropy::EntropyError;

/// A length requirement that an input did not meet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {name} to be at least {expected}, got {got}")]
pub struct LengthError {
    /// What was measured (e.g. "bytes length").
    pub name: &'static str,
    /// The minimum accepted value.
    pub expected: usize,
    /// The value actually supplied.
    pub got: usize,
}

/// All errors that can occur in symcrypto.
///
/// Decrypt-time variants echo the token the caller passed in. None of them
/// carry key bytes or recovered plaintext.
#[derive(Debug, Error)]
pub enum SymCryptoError {
    // --- Construction errors ---
    #[error("invalid secret key: {0}")]
    InvalidSecret(#[from] LengthError),

    // --- Encrypt errors ---
    #[error("failed to generate nonce: {0}")]
    RandomnessUnavailable(#[from] EntropyError),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Decrypt errors ---
    #[error("failed to decode {token:?} using base64: {source}")]
    DecodeError {
        token: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("invalid encrypted message, {token:?} is too short")]
    MalformedToken { token: String },

    #[error("failed to decrypt {token:?}")]
    AuthenticationFailed { token: String },

    #[error("decrypted message for {token:?} is not valid UTF-8")]
    InvalidUtf8 { token: String },

    // --- Config errors ---
    #[error("config error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for symcrypto results.
pub type Result<T> = std::result::Result<T, SymCryptoError>;
