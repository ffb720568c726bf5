//! Secret normalization.
//!
//! The AEAD needs exactly 32 key bytes. Callers may hand over a longer
//! secret, in which case the middle 32 bytes are used:
//!
//! ```text
//! start = (len - 32 + 1) / 2
//! key   = secret[start .. start + 32]
//! ```
//!
//! Taking the middle rather than a prefix means that two secrets sharing a
//! long common prefix usually end up with different keys. This is NOT a key
//! derivation function: it spreads no entropy and adds none. Generate the
//! secret randomly, or run a passphrase through a password-hashing function
//! (argon2, scrypt, bcrypt) before handing it over.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{LengthError, Result};

/// Length of the key, and the minimum length of a secret, in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// A normalized 32-byte key. Zeroed when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_LEN],
}

impl SecretKey {
    /// Access the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Normalize `secret` into a 32-byte key using the midpoint rule.
///
/// Fails with `InvalidSecret` when `secret` is shorter than 32 bytes.
pub fn normalize(secret: &[u8]) -> Result<SecretKey> {
    let mid = mid_bytes(secret, SECRET_KEY_LEN)?;

    let mut bytes = [0u8; SECRET_KEY_LEN];
    bytes.copy_from_slice(mid);
    Ok(SecretKey { bytes })
}

/// Return the middle `size` bytes of `bytes`.
///
/// When the surplus is odd the window leans one byte towards the end.
pub(crate) fn mid_bytes(bytes: &[u8], size: usize) -> std::result::Result<&[u8], LengthError> {
    if size == 0 {
        return Err(LengthError {
            name: "size",
            expected: 1,
            got: size,
        });
    }

    if bytes.len() < size {
        return Err(LengthError {
            name: "bytes length",
            expected: size,
            got: bytes.len(),
        });
    }

    let start = (bytes.len() - size + 1) / 2;
    Ok(&bytes[start..start + size])
}
