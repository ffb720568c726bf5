//! XSalsa20-Poly1305 authenticated encryption of short strings.
//!
//! Every call to `encrypt` draws a fresh random 24-byte nonce, seals the
//! message and prepends the nonce before base64url-encoding the lot. With a
//! 192-bit random nonce the chance of a repeat is negligible at any
//! realistic call volume. The sealed box layout is the NaCl `secretbox` one
//! (16-byte Poly1305 tag followed by the ciphertext), so tokens interoperate
//! with other secretbox implementations.

use std::fmt;

use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;

use super::entropy::{EntropySource, OsEntropy};
use super::keys::{normalize, SecretKey};
use super::token::{self, DecodedToken, NONCE_LEN};
use crate::errors::{Result, SymCryptoError};

/// Encrypts and decrypts URL-safe tokens with a single secret key.
///
/// Only constructible through [`Crypter::new`] or [`Crypter::with_entropy`],
/// both of which validate the secret. The key never changes after
/// construction, so one instance can serve any number of threads.
#[derive(Clone)]
pub struct Crypter<E = OsEntropy> {
    key: SecretKey,
    entropy: E,
}

impl Crypter {
    /// Create a `Crypter` drawing nonces from the operating-system RNG.
    ///
    /// The secret must be at least 32 bytes long. If it is longer, the
    /// middle 32 bytes are used as the key (see [`normalize`]). To turn a
    /// passphrase into a secret, run it through a password-hashing function
    /// such as argon2 or scrypt first.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self> {
        Self::with_entropy(secret, OsEntropy)
    }
}

impl<E: EntropySource> Crypter<E> {
    /// Create a `Crypter` drawing nonces from `entropy`.
    pub fn with_entropy(secret: impl AsRef<[u8]>, entropy: E) -> Result<Self> {
        let key = normalize(secret.as_ref())?;
        Ok(Self { key, entropy })
    }

    /// Encrypt `message` and return a URL-safe token.
    pub fn encrypt(&self, message: &str) -> Result<String> {
        self.encrypt_bytes(message.as_bytes())
    }

    /// Encrypt arbitrary bytes and return a URL-safe token.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let mut nonce = [0u8; NONCE_LEN];
        self.entropy.fill(&mut nonce).map_err(|e| {
            tracing::error!(error = %e, "entropy source failed, refusing to encrypt");
            SymCryptoError::RandomnessUnavailable(e)
        })?;

        let sealed = self
            .cipher()
            .encrypt(GenericArray::from_slice(&nonce), plaintext)
            // Only reachable for plaintexts beyond the cipher's length limit.
            .map_err(|e| SymCryptoError::EncryptionFailed(e.to_string()))?;

        Ok(token::encode(&nonce, &sealed))
    }

    /// Decrypt a token produced by [`Crypter::encrypt`].
    pub fn decrypt(&self, token: &str) -> Result<String> {
        let plaintext = self.decrypt_bytes(token)?;
        String::from_utf8(plaintext).map_err(|_| {
            tracing::debug!(token_len = token.len(), "rejected token: plaintext is not UTF-8");
            SymCryptoError::InvalidUtf8 {
                token: token.to_string(),
            }
        })
    }

    /// Decrypt a token and return the raw plaintext bytes.
    pub fn decrypt_bytes(&self, token: &str) -> Result<Vec<u8>> {
        let decoded = DecodedToken::parse(token)?;

        self.cipher()
            .decrypt(GenericArray::from_slice(decoded.nonce()), decoded.sealed())
            .map_err(|_| {
                tracing::debug!(token_len = token.len(), "rejected token: authentication failed");
                SymCryptoError::AuthenticationFailed {
                    token: token.to_string(),
                }
            })
    }

    fn cipher(&self) -> XSalsa20Poly1305 {
        XSalsa20Poly1305::new(self.key.as_bytes().into())
    }
}

impl<E> fmt::Debug for Crypter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crypter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
