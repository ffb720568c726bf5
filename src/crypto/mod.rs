//! Cryptographic core of symcrypto.
//!
//! This module provides:
//! - Secret-to-key normalization (`keys`)
//! - Injectable nonce randomness (`entropy`)
//! - The URL-safe token wire format (`token`)
//! - XSalsa20-Poly1305 encryption and decryption (`crypter`)

pub mod crypter;
pub mod entropy;
pub mod keys;
pub mod token;

// Re-export the most commonly used items so callers can write:
//   use symcrypto::crypto::{Crypter, normalize, ...};
pub use crypter::Crypter;
pub use entropy::{EntropyError, EntropySource, OsEntropy};
pub use keys::{normalize, SecretKey, SECRET_KEY_LEN};
pub use token::NONCE_LEN;
