//! URL-safe authenticated encryption of short strings.
//!
//! A [`Crypter`] is built once from a shared secret and then turns strings
//! into tokens that can be dropped into a URL path or query segment, and
//! back. Tokens are tamper-evident: any modification, or a token from a
//! different secret, is rejected.
//!
//! ```no_run
//! use symcrypto::Crypter;
//!
//! // Load the secret from somewhere safe. To turn a passphrase into a
//! // secret, use a password-hashing function such as argon2 or scrypt.
//! let crypter = Crypter::new("6368616e676520746869732070617373")?;
//!
//! let token = crypter.encrypt("hello world")?;
//! assert_eq!(crypter.decrypt(&token)?, "hello world");
//! # Ok::<(), symcrypto::SymCryptoError>(())
//! ```
//!
//! Under the hood this is NaCl `secretbox` (XSalsa20-Poly1305) with a random
//! 24-byte nonce per message, packed as `nonce || sealed` and encoded with
//! unpadded URL-safe base64.

pub mod config;
pub mod crypto;
pub mod errors;

pub use config::Settings;
pub use crypto::{Crypter, EntropySource, OsEntropy, SECRET_KEY_LEN};
pub use errors::{Result, SymCryptoError};
