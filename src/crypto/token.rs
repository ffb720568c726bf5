//! Token wire format.
//!
//! ```text
//! base64url_nopad( [ 24-byte nonce | sealed box (tag + ciphertext) ] )
//! ```
//!
//! The alphabet is the URL-safe one (`-` and `_`) without `=` padding, so a
//! token can sit in a URL path or query segment unescaped.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::errors::{Result, SymCryptoError};

/// Size of the XSalsa20 nonce in bytes.
pub const NONCE_LEN: usize = 24;

/// Pack a nonce and a sealed box into a URL-safe token.
pub(crate) fn encode(nonce: &[u8; NONCE_LEN], sealed: &[u8]) -> String {
    let mut packed = Vec::with_capacity(NONCE_LEN + sealed.len());
    packed.extend_from_slice(nonce);
    packed.extend_from_slice(sealed);
    URL_SAFE_NO_PAD.encode(packed)
}

/// A decoded token that is long enough to hold a nonce and at least one
/// byte of sealed data.
#[derive(Debug)]
pub(crate) struct DecodedToken {
    bytes: Vec<u8>,
}

impl DecodedToken {
    /// Decode `token` and check that something follows the nonce.
    ///
    /// Whether the remainder is long enough for the AEAD tag is left to the
    /// AEAD itself.
    pub(crate) fn parse(token: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|source| {
            tracing::debug!(token_len = token.len(), error = %source, "rejected token: bad base64");
            SymCryptoError::DecodeError {
                token: token.to_string(),
                source,
            }
        })?;

        if bytes.len() <= NONCE_LEN {
            tracing::debug!(decoded_len = bytes.len(), "rejected token: too short");
            return Err(SymCryptoError::MalformedToken {
                token: token.to_string(),
            });
        }

        Ok(Self { bytes })
    }

    pub(crate) fn nonce(&self) -> &[u8] {
        &self.bytes[..NONCE_LEN]
    }

    pub(crate) fn sealed(&self) -> &[u8] {
        &self.bytes[NONCE_LEN..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_token_is_url_safe_and_unpadded() {
        // 0xfb/0xff bytes map onto '+' and '/' in the standard alphabet.
        let nonce = [0xfbu8; NONCE_LEN];
        let token = encode(&nonce, &[0xff, 0xfe, 0xfd, 0xff]);

        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
        assert!(token.contains('-') || token.contains('_'));
    }

    #[test]
    fn parse_splits_nonce_from_sealed_box() {
        let nonce: [u8; NONCE_LEN] = core::array::from_fn(|i| i as u8);
        let sealed = b"tag-and-ciphertext";
        let token = encode(&nonce, sealed);

        let decoded = DecodedToken::parse(&token).unwrap();
        assert_eq!(decoded.nonce(), &nonce[..]);
        assert_eq!(decoded.sealed(), &sealed[..]);
    }

    #[test]
    fn parse_rejects_empty_token() {
        let err = DecodedToken::parse("").unwrap_err();
        assert!(matches!(err, SymCryptoError::MalformedToken { .. }));
        assert_eq!(err.to_string(), r#"invalid encrypted message, "" is too short"#);
    }

    #[test]
    fn parse_rejects_nonce_only_token() {
        let token = URL_SAFE_NO_PAD.encode([9u8; NONCE_LEN]);
        let err = DecodedToken::parse(&token).unwrap_err();
        assert!(matches!(err, SymCryptoError::MalformedToken { .. }));
    }

    #[test]
    fn parse_accepts_one_byte_past_nonce() {
        let token = URL_SAFE_NO_PAD.encode([9u8; NONCE_LEN + 1]);
        let decoded = DecodedToken::parse(&token).unwrap();
        assert_eq!(decoded.sealed(), &[9u8]);
    }

    #[test]
    fn parse_rejects_standard_alphabet_characters() {
        let err = DecodedToken::parse("/").unwrap_err();
        assert!(matches!(err, SymCryptoError::DecodeError { .. }));
        assert!(err
            .to_string()
            .starts_with(r#"failed to decode "/" using base64: "#));
    }

    #[test]
    fn parse_rejects_padding() {
        let padded = format!("{}=", URL_SAFE_NO_PAD.encode([1u8; NONCE_LEN + 2]));
        let err = DecodedToken::parse(&padded).unwrap_err();
        assert!(matches!(err, SymCryptoError::DecodeError { .. }));
    }
}
