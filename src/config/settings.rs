use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::Crypter;
use crate::errors::{Result, SymCryptoError};

/// Crypter settings, deserializable from the host application's TOML.
///
/// ```toml
/// secret = "a-random-string-of-at-least-32-bytes"
/// ```
///
/// The library never reads files or environment variables itself; the host
/// decides where the TOML text comes from, or embeds `Settings` as a table
/// in its own config struct.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Shared secret, at least 32 bytes. Longer secrets are cut down to
    /// their middle 32 bytes.
    pub secret: String,
}

impl Settings {
    /// Parse settings from a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| SymCryptoError::ConfigError(format!("failed to parse settings: {e}")))
    }

    /// Build a `Crypter` from these settings.
    pub fn crypter(&self) -> Result<Crypter> {
        Crypter::new(&self.secret)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_secret_from_toml() {
        let settings =
            Settings::from_toml_str("secret = \"secret_key_with_string_length_32\"\n").unwrap();
        assert_eq!(settings.secret, "secret_key_with_string_length_32");
    }

    #[test]
    fn built_crypter_roundtrips() {
        let settings =
            Settings::from_toml_str("secret = \"secret_key_with_string_length_32\"\n").unwrap();
        let crypter = settings.crypter().unwrap();
        let token = crypter.encrypt("from config").unwrap();
        assert_eq!(crypter.decrypt(&token).unwrap(), "from config");
    }

    #[test]
    fn matches_crypter_built_from_same_secret() {
        let settings =
            Settings::from_toml_str("secret = \"secret_key_with_string_length_32\"\n").unwrap();
        let token = Crypter::new("secret_key_with_string_length_32")
            .unwrap()
            .encrypt("shared")
            .unwrap();
        assert_eq!(settings.crypter().unwrap().decrypt(&token).unwrap(), "shared");
    }

    #[test]
    fn short_secret_surfaces_invalid_secret() {
        let settings = Settings::from_toml_str("secret = \"too short\"\n").unwrap();
        assert!(matches!(
            settings.crypter(),
            Err(SymCryptoError::InvalidSecret(_))
        ));
    }

    #[test]
    fn missing_secret_is_a_config_error() {
        let result = Settings::from_toml_str("");
        assert!(matches!(result, Err(SymCryptoError::ConfigError(_))));
    }

    #[test]
    fn unknown_field_is_a_config_error() {
        let result = Settings::from_toml_str(
            "secret = \"secret_key_with_string_length_32\"\nsecrett = \"typo\"\n",
        );
        assert!(matches!(result, Err(SymCryptoError::ConfigError(_))));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let result = Settings::from_toml_str("not valid {{toml");
        assert!(matches!(result, Err(SymCryptoError::ConfigError(_))));
    }

    #[test]
    fn debug_output_hides_secret() {
        let settings =
            Settings::from_toml_str("secret = \"secret_key_with_string_length_32\"\n").unwrap();
        let shown = format!("{settings:?}");
        assert!(!shown.contains("secret_key_with"));
    }
}
