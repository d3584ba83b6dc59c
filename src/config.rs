use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ConfigError, Result};

/// Default maximum length of an encoded key.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 8;

/// Largest key length an encoder will produce.
pub const MAX_KEY_LENGTH: usize = 32;

/// Encoder options. Copied into every encode call, so changing them only
/// affects later calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Encode non-initial vowels as `A` (initial vowels are always encoded).
    pub encode_vowels: bool,
    /// Keep voiced/unvoiced consonant pairs (B/P, D/T, G/K, V/F) apart.
    pub encode_exact: bool,
    /// Both keys are cut to this many characters.
    pub max_key_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            encode_vowels: false,
            encode_exact: false,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encode_vowels(mut self, on: bool) -> Self {
        self.encode_vowels = on;
        self
    }

    pub fn with_encode_exact(mut self, on: bool) -> Self {
        self.encode_exact = on;
        self
    }

    /// Strict form of [`Config::set_key_length`]: lengths below 1 are raised
    /// to 1, lengths above [`MAX_KEY_LENGTH`] are rejected.
    pub fn with_max_key_length(mut self, requested: i32) -> Result<Self> {
        if requested > MAX_KEY_LENGTH as i32 {
            return Err(ConfigError::KeyLengthOutOfRange {
                requested,
                max: MAX_KEY_LENGTH,
            });
        }
        self.max_key_length = requested.max(1) as usize;
        Ok(self)
    }

    /// Sets the key length, clamping into `1..=32`. Returns `false` only when
    /// the request was above the maximum.
    pub fn set_key_length(&mut self, requested: i32) -> bool {
        match self.with_max_key_length(requested) {
            Ok(cfg) => {
                if requested < 1 {
                    debug!(requested, "key length raised to 1");
                }
                *self = cfg;
                true
            }
            Err(err) => {
                debug!(%err, "key length clamped to maximum");
                self.max_key_length = MAX_KEY_LENGTH;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert!(!cfg.encode_vowels);
        assert!(!cfg.encode_exact);
        assert_eq!(cfg.max_key_length, 8);
    }

    #[test]
    fn key_length_clamps() {
        let mut cfg = Config::default();
        assert!(cfg.set_key_length(0));
        assert_eq!(cfg.max_key_length, 1);
        assert!(cfg.set_key_length(-5));
        assert_eq!(cfg.max_key_length, 1);
        assert!(!cfg.set_key_length(100));
        assert_eq!(cfg.max_key_length, 32);
        assert!(cfg.set_key_length(32));
        assert_eq!(cfg.max_key_length, 32);
        assert!(cfg.set_key_length(12));
        assert_eq!(cfg.max_key_length, 12);
    }

    #[test]
    fn strict_builder_rejects_oversized() {
        let err = Config::new().with_max_key_length(33).unwrap_err();
        assert_eq!(
            err,
            ConfigError::KeyLengthOutOfRange {
                requested: 33,
                max: 32
            }
        );
        assert_eq!(err.to_string(), "key length 33 exceeds the maximum of 32");
    }

    #[test]
    fn deserializes_partial_json() {
        let cfg: Config = serde_json::from_str(r#"{"encode_vowels":true}"#).unwrap();
        assert!(cfg.encode_vowels);
        assert_eq!(cfg.max_key_length, DEFAULT_MAX_KEY_LENGTH);
    }
}
