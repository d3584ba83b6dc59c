//! Metaphone 3 phonetic encoding.
//!
//! Turns a word or name into a short key describing how it sounds, so that
//! differently spelled words that are pronounced alike ("Smith", "Smythe")
//! get the same key. Each word gets a primary key and, when a second
//! pronunciation is common, a secondary key.
//!
//! ```
//! use metaphone3::{encode, Config};
//!
//! let config = Config::default();
//! let keys = encode("Smith", &config);
//! assert_eq!(keys.primary, "SM0");
//! assert_eq!(keys.secondary, "XMT");
//! assert_eq!(keys, encode("Smythe", &config));
//! ```

pub mod config;
mod context;
pub mod engine;
pub mod errors;
mod key;
mod rules;
mod word;

pub use config::{Config, DEFAULT_MAX_KEY_LENGTH, MAX_KEY_LENGTH};
pub use engine::{encode, Metaphone3};
pub use errors::{ConfigError, Result};
pub use key::Keys;
