use thiserror::Error;

/// Errors raised while building an encoder configuration.
///
/// Encoding itself never fails: any string is accepted and unknown
/// characters are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("key length {requested} exceeds the maximum of {max}")]
    KeyLengthOutOfRange { requested: i32, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
