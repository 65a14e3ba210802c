//! Configuration loading errors.

use super::error_code::{self, KasirErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidOverride { key: String, value: String },

    #[error("invalid setting {key} = '{value}': {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl KasirErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO_ERROR,
            Self::TomlParse(_) | Self::TomlSerialize(_) | Self::InvalidValue { .. } => {
                error_code::CONFIG_PARSE_ERROR
            }
            Self::InvalidOverride { .. } => error_code::CONFIG_OVERRIDE_ERROR,
        }
    }
}
