use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexError {
    #[error("Index {index} out of range for hex array of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Unknown battle side {0}")]
    InvalidSide(u8),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HexError>;
