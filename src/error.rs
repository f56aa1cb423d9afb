//! Error types for loading rosters and configuration
//!
//! Arrangement itself never fails; these cover the I/O and decoding around it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config TOML: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown default formation '{formation}'")]
    UnknownDefaultFormation { formation: String },
}
