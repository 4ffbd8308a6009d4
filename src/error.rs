use crate::domain::types::DomainError;
use thiserror::Error;

/// Synthlog error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid duration distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl Error {
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
