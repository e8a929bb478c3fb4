//! Error types for parsing store input

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bootstrap state: {0}")]
    InvalidBootstrap(#[source] serde_json::Error),

    #[error("invalid action: {0}")]
    InvalidAction(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
