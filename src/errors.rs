//! Error types for Launchkit

use thiserror::Error;

/// Main error type for Launchkit
#[derive(Error, Debug)]
pub enum LaunchkitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Port error: {0}")]
    Port(String),
}

pub type Result<T> = std::result::Result<T, LaunchkitError>;
