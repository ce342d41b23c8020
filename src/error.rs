//! Custom error types for the Frameless crate

use thiserror::Error;

/// Main error type for Frameless operations
#[derive(Error, Debug)]
pub enum FramelessError {
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    #[error("Native style update failed: {0}")]
    NativeStyle(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FramelessError {
    fn from(e: toml::de::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for FramelessError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result type alias for Frameless operations
pub type FramelessResult<T> = Result<T, FramelessError>;
