use thiserror::Error;

/// Configuration errors raised while reading `.env` files and `QRGUARD_*` variables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value we cannot interpret
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    /// An explicitly requested env file could not be loaded
    #[error("Failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

/// Scan session transition errors
///
/// These describe a host calling the session out of order. They never come
/// from classification itself, which always produces a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A scan event arrived while the scanner was closed
    #[error("Scanner is not active: open a scan before submitting payloads")]
    NotScanning,

    /// A scan event arrived while a previous result is still on screen
    #[error("Scan locked: a result is already shown, rescan or close first")]
    Locked,

    /// Rescan was requested without a result on screen
    #[error("No scan result is shown")]
    NotShowingResult,
}

impl SessionError {
    /// Whether the host can simply drop the event and carry on.
    /// Duplicate frames from a camera hit `Locked` constantly and are benign.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, SessionError::Locked)
    }
}

/// A serialized scan result that breaks the link/domain/verdict pairing
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResultError {
    /// `domain` must be present exactly when `isLink` is true
    #[error("domain must be present exactly when isLink is true (isLink = {is_link})")]
    DomainMismatch { is_link: bool },

    /// Links are always `safe` or `warning`
    #[error("a link cannot carry the unrecognized verdict")]
    UnrecognizedLink,

    /// Non-links are always `unrecognized`
    #[error("a non-link cannot carry the {0} verdict")]
    ClassifiedNonLink(&'static str),
}

/// Crate-level error, returned by the scan host
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    /// Bad command line
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
