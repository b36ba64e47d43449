// qrguard - lexical risk classifier for scanned QR payloads
// Module re-exports

pub mod classifier;
pub mod config;
pub mod error;
pub mod host;
pub mod models;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use classifier::{classify, Explanation, PayloadClassifier};
pub use config::{Config, OutputFormat};
pub use error::{ConfigError, Error, Result, ScanResultError, SessionError};
pub use models::{LinkVerdict, Locale, ScanResult, Verdict};
pub use session::{ScanEvent, ScanSession, SessionState};
