//! QR payload classification
//!
//! Lexical risk assessment of scanned QR text. Nothing here touches the
//! network: links are parsed, never fetched or resolved.

pub mod constants;
pub mod messages;
pub mod payload_classifier;

pub use messages::Explanation;
pub use payload_classifier::{classify, PayloadClassifier};
