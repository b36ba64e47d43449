// qrguard data models

pub mod locale;
pub mod scan_result;
pub mod verdict;

// Re-exports for convenience
pub use locale::Locale;
pub use scan_result::ScanResult;
pub use verdict::{LinkVerdict, Verdict};
