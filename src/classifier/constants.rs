//! Classifier constants

/// Coarse prefix check applied to the trimmed payload before strict parsing.
///
/// Only `http` and `https` are admitted. Other schemes (`ftp:`, `mailto:`,
/// `WIFI:` ...) never reach the URL parser and stay unrecognized.
pub const LINK_PREFIX_PATTERN: &str = r"(?i)^https?://\S+";

/// Scheme treated as an encrypted transport
pub const SECURE_SCHEME: &str = "https";

/// Scheme treated as unencrypted
pub const PLAIN_SCHEME: &str = "http";
