//! Payload classifier
//!
//! Turns the decoded text of a QR code into a [`ScanResult`]:
//! - empty payloads and non-link text are `unrecognized`
//! - `https` links are `safe` (encrypted transport, domain still unverified)
//! - `http` links are `warning`
//!
//! Classification is purely lexical. The URL is parsed with the WHATWG rules
//! but never fetched or resolved.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::constants::{LINK_PREFIX_PATTERN, PLAIN_SCHEME, SECURE_SCHEME};
use super::messages::Explanation;
use crate::models::{LinkVerdict, Locale, ScanResult};

static LINK_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(LINK_PREFIX_PATTERN).expect("link prefix pattern is valid"));

/// Stateless classifier bound to an explanation locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayloadClassifier {
    locale: Locale,
}

impl PayloadClassifier {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Classifies one scanned payload
    ///
    /// Never fails: every input, including `None`, yields a well-formed result.
    /// Calling it twice with the same input gives equal results.
    pub fn classify(&self, raw: Option<&str>) -> ScanResult {
        let owned_raw = raw.map(str::to_owned);

        let payload = match raw {
            Some(payload) if !payload.is_empty() => payload,
            _ => {
                log::debug!("qr payload empty -> unrecognized");
                return self.unrecognized(owned_raw, Explanation::NoContent);
            }
        };

        let trimmed = trim_payload(payload);
        log::trace!("classifying qr payload {:?}", trimmed);

        if !LINK_PREFIX.is_match(trimmed) {
            log::debug!("qr payload is not an http(s) link -> unrecognized");
            return self.unrecognized(owned_raw, Explanation::NotALink);
        }

        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("qr link rejected by url parser ({}) -> unrecognized", e);
                return self.unrecognized(owned_raw, Explanation::InvalidLink);
            }
        };

        let Some(host) = url.host_str() else {
            log::debug!("qr link has no host -> unrecognized");
            return self.unrecognized(owned_raw, Explanation::InvalidLink);
        };
        let domain = host.to_lowercase();

        // `Url` normalizes the scheme to lowercase.
        let (verdict, explanation) = match url.scheme() {
            SECURE_SCHEME => (LinkVerdict::Safe, Explanation::EncryptedLink),
            PLAIN_SCHEME => (LinkVerdict::Warning, Explanation::UnencryptedLink),
            other => {
                // Unreachable while the prefix pattern only admits http(s).
                log::debug!("qr link scheme {:?} not classified -> unrecognized", other);
                return self.unrecognized(owned_raw, Explanation::NotALink);
            }
        };

        log::debug!("qr link classified: verdict={:?} domain={}", verdict, domain);
        ScanResult::link(owned_raw, verdict, domain, explanation.text(self.locale))
    }

    fn unrecognized(&self, raw: Option<String>, why: Explanation) -> ScanResult {
        ScanResult::unrecognized(raw, why.text(self.locale))
    }
}

/// Classifies a payload with English explanations
pub fn classify(raw: Option<&str>) -> ScanResult {
    PayloadClassifier::default().classify(raw)
}

/// Strips surrounding whitespace. Some scanners prepend a byte order mark,
/// which is stripped as well.
fn trim_payload(payload: &str) -> &str {
    payload.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
