//! Common test helpers for integration tests
//!
//! Assertions shared by the classifier and session tests. Each checks the
//! `domain`/`is_link` pairing in addition to the field it is named after.

#![allow(dead_code)]

use qrguard::{ScanResult, Verdict};

/// Payloads that must never be treated as links
pub const NON_LINK_PAYLOADS: &[&str] = &[
    "hello world",
    "ftp://files.example.com/archive.zip",
    "mailto:someone@example.com",
    "WIFI:S:HomeNet;T:WPA;P:secret;;",
    "BEGIN:VCARD\nFN:Jane Doe\nEND:VCARD",
    "www.example.com",
    "https://",
    "https:// example.com",
    "http:/example.com",
    "   ",
];

/// Assert the result is an unrecognized non-link
pub fn assert_unrecognized(result: &ScanResult) {
    assert_eq!(result.verdict(), Verdict::Unrecognized, "{:?}", result);
    assert!(!result.is_link(), "{:?}", result);
    assert_eq!(result.domain(), None, "{:?}", result);
    assert!(!result.explanation().is_empty());
}

/// Assert the result is a link with the given verdict and domain
pub fn assert_link(result: &ScanResult, verdict: Verdict, domain: &str) {
    assert!(result.is_link(), "{:?}", result);
    assert_eq!(result.verdict(), verdict, "{:?}", result);
    assert_eq!(result.domain(), Some(domain), "{:?}", result);
    assert!(!result.explanation().is_empty());
}
