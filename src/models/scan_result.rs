use serde::{Deserialize, Serialize};

use crate::error::ScanResultError;
use crate::models::{LinkVerdict, Verdict};

/// Classification of a single scanned QR payload
///
/// Built fresh for every scan and never mutated afterwards. `domain` is set
/// exactly when `is_link` is true, and only links carry `safe`/`warning`.
/// Both constructors and deserialization uphold this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "ScanResultRecord")]
pub struct ScanResult {
    raw: Option<String>,
    is_link: bool,
    verdict: Verdict,
    domain: Option<String>,
    explanation: String,
}

/// Unchecked wire form, validated into a `ScanResult`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanResultRecord {
    raw: Option<String>,
    is_link: bool,
    verdict: Verdict,
    domain: Option<String>,
    explanation: String,
}

impl TryFrom<ScanResultRecord> for ScanResult {
    type Error = ScanResultError;

    fn try_from(record: ScanResultRecord) -> Result<Self, Self::Error> {
        if record.is_link != record.domain.is_some() {
            return Err(ScanResultError::DomainMismatch {
                is_link: record.is_link,
            });
        }

        match (record.is_link, record.verdict) {
            (true, Verdict::Unrecognized) => return Err(ScanResultError::UnrecognizedLink),
            (false, Verdict::Safe | Verdict::Warning) => {
                return Err(ScanResultError::ClassifiedNonLink(record.verdict.as_str()))
            }
            _ => {}
        }

        Ok(Self {
            raw: record.raw,
            is_link: record.is_link,
            verdict: record.verdict,
            domain: record.domain,
            explanation: record.explanation,
        })
    }
}

impl ScanResult {
    /// A payload that is missing, not a link, or a link we could not parse
    pub fn unrecognized(raw: Option<String>, explanation: impl Into<String>) -> Self {
        Self {
            raw,
            is_link: false,
            verdict: Verdict::Unrecognized,
            domain: None,
            explanation: explanation.into(),
        }
    }

    /// A parsed http(s) link
    pub fn link(
        raw: Option<String>,
        verdict: LinkVerdict,
        domain: String,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            raw,
            is_link: true,
            verdict: verdict.into(),
            domain: Some(domain),
            explanation: explanation.into(),
        }
    }

    /// Payload exactly as the scanner delivered it
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_link(&self) -> bool {
        self.is_link
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Lowercased hostname of the link
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn requires_confirmation(&self) -> bool {
        self.verdict.requires_confirmation()
    }
}
