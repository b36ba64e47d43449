use serde::{Deserialize, Serialize};

/// Risk label attached to a scanned payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// HTTPS link
    #[serde(rename = "safe")]
    Safe,
    /// Plain HTTP link
    #[serde(rename = "warning")]
    Warning,
    /// Anything that is not a parseable http(s) link
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Warning => "warning",
            Verdict::Unrecognized => "unrecognized",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "safe" => Some(Verdict::Safe),
            "warning" => Some(Verdict::Warning),
            "unrecognized" => Some(Verdict::Unrecognized),
            _ => None,
        }
    }

    /// Hosts must ask the user before acting on anything that is not `Safe`.
    pub fn requires_confirmation(&self) -> bool {
        !matches!(self, Verdict::Safe)
    }
}

/// The verdicts a parsed link can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkVerdict {
    Safe,
    Warning,
}

impl From<LinkVerdict> for Verdict {
    fn from(verdict: LinkVerdict) -> Self {
        match verdict {
            LinkVerdict::Safe => Verdict::Safe,
            LinkVerdict::Warning => Verdict::Warning,
        }
    }
}
