//! User-facing texts for scan results
//!
//! English is the default; Spanish is also available.

use crate::models::{Locale, ScanResult, Verdict};

/// Why a payload received its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Explanation {
    /// Scanner delivered nothing
    NoContent,
    /// Text, or data that does not start like an http(s) link
    NotALink,
    /// Looked like a link but failed strict URL parsing
    InvalidLink,
    /// HTTPS link
    EncryptedLink,
    /// HTTP link
    UnencryptedLink,
}

impl Explanation {
    pub fn text(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                Explanation::NoContent => "No content was found in the QR code.",
                Explanation::NotALink => {
                    "The QR code contains text or another kind of data, not a web link."
                }
                Explanation::InvalidLink => {
                    "The link could not be analyzed. Its format may be invalid."
                }
                Explanation::EncryptedLink => {
                    "The link uses HTTPS (encrypted connection). Even so, make sure the domain is trustworthy before opening it."
                }
                Explanation::UnencryptedLink => {
                    "The link does not use HTTPS. The connection may not be secure; check the domain carefully before continuing."
                }
            },
            Locale::Es => match self {
                Explanation::NoContent => "No se encontró contenido en el código QR.",
                Explanation::NotALink => {
                    "El código QR contiene texto u otro tipo de dato, no un enlace web."
                }
                Explanation::InvalidLink => {
                    "No se pudo analizar el enlace. Es posible que el formato no sea válido."
                }
                Explanation::EncryptedLink => {
                    "El enlace usa HTTPS (conexión cifrada). Aun así, verifica que el dominio sea de confianza antes de abrirlo."
                }
                Explanation::UnencryptedLink => {
                    "El enlace no usa HTTPS. La conexión puede no ser segura; revisa bien el dominio antes de continuar."
                }
            },
        }
    }
}

pub fn verdict_title(verdict: Verdict, locale: Locale) -> &'static str {
    match (verdict, locale) {
        (Verdict::Safe, Locale::En) => "Safe link",
        (Verdict::Warning, Locale::En) => "Possibly suspicious link",
        (Verdict::Unrecognized, Locale::En) => "Content not recognized as a link",
        (Verdict::Safe, Locale::Es) => "Enlace seguro",
        (Verdict::Warning, Locale::Es) => "Posible enlace sospechoso",
        (Verdict::Unrecognized, Locale::Es) => "Contenido no reconocido como enlace",
    }
}

pub fn domain_label(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Domain:",
        Locale::Es => "Dominio:",
    }
}

/// Reminder rendered under every result: links are never opened automatically
pub fn review_hint(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "The link will not be opened automatically. Review this assessment before deciding what to do."
        }
        Locale::Es => {
            "El enlace no se abrirá automáticamente. Revisa esta evaluación antes de decidir qué hacer."
        }
    }
}

/// Multi-line, human-readable rendering of a result
///
/// Same layout as the result card of the scan screen: heading, explanation,
/// domain (links only) and the reminder that nothing is opened.
pub fn summary(result: &ScanResult, locale: Locale) -> String {
    let verdict = result.verdict();
    let mut out = format!(
        "[{}] {}\n  {}\n",
        verdict.as_str().to_uppercase(),
        verdict_title(verdict, locale),
        result.explanation()
    );

    if let Some(domain) = result.domain() {
        out.push_str(&format!("  {} {}\n", domain_label(locale), domain));
    }

    out.push_str("  ");
    out.push_str(review_hint(locale));
    out
}
