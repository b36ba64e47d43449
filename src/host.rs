//! Terminal scan host
//!
//! Stands in for the camera's scanner event stream: every payload goes through
//! a `ScanSession` (open, scan, report, close) and is printed as one JSON line
//! or a text summary.

use std::io::{BufRead, Write};

use crate::classifier::messages;
use crate::config::{Config, OutputFormat};
use crate::error::{ConfigError, Error, Result};
use crate::models::Locale;
use crate::session::ScanSession;

pub const USAGE: &str = "usage: qr_scan [--locale en|es] [--json|--text] [PAYLOAD...]";

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub config: Config,
    /// Empty means "read payloads from stdin"
    pub payloads: Vec<String>,
    pub help: bool,
}

/// Parse arguments (program name already skipped) on top of `config`
///
/// Flags override the environment-derived config. Everything after `--` is a
/// payload, even if it looks like a flag.
pub fn parse_args<I>(args: I, config: Config) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut invocation = Invocation {
        config,
        ..Default::default()
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--locale" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage("--locale needs a value".to_string()))?;
                invocation.config.locale =
                    Locale::from_str(&value).ok_or(ConfigError::InvalidValue {
                        key: "--locale",
                        value,
                    })?;
            }
            "--json" => invocation.config.output = OutputFormat::Json,
            "--text" => invocation.config.output = OutputFormat::Text,
            "-h" | "--help" => invocation.help = true,
            "--" => invocation.payloads.extend(args.by_ref()),
            _ => invocation.payloads.push(arg),
        }
    }

    Ok(invocation)
}

/// Classify one payload through `session` and write it to `out`
pub fn report(
    session: &mut ScanSession,
    payload: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    session.open();
    let event = session.on_scanned(Some(payload))?;

    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string(&event.result)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{}\n", messages::summary(&event.result, session.locale()))?;
        }
    }

    session.close();
    Ok(())
}

/// Report every payload of `invocation`, or every line of `input` when none
/// were given. Returns how many payloads were reported.
pub fn run(invocation: &Invocation, input: impl BufRead, out: &mut impl Write) -> Result<usize> {
    let mut session = ScanSession::new(invocation.config.locale);
    let output = invocation.config.output;
    let mut count = 0;

    if invocation.payloads.is_empty() {
        for line in input.lines() {
            report(&mut session, &line?, output, out)?;
            count += 1;
        }
    } else {
        for payload in &invocation.payloads {
            report(&mut session, payload, output, out)?;
            count += 1;
        }
    }

    log::debug!("qr_scan reported {} payload(s)", count);
    Ok(count)
}
