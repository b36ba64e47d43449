use std::io;

use anyhow::Context;
use qrguard::host::{self, USAGE};
use qrguard::Config;

// Terminal host for the classifier: each argument (or each stdin line when no
// arguments are given) is treated as one decoded QR payload.
// Usage: cargo run --bin qr_scan -- --text "https://example.com" "hello"
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("invalid QRGUARD_* configuration")?;
    let invocation = host::parse_args(std::env::args().skip(1), config)
        .with_context(|| USAGE.to_string())?;

    if invocation.help {
        println!("{}", USAGE);
        return Ok(());
    }

    log::debug!(
        "qr_scan starting: locale={} output={}",
        invocation.config.locale.as_str(),
        invocation.config.output.as_str()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    host::run(&invocation, io::stdin().lock(), &mut out).context("qr_scan failed")?;

    Ok(())
}
