//! Configuration loaded from the process environment and `.env` files

use std::env;
use std::io::Write;

use qrguard::config::{LOCALE_VAR, OUTPUT_VAR};
use qrguard::utils::load_env_file;
use qrguard::{Config, ConfigError, Locale, OutputFormat};
use serial_test::serial;
use tempfile::NamedTempFile;

fn clear_vars() {
    env::remove_var(LOCALE_VAR);
    env::remove_var(OUTPUT_VAR);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_vars();
    let config = Config::from_env().unwrap();
    assert_eq!(config.locale, Locale::En);
    assert_eq!(config.output, OutputFormat::Json);
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_vars();
    env::set_var(LOCALE_VAR, "es-ES");
    env::set_var(OUTPUT_VAR, "text");

    let config = Config::from_env().unwrap();
    assert_eq!(config.locale, Locale::Es);
    assert_eq!(config.output, OutputFormat::Text);
    clear_vars();
}

#[test]
#[serial]
fn test_from_env_rejects_bad_locale() {
    clear_vars();
    env::set_var(LOCALE_VAR, "fr");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == LOCALE_VAR));
    clear_vars();
}

#[test]
#[serial]
fn test_env_file_feeds_config() {
    clear_vars();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}=es", LOCALE_VAR).unwrap();
    writeln!(file, "{}=text", OUTPUT_VAR).unwrap();

    load_env_file(file.path()).unwrap();
    let config = Config::from_env().unwrap();
    assert_eq!(config.locale, Locale::Es);
    assert_eq!(config.output, OutputFormat::Text);
    clear_vars();
}
