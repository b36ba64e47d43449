//! Environment variable management
//!
//! Loads `.env` files and reads `QRGUARD_*` variables.

use std::env;
use std::path::Path;

use crate::error::ConfigError;

/// Load environment variables from a `.env` file in the working directory
///
/// Does not fail if the file doesn't exist (optional configuration).
pub fn load_env() {
    if let Ok(path) = dotenv::dotenv() {
        log::debug!("loaded environment from {}", path.display());
    }
}

/// Load environment variables from an explicit file
///
/// # Errors
/// Returns `ConfigError::EnvFile` if the file is missing or malformed
pub fn load_env_file(path: &Path) -> Result<(), ConfigError> {
    dotenv::from_path(path).map_err(|e| ConfigError::EnvFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::debug!("loaded environment from {}", path.display());
    Ok(())
}

/// Read a variable, treating unset, blank and non-unicode values alike
pub fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_env_doesnt_fail_on_missing_file() {
        // Should not panic even if .env doesn't exist
        load_env();
    }

    #[test]
    fn test_load_env_file_missing_is_error() {
        let result = load_env_file(Path::new("/nonexistent/qrguard/.env"));
        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    #[serial_test::serial]
    fn test_load_env_file_sets_variables() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "QRGUARD_TEST_ENV_FILE=loaded").unwrap();

        env::remove_var("QRGUARD_TEST_ENV_FILE");
        load_env_file(file.path()).unwrap();
        assert_eq!(var("QRGUARD_TEST_ENV_FILE").as_deref(), Some("loaded"));
        env::remove_var("QRGUARD_TEST_ENV_FILE");
    }

    #[test]
    #[serial_test::serial]
    fn test_var_ignores_blank_values() {
        env::set_var("QRGUARD_TEST_BLANK", "   ");
        assert_eq!(var("QRGUARD_TEST_BLANK"), None);
        env::set_var("QRGUARD_TEST_BLANK", " es ");
        assert_eq!(var("QRGUARD_TEST_BLANK").as_deref(), Some("es"));
        env::remove_var("QRGUARD_TEST_BLANK");
    }
}
