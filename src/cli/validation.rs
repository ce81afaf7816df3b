//! Custom value parsers for CLI arguments

use std::fs;
use std::path::PathBuf;

/// Largest accepted `--timeout`, one day
const MAX_TIMEOUT_SECONDS: u64 = 86_400;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{path_str}'"));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{path_str}'"));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{path_str}': {e}")),
    }
}

/// Validate `--timeout` is a whole number of seconds in `1..=86400`
pub fn validate_timeout(timeout_str: &str) -> Result<u64, String> {
    let seconds: u64 = timeout_str.parse().map_err(|_| {
        format!("Timeout must be a whole number of seconds, got: '{timeout_str}'")
    })?;

    if seconds == 0 {
        return Err("Timeout must be greater than 0 seconds".to_string());
    }

    if seconds > MAX_TIMEOUT_SECONDS {
        return Err(format!(
            "Timeout cannot exceed {MAX_TIMEOUT_SECONDS} seconds"
        ));
    }

    Ok(seconds)
}

/// Validate a logical key given on the command line
///
/// Redis accepts any bytes, but an empty or control-character key from a shell
/// is almost always a quoting mistake.
pub fn validate_key(key: &str) -> Result<String, String> {
    if key.is_empty() {
        return Err("Key cannot be empty".to_string());
    }

    if key.chars().any(char::is_control) {
        return Err(format!("Key cannot contain control characters: {key:?}"));
    }

    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_timeout_validation_valid() {
        for timeout in ["1", "30", "86400"] {
            assert!(validate_timeout(timeout).is_ok(), "{timeout} should be valid");
        }
    }

    #[test]
    fn test_timeout_validation_invalid() {
        for timeout in ["0", "86401", "-1", "1.5", "abc", ""] {
            assert!(validate_timeout(timeout).is_err(), "'{timeout}' should be invalid");
        }
    }

    #[test]
    fn test_key_validation() {
        assert_eq!(validate_key("user:42").unwrap(), "user:42");
        assert_eq!(validate_key("with space").unwrap(), "with space");
        assert!(validate_key("").is_err());
        assert!(validate_key("line\nbreak").is_err());
    }

    #[test]
    fn test_config_file_path_validation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("ocean.toml");
        std::fs::write(&file, "[cache]\n").unwrap();

        assert_eq!(
            validate_config_file_path(file.to_str().unwrap()).unwrap(),
            file
        );
        assert!(validate_config_file_path(temp_dir.path().to_str().unwrap()).is_err());
        assert!(
            validate_config_file_path(temp_dir.path().join("missing.toml").to_str().unwrap())
                .is_err()
        );
    }
}
