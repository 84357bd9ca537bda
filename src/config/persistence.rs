//! Options file persistence for linenav
//!
//! This module handles loading and saving the search options file to
//! platform-specific directories with robust error handling and
//! graceful fallback to defaults.

use crate::config::SearchOptions;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "linenav";

/// Options file name
const OPTIONS_FILE_NAME: &str = "options.json";

/// Backup options file name (used during atomic writes)
const OPTIONS_BACKUP_NAME: &str = "options.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the crate.
///
/// Returns the appropriate directory based on the operating system:
/// - **Windows**: `%APPDATA%\linenav\`
/// - **macOS**: `~/Library/Application Support/linenav/`
/// - **Linux**: `~/.config/linenav/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be
/// determined (e.g., if the HOME environment variable is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the options file.
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be
/// determined.
pub fn get_options_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(OPTIONS_FILE_NAME))
}

/// Ensure the configuration directory exists, creating it if necessary.
fn ensure_config_dir() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;

    if !config_dir.exists() {
        debug!("Creating config directory: {}", config_dir.display());
        fs::create_dir_all(&config_dir).map_err(|e| Error::OptionsSave {
            path: config_dir.clone(),
            source: Box::new(e),
        })?;
    }

    Ok(config_dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Options
// ─────────────────────────────────────────────────────────────────────────────

/// Load search options from the default options file location.
///
/// # Behavior
///
/// 1. If the options file exists and is valid JSON, load and sanitize it
/// 2. If the options file doesn't exist, return default options
/// 3. If the options file is corrupted/invalid, log a warning and return
///    defaults
pub fn load_options() -> SearchOptions {
    load_options_internal()
        .unwrap_or_warn_default(SearchOptions::default(), "Failed to load search options")
}

/// Internal implementation of options loading.
fn load_options_internal() -> Result<SearchOptions> {
    let options_path = get_options_file_path()?;

    if !options_path.exists() {
        debug!(
            "Options file not found at {}, using defaults",
            options_path.display()
        );
        return Ok(SearchOptions::default());
    }

    debug!("Loading options from: {}", options_path.display());

    let contents = fs::read_to_string(&options_path).map_err(|e| Error::OptionsLoad {
        path: options_path.clone(),
        source: Box::new(e),
    })?;

    // Handle empty file
    if contents.trim().is_empty() {
        debug!("Options file is empty, using defaults");
        return Ok(SearchOptions::default());
    }

    let options = SearchOptions::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Options file at {} contains invalid JSON: {}",
            options_path.display(),
            e
        );
        Error::OptionsParse {
            message: format!("Failed to parse options file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Search options loaded successfully from {}",
        options_path.display()
    );
    Ok(options)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Options
// ─────────────────────────────────────────────────────────────────────────────

/// Save search options to the default options file location.
///
/// This function performs an atomic write by:
/// 1. Writing to a temporary backup file
/// 2. Replacing the original file with the backup
///
/// # Errors
///
/// - `Error::ConfigDirNotFound`: Config directory cannot be determined
/// - `Error::OptionsSave`: Failed to write the options file
pub fn save_options(options: &SearchOptions) -> Result<()> {
    let config_dir = ensure_config_dir()?;
    let options_path = config_dir.join(OPTIONS_FILE_NAME);
    let backup_path = config_dir.join(OPTIONS_BACKUP_NAME);

    debug!("Saving options to: {}", options_path.display());

    let json = serde_json::to_string_pretty(options).map_err(|e| Error::OptionsSave {
        path: options_path.clone(),
        source: Box::new(e),
    })?;

    // Write to backup file first (atomic write pattern)
    fs::write(&backup_path, &json).map_err(|e| Error::OptionsSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    // Replace original with backup
    fs::rename(&backup_path, &options_path).map_err(|e| Error::OptionsSave {
        path: options_path.clone(),
        source: Box::new(e),
    })?;

    info!(
        "Search options saved successfully to {}",
        options_path.display()
    );
    Ok(())
}

/// Save search options, ignoring errors.
///
/// Useful for "best effort" saves where failure shouldn't interrupt the
/// host (e.g., saving on teardown).
///
/// # Returns
///
/// Returns `true` if the save was successful, `false` otherwise.
pub fn save_options_silent(options: &SearchOptions) -> bool {
    match save_options(options) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save search options: {}", e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Helper to create a test environment with a temporary options directory.
    struct TestEnv {
        _temp_dir: TempDir,
        options_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let config_dir = temp_dir.path().join(APP_NAME);
            let options_file = config_dir.join(OPTIONS_FILE_NAME);
            fs::create_dir_all(&config_dir).expect("Failed to create config dir");
            Self {
                _temp_dir: temp_dir,
                options_file,
            }
        }

        fn write_options(&self, content: &str) {
            fs::write(&self.options_file, content).expect("Failed to write options");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform directory tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_get_config_dir_returns_path() {
        let result = get_config_dir();
        assert!(result.is_ok());

        let path = result.unwrap();
        assert!(path.to_string_lossy().contains(APP_NAME));
    }

    #[test]
    fn test_get_options_file_path() {
        let result = get_options_file_path();
        assert!(result.is_ok());

        let path = result.unwrap();
        assert!(path.to_string_lossy().contains(OPTIONS_FILE_NAME));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load tests with temp directory
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_valid_options() {
        let env = TestEnv::new();
        let options = SearchOptions {
            min_pattern_length: 4,
            case_sensitive: false,
        };
        let json = serde_json::to_string_pretty(&options).unwrap();
        env.write_options(&json);

        let contents = fs::read_to_string(&env.options_file).unwrap();
        let loaded = SearchOptions::from_json_sanitized(&contents).unwrap();

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_corrupted_options_returns_error() {
        let env = TestEnv::new();
        env.write_options("{ invalid json }");

        let contents = fs::read_to_string(&env.options_file).unwrap();
        let result = SearchOptions::from_json_sanitized(&contents);

        assert!(result.is_err());
    }

    #[test]
    fn test_load_options_sanitizes_values() {
        let env = TestEnv::new();
        env.write_options(r#"{"min_pattern_length": 0}"#);

        let contents = fs::read_to_string(&env.options_file).unwrap();
        let options = SearchOptions::from_json_sanitized(&contents).unwrap();

        assert_eq!(
            options.min_pattern_length,
            SearchOptions::MIN_PATTERN_LENGTH_FLOOR
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save tests with temp directory
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_and_load_roundtrip() {
        let env = TestEnv::new();
        let original = SearchOptions {
            min_pattern_length: 5,
            case_sensitive: false,
        };

        let json = serde_json::to_string_pretty(&original).unwrap();
        fs::write(&env.options_file, &json).unwrap();

        let contents = fs::read_to_string(&env.options_file).unwrap();
        let loaded: SearchOptions = serde_json::from_str(&contents).unwrap();

        assert_eq!(original, loaded);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Graceful fallback tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_options_graceful_fallback() {
        // The public API always returns valid options, even if the file
        // doesn't exist or is unreadable
        let options = load_options();
        assert!(options.min_pattern_length >= SearchOptions::MIN_PATTERN_LENGTH_FLOOR);
    }

    #[test]
    fn test_default_options_are_serializable() {
        let options = SearchOptions::default();
        let json = serde_json::to_string(&options);
        assert!(json.is_ok());
    }

    #[test]
    fn test_save_options_silent_returns_bool() {
        let options = SearchOptions::default();
        let result = save_options_silent(&options);

        // Result depends on whether we have write permissions
        // Just verify it doesn't panic and returns a bool
        assert!(result == true || result == false);
    }

    #[test]
    fn test_app_name_constant() {
        assert_eq!(APP_NAME, "linenav");
    }
}
