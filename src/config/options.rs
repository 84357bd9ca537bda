//! Search options for linenav
//!
//! This module defines the `SearchOptions` struct that holds the tunable
//! knobs of the search core, with serde support for JSON persistence.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Search Options
// ─────────────────────────────────────────────────────────────────────────────

/// Tunable options for the search core.
///
/// This struct is serialized to JSON and persisted to the user's config
/// directory by the host. All fields have sensible defaults via the `Default`
/// trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Minimum pattern length before a search runs.
    ///
    /// Shorter patterns produce an empty result set without touching the
    /// buffer, so every keystroke against a large buffer stays cheap.
    pub min_pattern_length: usize,

    /// Whether pattern characters must match buffer characters exactly.
    ///
    /// When disabled, matching ignores case on both sides.
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_pattern_length: Self::DEFAULT_MIN_PATTERN_LENGTH,
            case_sensitive: true,
        }
    }
}

impl SearchOptions {
    /// Default minimum pattern length.
    pub const DEFAULT_MIN_PATTERN_LENGTH: usize = 3;
    /// Minimum allowed pattern length threshold.
    pub const MIN_PATTERN_LENGTH_FLOOR: usize = 1;
    /// Maximum allowed pattern length threshold.
    pub const MIN_PATTERN_LENGTH_CEIL: usize = 32;

    /// Clamp all fields to their valid ranges.
    ///
    /// Called after deserialization so a hand-edited options file cannot
    /// put the search core into a nonsensical configuration.
    pub fn sanitize(&mut self) {
        self.min_pattern_length = self
            .min_pattern_length
            .clamp(Self::MIN_PATTERN_LENGTH_FLOOR, Self::MIN_PATTERN_LENGTH_CEIL);
    }

    /// Parse options from JSON and sanitize the result.
    pub fn from_json_sanitized(json: &str) -> serde_json::Result<Self> {
        let mut options: SearchOptions = serde_json::from_str(json)?;
        options.sanitize();
        Ok(options)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.min_pattern_length, 3);
        assert!(options.case_sensitive);
    }

    #[test]
    fn test_sanitize_clamps_zero_threshold() {
        let mut options = SearchOptions {
            min_pattern_length: 0,
            ..SearchOptions::default()
        };
        options.sanitize();
        assert_eq!(
            options.min_pattern_length,
            SearchOptions::MIN_PATTERN_LENGTH_FLOOR
        );
    }

    #[test]
    fn test_sanitize_clamps_huge_threshold() {
        let mut options = SearchOptions {
            min_pattern_length: 1000,
            ..SearchOptions::default()
        };
        options.sanitize();
        assert_eq!(
            options.min_pattern_length,
            SearchOptions::MIN_PATTERN_LENGTH_CEIL
        );
    }

    #[test]
    fn test_from_json_sanitized_partial() {
        // Missing fields fall back to defaults
        let options = SearchOptions::from_json_sanitized(r#"{"case_sensitive": false}"#).unwrap();
        assert!(!options.case_sensitive);
        assert_eq!(options.min_pattern_length, 3);
    }

    #[test]
    fn test_from_json_sanitized_clamps() {
        let options =
            SearchOptions::from_json_sanitized(r#"{"min_pattern_length": 0}"#).unwrap();
        assert_eq!(options.min_pattern_length, 1);
    }

    #[test]
    fn test_from_json_unknown_fields_ignored() {
        let options =
            SearchOptions::from_json_sanitized(r#"{"min_pattern_length": 4, "future": true}"#)
                .unwrap();
        assert_eq!(options.min_pattern_length, 4);
    }

    #[test]
    fn test_from_json_wrong_type_is_error() {
        let result = SearchOptions::from_json_sanitized(r#"{"min_pattern_length": "three"}"#);
        assert!(result.is_err());
    }
}
