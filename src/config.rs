//! Import matching configuration.
//!
//! Thresholds are caller policy, not part of the scoring itself: the scorer only
//! produces a 0-100 confidence, and these values decide which bucket it lands in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::answer::MatchOptions;
use crate::error::{MatchError, Result};

/// Configuration for the import matcher and quiz answer checks.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use title_match::MatchConfig;
///
/// // Defaults
/// let config = MatchConfig::default();
/// assert_eq!(config.auto_match_threshold, 70);
///
/// // From flat overrides
/// let mut overrides = HashMap::new();
/// overrides.insert("auto_match_threshold".to_string(), 80.0);
/// let config = MatchConfig::from_overrides(&overrides);
/// assert_eq!(config.auto_match_threshold, 80);
/// assert_eq!(config.review_threshold, 40);
///
/// // From JSON; the nested answer options take snake_case or camelCase keys
/// let config = MatchConfig::from_json(
///     r#"{"auto_match_threshold": 80, "answer": {"min_match_percentage": 60}}"#,
/// )
/// .unwrap();
/// assert_eq!(config.answer.min_match_percentage, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Best score at or above this is imported without asking
    pub auto_match_threshold: u8,

    /// Best score at or above this (but below auto-match) goes to manual review
    pub review_threshold: u8,

    /// Runner-up candidates kept per row
    pub max_alternatives: usize,

    /// Default options for quiz answer checks
    pub answer: MatchOptions,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            auto_match_threshold: 70,
            review_threshold: 40,
            max_alternatives: 5,
            answer: MatchOptions::default(),
        }
    }
}

impl MatchConfig {
    /// Parse from a JSON string; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Build from flat numeric overrides with defaults for missing keys.
    ///
    /// Recognised keys: `auto_match_threshold`, `review_threshold`, `max_alternatives`,
    /// `min_match_percentage`, `allow_partial_match` (0 = off). Out-of-range values are
    /// clamped; unknown keys are ignored.
    pub fn from_overrides(overrides: &HashMap<String, f64>) -> Self {
        let defaults = Self::default();
        let threshold = |key: &str, default: u8| {
            overrides
                .get(key)
                .map(|v| v.clamp(0.0, 100.0).round() as u8)
                .unwrap_or(default)
        };

        let answer = MatchOptions {
            allow_partial_match: overrides
                .get("allow_partial_match")
                .map(|v| *v != 0.0)
                .unwrap_or(defaults.answer.allow_partial_match),
            min_match_percentage: overrides
                .get("min_match_percentage")
                .map(|v| v.clamp(0.0, 100.0))
                .unwrap_or(defaults.answer.min_match_percentage),
            acceptable_alternatives: Vec::new(),
        };

        Self {
            auto_match_threshold: threshold("auto_match_threshold", defaults.auto_match_threshold),
            review_threshold: threshold("review_threshold", defaults.review_threshold),
            max_alternatives: overrides
                .get("max_alternatives")
                .map(|v| v.max(0.0) as usize)
                .unwrap_or(defaults.max_alternatives),
            answer,
        }
    }

    /// Check that thresholds and percentages are within 0-100 and ordered
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("auto_match_threshold", self.auto_match_threshold),
            ("review_threshold", self.review_threshold),
        ] {
            if value > 100 {
                return Err(MatchError::InvalidThreshold {
                    name: name.to_string(),
                    value: f64::from(value),
                });
            }
        }

        let pct = self.answer.min_match_percentage;
        if !(0.0..=100.0).contains(&pct) {
            return Err(MatchError::InvalidThreshold {
                name: "min_match_percentage".to_string(),
                value: pct,
            });
        }

        if self.review_threshold > self.auto_match_threshold {
            return Err(MatchError::Config(format!(
                "review_threshold ({}) is above auto_match_threshold ({})",
                self.review_threshold, self.auto_match_threshold
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for MatchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "auto_match>={}, review>={}, alternatives={}, partial={}, min_match={}%",
            self.auto_match_threshold,
            self.review_threshold,
            self.max_alternatives,
            self.answer.allow_partial_match,
            self.answer.min_match_percentage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MatchConfig::default();
        assert_eq!(config.auto_match_threshold, 70);
        assert_eq!(config.review_threshold, 40);
        assert_eq!(config.max_alternatives, 5);
        assert!(config.answer.allow_partial_match);
        assert_eq!(config.answer.min_match_percentage, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_overrides_with_values() {
        let mut overrides = HashMap::new();
        overrides.insert("auto_match_threshold".to_string(), 85.0);
        overrides.insert("review_threshold".to_string(), 50.0);
        overrides.insert("max_alternatives".to_string(), 3.0);
        overrides.insert("min_match_percentage".to_string(), 60.0);
        overrides.insert("allow_partial_match".to_string(), 0.0);

        let config = MatchConfig::from_overrides(&overrides);
        assert_eq!(config.auto_match_threshold, 85);
        assert_eq!(config.review_threshold, 50);
        assert_eq!(config.max_alternatives, 3);
        assert_eq!(config.answer.min_match_percentage, 60.0);
        assert!(!config.answer.allow_partial_match);
    }

    #[test]
    fn test_from_overrides_clamps() {
        let mut overrides = HashMap::new();
        overrides.insert("auto_match_threshold".to_string(), 250.0);
        overrides.insert("min_match_percentage".to_string(), -5.0);

        let config = MatchConfig::from_overrides(&overrides);
        assert_eq!(config.auto_match_threshold, 100);
        assert_eq!(config.answer.min_match_percentage, 0.0);
    }

    #[test]
    fn test_from_overrides_empty() {
        let config = MatchConfig::from_overrides(&HashMap::new());
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"review_threshold": 55, "answer": {"minMatchPercentage": 80}}"#;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.review_threshold, 55);
        assert_eq!(config.auto_match_threshold, 70);
        assert_eq!(config.answer.min_match_percentage, 80.0);
        assert!(config.answer.allow_partial_match);
    }

    #[test]
    fn test_from_json_snake_case_answer_options() {
        let config = MatchConfig::from_json(
            r#"{"answer": {"allow_partial_match": false, "acceptable_alternatives": ["Buddy"]}}"#,
        )
        .unwrap();
        assert!(!config.answer.allow_partial_match);
        assert_eq!(config.answer.acceptable_alternatives, vec!["Buddy"]);
        assert_eq!(config.answer.min_match_percentage, 70.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MatchConfig {
            auto_match_threshold: 101,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MatchError::InvalidThreshold { .. })
        ));

        let mut config = MatchConfig::default();
        config.answer.min_match_percentage = 150.0;
        assert!(matches!(
            config.validate(),
            Err(MatchError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let err = MatchConfig::from_json(r#"{"auto_match_threshold": 50, "review_threshold": 60}"#)
            .unwrap_err();
        assert!(matches!(err, MatchError::Config(_)));
    }

    #[test]
    fn test_display() {
        let display = format!("{}", MatchConfig::default());
        assert_eq!(
            display,
            "auto_match>=70, review>=40, alternatives=5, partial=true, min_match=70%"
        );
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
