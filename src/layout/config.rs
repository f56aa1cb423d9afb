//! Configuration for lineup arrangement

use std::path::Path;

use serde::Deserialize;

use crate::error::LineupError;
use crate::formation::{self, DEFAULT_FORMATION};

use super::heuristic::{InterpolatedSpread, LineSpread, TabulatedSpread};

/// How players of a line are spread across the pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadStrategy {
    /// Fixed tables for lines of 2-5 players, centre stacking otherwise
    #[default]
    Tabulated,
    /// Fixed tables, with even spacing for any other line size
    Interpolated,
}

impl SpreadStrategy {
    pub fn spread(&self) -> &'static dyn LineSpread {
        match self {
            SpreadStrategy::Tabulated => &TabulatedSpread,
            SpreadStrategy::Interpolated => &InterpolatedSpread,
        }
    }
}

/// Configuration options for arrangement
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArrangeConfig {
    /// Formation used when the requested one is unknown or malformed
    pub default_formation: String,

    /// Line spreading strategy for the heuristic mapper
    pub spread: SpreadStrategy,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            default_formation: DEFAULT_FORMATION.to_string(),
            spread: SpreadStrategy::Tabulated,
        }
    }
}

impl ArrangeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LineupError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Missing keys take their default; a `default_formation` outside the
    /// known set is rejected.
    pub fn from_str(content: &str) -> Result<Self, LineupError> {
        let mut config: ArrangeConfig = toml::from_str(content)?;
        match formation::recognize(&config.default_formation) {
            Some(canonical) => config.default_formation = canonical,
            None => {
                return Err(LineupError::UnknownDefaultFormation {
                    formation: config.default_formation,
                })
            }
        }
        Ok(config)
    }

    /// Set the fallback formation; unknown labels keep the current one
    pub fn with_default_formation(mut self, formation: &str) -> Self {
        self.default_formation = formation::normalize_or(formation, &self.default_formation);
        self
    }

    /// Set the line spreading strategy
    pub fn with_spread(mut self, spread: SpreadStrategy) -> Self {
        self.spread = spread;
        self
    }

    /// Canonical formation to arrange with
    pub fn resolve_formation(&self, formation: &str) -> String {
        formation::normalize_or(formation, &self.default_formation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArrangeConfig::default();
        assert_eq!(config.default_formation, "4-3-3");
        assert_eq!(config.spread, SpreadStrategy::Tabulated);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArrangeConfig::new()
            .with_default_formation("4\u{2013}4\u{2013}2")
            .with_spread(SpreadStrategy::Interpolated);

        assert_eq!(config.default_formation, "4-4-2");
        assert_eq!(config.spread, SpreadStrategy::Interpolated);
    }

    #[test]
    fn test_builder_ignores_unknown_default() {
        let config = ArrangeConfig::new().with_default_formation("1-1-8");
        assert_eq!(config.default_formation, "4-3-3");
    }

    #[test]
    fn test_resolve_formation() {
        let config = ArrangeConfig::new().with_default_formation("3-5-2");
        assert_eq!(config.resolve_formation("5 - 4 - 1"), "5-4-1");
        assert_eq!(config.resolve_formation("7-7"), "3-5-2");
    }

    #[test]
    fn test_parse_toml() {
        let config = ArrangeConfig::from_str(
            r#"
default_formation = "3 - 4 - 3"
spread = "interpolated"
"#,
        )
        .expect("Should parse");
        assert_eq!(config.default_formation, "3-4-3");
        assert_eq!(config.spread, SpreadStrategy::Interpolated);
    }

    #[test]
    fn test_parse_toml_partial() {
        let config = ArrangeConfig::from_str(r#"spread = "tabulated""#).expect("Should parse");
        assert_eq!(config, ArrangeConfig::default());

        let empty = ArrangeConfig::from_str("").expect("Should parse");
        assert_eq!(empty, ArrangeConfig::default());
    }

    #[test]
    fn test_unknown_default_formation_error() {
        let result = ArrangeConfig::from_str(r#"default_formation = "2-2-2""#);
        assert!(matches!(
            result,
            Err(LineupError::UnknownDefaultFormation { ref formation }) if formation == "2-2-2"
        ));
    }

    #[test]
    fn test_blank_default_formation_error() {
        let result = ArrangeConfig::from_str(r#"default_formation = "  ""#);
        assert!(matches!(
            result,
            Err(LineupError::UnknownDefaultFormation { ref formation }) if formation == "  "
        ));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = ArrangeConfig::from_str("spread = \"zigzag\"");
        assert!(matches!(result, Err(LineupError::Config(_))));
    }
}
