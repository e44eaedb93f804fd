use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdjacencyError;

/// Output representation for the computed adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Dense symmetric 0/1 grid.
    #[default]
    Matrix,
    /// Sparse list of unordered index pairs.
    List,
}

impl FromStr for OutputMode {
    type Err = AdjacencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "matrix" => Ok(Self::Matrix),
            "list" => Ok(Self::List),
            other => Err(AdjacencyError::Config(format!(
                "unknown output mode {other:?} (expected \"matrix\" or \"list\")"
            ))),
        }
    }
}

/// What the builder does with a pair whose geometry cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryErrorPolicy {
    /// Abort the whole run; adjacency over unevaluable geometry is suspect.
    #[default]
    Abort,
    /// Record the pair as non-adjacent and continue.
    Skip,
}

/// Configuration surface for an adjacency run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyConfig {
    pub output: OutputMode,
    /// Minimum number of shared boundary vertices for touch-based adjacency.
    pub shared_point_threshold: usize,
    pub on_geometry_error: GeometryErrorPolicy,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Matrix,
            shared_point_threshold: 1,
            on_geometry_error: GeometryErrorPolicy::Abort,
        }
    }
}

impl AdjacencyConfig {
    /// Fail-fast validation, run before any pair processing.
    pub fn validate(&self) -> Result<(), AdjacencyError> {
        if self.shared_point_threshold == 0 {
            return Err(AdjacencyError::Config(
                "shared_point_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_modes() {
        assert_eq!("matrix".parse::<OutputMode>().unwrap(), OutputMode::Matrix);
        assert_eq!("list".parse::<OutputMode>().unwrap(), OutputMode::List);
    }

    #[test]
    fn unknown_mode_is_a_config_error() {
        let err = "csv".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, AdjacencyError::Config(_)));
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let config = AdjacencyConfig::default();
        assert_eq!(config.output, OutputMode::Matrix);
        assert_eq!(config.shared_point_threshold, 1);
        assert_eq!(config.on_geometry_error, GeometryErrorPolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_threshold_fails_validation() {
        let config = AdjacencyConfig { shared_point_threshold: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(AdjacencyError::Config(_))));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: AdjacencyConfig =
            serde_json::from_str(r#"{"output": "list"}"#).unwrap();
        assert_eq!(config.output, OutputMode::List);
        assert_eq!(config.shared_point_threshold, 1);
    }
}
