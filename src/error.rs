use std::fmt;

/// Errors produced while configuring or running an adjacency computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjacencyError {
    /// The configuration is invalid (unknown output mode or zero threshold).
    /// Raised before any pair processing begins.
    Config(String),
    /// The geometry at `index` cannot be evaluated by the topological
    /// predicates. Scoped to the pair under classification.
    InvalidGeometry { index: usize, reason: String },
}

impl fmt::Display for AdjacencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(reason) => write!(f, "invalid configuration: {reason}"),
            Self::InvalidGeometry { index, reason } => {
                write!(f, "geometry {index} cannot be evaluated: {reason}")
            }
        }
    }
}

impl std::error::Error for AdjacencyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_feature() {
        let err = AdjacencyError::InvalidGeometry {
            index: 7,
            reason: "ring with 2 coordinates cannot form a closed boundary".into(),
        };
        assert!(err.to_string().contains("geometry 7"));
    }

    #[test]
    fn config_errors_are_comparable() {
        assert_eq!(
            AdjacencyError::Config("x".into()),
            AdjacencyError::Config("x".into()),
        );
    }
}
