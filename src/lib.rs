//! Pairwise spatial adjacency for polygon feature collections.
//!
//! Given N polygon features (e.g. administrative boundaries), compute which
//! unordered pairs are adjacent — boundaries touch with a required number of
//! shared vertices, or one polygon encloses the other — and emit the result
//! as a dense symmetric matrix or a sparse edge list.
//!
//! Geometries arrive in memory through [`FeatureProvider`]; results leave
//! through serde. The crate never touches files.

pub mod boundary;
pub mod builder;
pub mod classify;
pub mod config;
pub mod envelope;
pub mod error;
pub mod feature;
pub mod result;

pub use boundary::{share_points, Boundary};
pub use classify::{check_evaluable, classify};
pub use config::{AdjacencyConfig, GeometryErrorPolicy, OutputMode};
pub use envelope::Envelope;
pub use error::AdjacencyError;
pub use feature::{FeatureProvider, FeatureSet};
pub use result::{AdjacencyMatrix, AdjacencyResult, EdgeList};
