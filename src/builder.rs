use rayon::prelude::*;

use crate::classify::{check_evaluable, classify};
use crate::config::{AdjacencyConfig, GeometryErrorPolicy, OutputMode};
use crate::error::AdjacencyError;
use crate::feature::FeatureSet;
use crate::result::{AdjacencyMatrix, AdjacencyResult, EdgeList};

impl FeatureSet {
    /// Compute adjacency over every unordered pair (j < i) with the
    /// single-threaded reference loop: envelope filter first, then the
    /// topological classifier for survivors.
    pub fn adjacency(&self, config: &AdjacencyConfig) -> Result<AdjacencyResult, AdjacencyError> {
        config.validate()?;

        let mut edges: Vec<(u32, u32)> = Vec::new();
        for i in 0..self.len() {
            for j in 0..i {
                if self.pair_adjacent(i, j, config)? {
                    edges.push((i as u32, j as u32));
                }
            }
        }

        Ok(assemble(config.output, self.len(), edges))
    }

    /// Parallel variant: the pair space is partitioned by outer index, each
    /// worker prunes candidates through the shared R-tree and accumulates a
    /// private partial row, and rows are merged lock-free at the end.
    ///
    /// Produces the same edge set as [`adjacency`](Self::adjacency).
    pub fn adjacency_par(&self, config: &AdjacencyConfig) -> Result<AdjacencyResult, AdjacencyError> {
        config.validate()?;

        let rows: Vec<Vec<u32>> = (0..self.len())
            .into_par_iter()
            .map(|i| -> Result<Vec<u32>, AdjacencyError> {
                let mut row = Vec::new();
                let Some(envelope) = self.envelope(i) else {
                    return Ok(row);
                };

                let mut candidates: Vec<usize> =
                    self.candidates(envelope).filter(|&j| j < i).collect();
                candidates.sort_unstable(); // R-tree order is not deterministic

                for j in candidates {
                    if self.pair_adjacent(i, j, config)? {
                        row.push(j as u32);
                    }
                }
                Ok(row)
            })
            .collect::<Result<_, AdjacencyError>>()?;

        let edges = rows
            .into_iter()
            .enumerate()
            .flat_map(|(i, row)| row.into_iter().map(move |j| (i as u32, j)))
            .collect();

        Ok(assemble(config.output, self.len(), edges))
    }

    /// Decide one pair. Absent geometry on either side is a guarded
    /// non-adjacent; unevaluable geometry follows `config.on_geometry_error`.
    /// The classifier never runs for envelope-disjoint pairs.
    fn pair_adjacent(
        &self,
        i: usize,
        j: usize,
        config: &AdjacencyConfig,
    ) -> Result<bool, AdjacencyError> {
        let (Some(e1), Some(e2)) = (self.envelope(i), self.envelope(j)) else {
            return Ok(false);
        };
        if !e1.intersects(&e2) {
            return Ok(false);
        }

        let (Some(g1), Some(g2)) = (self.geometry(i), self.geometry(j)) else {
            return Ok(false);
        };
        for (index, geom) in [(i, g1), (j, g2)] {
            if let Err(reason) = check_evaluable(geom) {
                return match config.on_geometry_error {
                    GeometryErrorPolicy::Abort => {
                        Err(AdjacencyError::InvalidGeometry { index, reason })
                    }
                    GeometryErrorPolicy::Skip => Ok(false),
                };
            }
        }

        Ok(classify(g1, self.points(i), g2, self.points(j), config.shared_point_threshold))
    }
}

/// Accumulate recorded edges into the requested representation. Matrix output
/// sets both (i, j) and (j, i); the diagonal is never written.
fn assemble(mode: OutputMode, n: usize, edges: Vec<(u32, u32)>) -> AdjacencyResult {
    match mode {
        OutputMode::Matrix => {
            let mut matrix = AdjacencyMatrix::zeros(n);
            for (i, j) in edges {
                matrix.set_adjacent(i as usize, j as usize);
            }
            AdjacencyResult::Matrix(matrix)
        }
        OutputMode::List => AdjacencyResult::List(EdgeList::from_pairs(edges)),
    }
}
