use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Dense symmetric 0/1 adjacency grid with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    cells: Array2<u8>,
}

impl AdjacencyMatrix {
    pub(crate) fn zeros(n: usize) -> Self {
        Self { cells: Array2::zeros((n, n)) }
    }

    /// Number of features (rows and columns).
    #[inline]
    pub fn order(&self) -> usize {
        self.cells.nrows()
    }

    /// Returns `true` iff features `i` and `j` are adjacent.
    #[inline]
    pub fn adjacent(&self, i: usize, j: usize) -> bool {
        self.cells[[i, j]] == 1
    }

    /// Mark `i` and `j` adjacent, in both triangles.
    pub(crate) fn set_adjacent(&mut self, i: usize, j: usize) {
        self.cells[[i, j]] = 1;
        self.cells[[j, i]] = 1;
    }

    /// The underlying grid.
    #[inline]
    pub fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Adjacent pairs read off the lower triangle, as `(hi, lo)` indices.
    pub fn edge_pairs(&self) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        for i in 0..self.order() {
            for j in 0..i {
                if self.adjacent(i, j) {
                    pairs.push((i as u32, j as u32));
                }
            }
        }
        pairs
    }
}

/// Sparse adjacency: each unordered pair {i, j} recorded once as `(hi, lo)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    pairs: Vec<(u32, u32)>,
}

impl EdgeList {
    pub(crate) fn from_pairs(pairs: Vec<(u32, u32)>) -> Self {
        debug_assert!(pairs.iter().all(|&(i, j)| i > j));
        Self { pairs }
    }

    /// Number of adjacent pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` iff {a, b} is recorded, in either argument order.
    pub fn contains(&self, a: u32, b: u32) -> bool {
        self.pairs.contains(&(a.max(b), a.min(b)))
    }

    /// Iterate over `(hi, lo)` pairs in recording order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.pairs.iter().copied()
    }
}

/// The computed adjacency, in whichever representation was requested. Ready
/// for any serde-based sink; the crate is agnostic to serialization format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdjacencyResult {
    Matrix(AdjacencyMatrix),
    List(EdgeList),
}

impl AdjacencyResult {
    /// Adjacent pairs as `(hi, lo)` indices, regardless of representation.
    pub fn edge_pairs(&self) -> Vec<(u32, u32)> {
        match self {
            Self::Matrix(matrix) => matrix.edge_pairs(),
            Self::List(list) => list.iter().collect(),
        }
    }

    /// The dense matrix, if that representation was requested.
    pub fn as_matrix(&self) -> Option<&AdjacencyMatrix> {
        match self {
            Self::Matrix(matrix) => Some(matrix),
            Self::List(_) => None,
        }
    }

    /// The edge list, if that representation was requested.
    pub fn as_list(&self) -> Option<&EdgeList> {
        match self {
            Self::List(list) => Some(list),
            Self::Matrix(_) => None,
        }
    }
}
