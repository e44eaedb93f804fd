use geo::{Coord, MultiPolygon};
use rstar::RTree;

use crate::boundary::Boundary;
use crate::envelope::{Envelope, IndexedEnvelope};

/// External collaborator supplying N features indexed `0..N-1`.
///
/// The crate never opens, parses, or closes any file; provider order is
/// significant because it defines the row/column indices of the output.
pub trait FeatureProvider {
    /// Number of features.
    fn num_features(&self) -> usize;

    /// Envelope of the feature at `index`, if one is known up front.
    /// When absent it is derived from the geometry instead.
    fn envelope(&self, index: usize) -> Option<Envelope>;

    /// Polygon geometry of the feature at `index`; `None` for features whose
    /// geometry is missing or failed to load.
    fn geometry(&self, index: usize) -> Option<MultiPolygon<f64>>;
}

/// One arena record: the geometry plus everything derived from it at load
/// time (envelope, flattened boundary points).
#[derive(Debug, Clone)]
struct Feature {
    geometry: Option<MultiPolygon<f64>>,
    envelope: Option<Envelope>,
    points: Vec<Coord<f64>>,
}

impl Feature {
    fn new(geometry: Option<MultiPolygon<f64>>, envelope: Option<Envelope>) -> Self {
        let envelope = envelope.or_else(|| geometry.as_ref().and_then(Envelope::of));
        let points = Boundary::from_geometry(geometry.as_ref()).points();
        Self { geometry, envelope, points }
    }
}

/// Fixed indexed arena of feature records, built once from the provider.
/// All adjacency algorithms operate on integer indices into this arena.
#[derive(Debug, Clone)]
pub struct FeatureSet {
    features: Vec<Feature>,
    rtree: RTree<IndexedEnvelope>,
}

impl FeatureSet {
    /// Build the arena from optional geometries, deriving envelopes.
    pub fn new(geometries: Vec<Option<MultiPolygon<f64>>>) -> Self {
        Self::from_features(geometries.into_iter().map(|geom| Feature::new(geom, None)).collect())
    }

    /// Build the arena from fully-loaded geometries.
    pub fn from_geometries(geometries: Vec<MultiPolygon<f64>>) -> Self {
        Self::new(geometries.into_iter().map(Some).collect())
    }

    /// Build the arena from a feature provider, preserving its order.
    pub fn from_provider(provider: &impl FeatureProvider) -> Self {
        Self::from_features(
            (0..provider.num_features())
                .map(|i| Feature::new(provider.geometry(i), provider.envelope(i)))
                .collect(),
        )
    }

    fn from_features(features: Vec<Feature>) -> Self {
        let rtree = RTree::bulk_load(
            features
                .iter()
                .enumerate()
                .filter_map(|(index, feature)| {
                    feature.envelope.map(|envelope| IndexedEnvelope { index, envelope })
                })
                .collect(),
        );
        Self { features, rtree }
    }

    /// Number of features in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Geometry of feature `index`, if present.
    #[inline]
    pub fn geometry(&self, index: usize) -> Option<&MultiPolygon<f64>> {
        self.features[index].geometry.as_ref()
    }

    /// Envelope of feature `index`, if its geometry produced one.
    #[inline]
    pub fn envelope(&self, index: usize) -> Option<Envelope> {
        self.features[index].envelope
    }

    /// Flattened boundary points of feature `index` (empty when absent).
    #[inline]
    pub fn points(&self, index: usize) -> &[Coord<f64>] {
        &self.features[index].points
    }

    /// Indices of features whose envelopes intersect `envelope`.
    pub(crate) fn candidates(&self, envelope: Envelope) -> impl Iterator<Item = usize> + '_ {
        let aabb = envelope.to_aabb();
        self.rtree.locate_in_envelope_intersecting(&aabb).map(|entry| entry.index)
    }
}
