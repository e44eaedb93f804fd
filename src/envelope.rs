use geo::{BoundingRect, MultiPolygon};
use rstar::{RTreeObject, AABB};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of a geometry: four bounds, derived once at load
/// time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Envelope {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    /// Envelope of a multipolygon, or `None` for an empty geometry.
    pub fn of(geom: &MultiPolygon<f64>) -> Option<Self> {
        geom.bounding_rect()
            .map(|rect| Self::new(rect.min().x, rect.max().x, rect.min().y, rect.max().y))
    }

    /// Returns `true` iff the two boxes overlap or touch, i.e. they are not
    /// strictly disjoint on either axis.
    ///
    /// Conservative pre-test: it may admit pairs the classifier ultimately
    /// rejects, but never rejects a pair the classifier would accept.
    #[inline]
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(self.xmax < other.xmin
            || self.xmin > other.xmax
            || self.ymax < other.ymin
            || self.ymin > other.ymax)
    }

    pub(crate) fn to_aabb(self) -> AABB<[f64; 2]> {
        AABB::from_corners([self.xmin, self.ymin], [self.xmax, self.ymax])
    }
}

/// An envelope in an R-tree, associated with a feature by arena index.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEnvelope {
    pub(crate) index: usize,
    pub(crate) envelope: Envelope,
}

impl RTreeObject for IndexedEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.to_aabb()
    }
}

#[cfg(test)]
mod tests {
    use geo::{LineString, MultiPolygon, Polygon};

    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Envelope::new(0.0, 2.0, 0.0, 2.0);
        let b = Envelope::new(1.0, 3.0, 1.0, 3.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_boxes_intersect() {
        // Shared edge at x = 1, no overlap in area.
        let a = Envelope::new(0.0, 1.0, 0.0, 1.0);
        let b = Envelope::new(1.0, 2.0, 0.0, 1.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_on_x_axis() {
        let a = Envelope::new(0.0, 1.0, 0.0, 10.0);
        let b = Envelope::new(2.0, 3.0, 0.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn disjoint_on_y_axis() {
        let a = Envelope::new(0.0, 10.0, 0.0, 1.0);
        let b = Envelope::new(0.0, 10.0, 2.0, 3.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn envelope_of_unit_square() {
        let square = MultiPolygon(vec![Polygon::new(
            LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]),
            vec![],
        )]);
        assert_eq!(Envelope::of(&square), Some(Envelope::new(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn empty_geometry_has_no_envelope() {
        assert_eq!(Envelope::of(&MultiPolygon(vec![])), None);
    }
}
