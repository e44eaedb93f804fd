use geo::{Coord, MultiPolygon};

/// Boundary structure of a polygon feature as a tagged tree: a node is either
/// a single ring's ordered coordinates or an ordered list of sub-parts.
///
/// Flattening visits every leaf ring's points in original order regardless of
/// nesting depth, handling single polygons, polygons with holes, and
/// multi-part features uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    Ring(Vec<Coord<f64>>),
    Parts(Vec<Boundary>),
}

impl Boundary {
    /// Boundary tree of an optional geometry; absent geometry has no parts
    /// and flattens to an empty sequence.
    pub fn from_geometry(geom: Option<&MultiPolygon<f64>>) -> Self {
        match geom {
            Some(geom) => geom.into(),
            None => Self::Parts(Vec::new()),
        }
    }

    /// The complete ordered vertex sequence, via depth-first flatten.
    pub fn points(&self) -> Vec<Coord<f64>> {
        let mut points = Vec::new();
        self.collect(&mut points);
        points
    }

    fn collect(&self, out: &mut Vec<Coord<f64>>) {
        match self {
            Self::Ring(coords) => out.extend_from_slice(coords),
            Self::Parts(parts) => parts.iter().for_each(|part| part.collect(out)),
        }
    }
}

impl From<&MultiPolygon<f64>> for Boundary {
    fn from(geom: &MultiPolygon<f64>) -> Self {
        Self::Parts(
            geom.0
                .iter()
                .map(|polygon| {
                    Self::Parts(
                        std::iter::once(polygon.exterior())
                            .chain(polygon.interiors())
                            .map(|ring| Self::Ring(ring.0.clone()))
                            .collect(),
                    )
                })
                .collect(),
        )
    }
}

/// Returns `true` as soon as `n0` coordinate-exact matches are found between
/// the two point sequences; `false` once the comparison is exhausted. Either
/// empty sequence is an immediate `false`.
///
/// Equality is exact — shared vertices at a common border, not proximity.
/// O(len1 * len2) per pair; this is the dominant cost for large feature sets
/// (point hashing or a sorted merge would cut it, if it ever matters).
pub fn share_points(pts1: &[Coord<f64>], pts2: &[Coord<f64>], n0: usize) -> bool {
    if pts1.is_empty() || pts2.is_empty() {
        return false;
    }
    let mut matches = 0;
    for p1 in pts1 {
        for p2 in pts2 {
            if p1 == p2 {
                matches += 1;
                if matches >= n0 {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use geo::{LineString, Polygon};

    use super::*;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[test]
    fn ring_flattens_in_order() {
        let ring = Boundary::Ring(vec![coord(0.0, 0.0), coord(1.0, 0.0), coord(1.0, 1.0)]);
        assert_eq!(ring.points(), vec![coord(0.0, 0.0), coord(1.0, 0.0), coord(1.0, 1.0)]);
    }

    #[test]
    fn nested_parts_concatenate_depth_first() {
        // Three levels deep: parts of parts of rings.
        let tree = Boundary::Parts(vec![
            Boundary::Parts(vec![
                Boundary::Ring(vec![coord(0.0, 0.0)]),
                Boundary::Ring(vec![coord(1.0, 0.0), coord(2.0, 0.0)]),
            ]),
            Boundary::Ring(vec![coord(3.0, 0.0)]),
        ]);
        assert_eq!(
            tree.points(),
            vec![coord(0.0, 0.0), coord(1.0, 0.0), coord(2.0, 0.0), coord(3.0, 0.0)],
        );
    }

    #[test]
    fn absent_geometry_yields_empty_sequence() {
        assert!(Boundary::from_geometry(None).points().is_empty());
    }

    #[test]
    fn multipolygon_flatten_includes_holes() {
        let outer = LineString::from(vec![
            (0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0),
        ]);
        let hole = LineString::from(vec![
            (4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0),
        ]);
        let geom = MultiPolygon(vec![Polygon::new(outer, vec![hole])]);

        let points = Boundary::from_geometry(Some(&geom)).points();
        // 5 outer coords followed by 5 hole coords, original order.
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], coord(0.0, 0.0));
        assert_eq!(points[5], coord(4.0, 4.0));
    }

    #[test]
    fn share_points_meets_threshold() {
        let a = vec![coord(0.0, 0.0), coord(1.0, 0.0), coord(2.0, 0.0)];
        let b = vec![coord(1.0, 0.0), coord(2.0, 0.0), coord(3.0, 0.0)];
        assert!(share_points(&a, &b, 1));
        assert!(share_points(&a, &b, 2));
        assert!(!share_points(&a, &b, 3));
    }

    #[test]
    fn share_points_requires_exact_equality() {
        let a = vec![coord(1.0, 1.0)];
        let b = vec![coord(1.0 + 1e-12, 1.0)];
        assert!(!share_points(&a, &b, 1));
    }

    #[test]
    fn share_points_empty_side_is_false() {
        let a = vec![coord(0.0, 0.0)];
        assert!(!share_points(&a, &[], 1));
        assert!(!share_points(&[], &a, 1));
        assert!(!share_points(&[], &[], 1));
    }
}
