use geo::{Coord, MultiPolygon, Relate};

use crate::boundary::share_points;

/// Checks that the touch/contains predicates can evaluate `geom`: every ring
/// must have at least four coordinates (the smallest closed boundary).
/// Returns the failure reason for error reporting.
pub fn check_evaluable(geom: &MultiPolygon<f64>) -> Result<(), String> {
    for polygon in &geom.0 {
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors()) {
            if ring.0.len() < 4 {
                return Err(format!(
                    "ring with {} coordinates cannot form a closed boundary",
                    ring.0.len()
                ));
            }
        }
    }
    Ok(())
}

/// Classify a candidate pair that survived the envelope filter.
///
/// Touching boundaries count as adjacent only when the flattened point sets
/// share at least `n0` vertices — a touch predicate alone admits geometries
/// that meet at a single incidental corner. Containment in either direction
/// is adjacent unconditionally: an enclave never registers a touch and may
/// share no boundary vertices at all.
pub fn classify(
    g1: &MultiPolygon<f64>,
    pts1: &[Coord<f64>],
    g2: &MultiPolygon<f64>,
    pts2: &[Coord<f64>],
    n0: usize,
) -> bool {
    // One relate() call gives the full DE-9IM.
    let im = g1.relate(g2);
    if im.is_touches() {
        return share_points(pts1, pts2, n0);
    }
    im.is_contains() || im.is_within()
}
