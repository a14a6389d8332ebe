//! Merging of coincident points.
//!
//! Two points closer than the tolerance are the same point. For input sites
//! the first occurrence wins and keeps its exact coordinates; later
//! duplicates are dropped and mapped onto it. For polygon rings, consecutive
//! vertices (including the closing pair) are merged.
//!
//! # Example
//!
//! ```
//! use voronum::tolerance::dedup_points;
//! use voronum::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1e-12, 0.0), // duplicate of the first point
//! ];
//!
//! let (sites, mapping) = dedup_points(&points, 1e-10);
//! assert_eq!(sites.len(), 2);
//! assert_eq!(mapping, vec![0, 1, 0]);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// Collapses points within `epsilon` of an earlier point, keeping input order.
///
/// # Returns
///
/// A tuple of:
/// - `Vec<Point2<F>>`: the distinct points, each the first occurrence of its
///   cluster, in input order
/// - `Vec<usize>`: `mapping[i]` is the index in the output that input point
///   `i` collapsed into
///
/// A point is compared against the kept representatives only, so chains of
/// points each within `epsilon` of the next are not merged transitively.
///
/// # Complexity
///
/// O(n * k) time where k is the number of distinct points, O(n) space.
pub fn dedup_points<F: Float>(points: &[Point2<F>], epsilon: F) -> (Vec<Point2<F>>, Vec<usize>) {
    let eps_sq = epsilon * epsilon;
    let mut kept: Vec<Point2<F>> = Vec::with_capacity(points.len());
    let mut mapping = Vec::with_capacity(points.len());

    for &p in points {
        match kept.iter().position(|q| q.distance_squared(p) <= eps_sq) {
            Some(existing) => mapping.push(existing),
            None => {
                mapping.push(kept.len());
                kept.push(p);
            }
        }
    }

    (kept, mapping)
}

/// Removes consecutive duplicate vertices from a closed ring.
///
/// The ring is implicitly closed, so a last vertex equal to the first is
/// dropped as well. Returns an empty ring when every vertex collapses into
/// one point.
pub fn dedup_ring<F: Float>(vertices: &[Point2<F>], epsilon: F) -> Vec<Point2<F>> {
    let eps_sq = epsilon * epsilon;
    let mut result: Vec<Point2<F>> = Vec::with_capacity(vertices.len());

    for &v in vertices {
        if result
            .last()
            .map_or(true, |last| last.distance_squared(v) > eps_sq)
        {
            result.push(v);
        }
    }

    while result.len() > 1 {
        let first = result[0];
        match result.last() {
            Some(last) if last.distance_squared(first) <= eps_sq => {
                result.pop();
            }
            _ => break,
        }
    }

    if result.len() == 1 {
        result.clear();
    }
    result
}
