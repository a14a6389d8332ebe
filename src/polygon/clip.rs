//! Sutherland-Hodgman polygon clipping against half-planes.
//!
//! A convex clip region is a sequence of half-planes. Clipping folds the
//! subject polygon through them one at a time; each step is a pure function
//! from polygon to polygon, so steps can be tested in isolation.

use crate::bounds::BoundingBox;
use crate::polygon::core::Polygon;
use crate::primitives::HalfPlane2;
use crate::tolerance::dedup_ring;
use num_traits::Float;

/// Intersects a polygon with one closed half-plane.
///
/// Vertices within `eps` of the boundary count as inside. Crossing edges
/// contribute their intersection with the boundary line, and vertices that
/// land within `eps` of their predecessor are merged, so a polygon touching
/// the boundary gains no duplicate vertices.
///
/// A polygon entirely inside is returned unchanged; one entirely outside
/// yields an empty polygon.
///
/// # Example
///
/// ```
/// use voronum::polygon::{clip_against_halfplane, Polygon};
/// use voronum::{HalfPlane2, Point2, Vec2};
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// // Keep x <= 1
/// let half = HalfPlane2::new(Vec2::new(1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
///
/// let clipped = clip_against_halfplane(&square, &half, 1e-10);
/// assert_eq!(clipped.len(), 4);
/// assert!((clipped.area() - 2.0).abs() < 1e-12);
/// ```
pub fn clip_against_halfplane<F: Float>(
    polygon: &Polygon<F>,
    half_plane: &HalfPlane2<F>,
    eps: F,
) -> Polygon<F> {
    let input = &polygon.vertices;
    let Some(&last) = input.last() else {
        return Polygon::empty();
    };

    let mut output = Vec::with_capacity(input.len() + 1);
    let mut prev = last;
    let mut prev_inside = half_plane.contains(prev, eps);

    for &current in input {
        let current_inside = half_plane.contains(current, eps);

        if current_inside {
            if !prev_inside {
                // Entering
                if let Some(p) = half_plane.crossing(prev, current) {
                    output.push(p);
                }
            }
            output.push(current);
        } else if prev_inside {
            // Exiting
            if let Some(p) = half_plane.crossing(prev, current) {
                output.push(p);
            }
        }

        prev = current;
        prev_inside = current_inside;
    }

    Polygon::new(dedup_ring(&output, eps))
}

/// Clips a polygon against a sequence of half-planes.
///
/// The result is the intersection of the polygon with every half-plane,
/// computed as a fold of [`clip_against_halfplane`]. Stops early once the
/// polygon becomes empty.
pub fn clip_polygon<'a, F, I>(polygon: &Polygon<F>, half_planes: I, eps: F) -> Polygon<F>
where
    F: Float + 'a,
    I: IntoIterator<Item = &'a HalfPlane2<F>>,
{
    half_planes
        .into_iter()
        .fold(polygon.clone(), |current, half_plane| {
            if current.is_empty() {
                current
            } else {
                clip_against_halfplane(&current, half_plane, eps)
            }
        })
}

/// Clips a polygon to an axis-aligned box.
pub fn clip_to_box<F: Float>(polygon: &Polygon<F>, bbox: &BoundingBox<F>, eps: F) -> Polygon<F> {
    clip_polygon(polygon, bbox.half_planes().iter(), eps)
}

/// Clips a polygon against a convex clipping polygon.
///
/// Each edge of `clip` (normalized to counter-clockwise) becomes one
/// half-plane. Degenerate clip edges are skipped.
///
/// # Example
///
/// ```
/// use voronum::polygon::{sutherland_hodgman, Polygon};
/// use voronum::Point2;
///
/// let subject = Polygon::new(vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let clip = Polygon::new(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ]);
///
/// let result = sutherland_hodgman(&subject, &clip, 1e-10);
/// assert!((result.area() - 1.0).abs() < 1e-12);
/// ```
pub fn sutherland_hodgman<F: Float>(subject: &Polygon<F>, clip: &Polygon<F>, eps: F) -> Polygon<F> {
    if subject.is_empty() || clip.len() < 3 {
        return Polygon::empty();
    }

    let mut region = clip.clone();
    region.ensure_ccw();

    let half_planes: Vec<HalfPlane2<F>> = region
        .edges()
        .filter_map(|edge| HalfPlane2::left_of(edge.start, edge.end))
        .collect();

    clip_polygon(subject, half_planes.iter(), eps)
}
