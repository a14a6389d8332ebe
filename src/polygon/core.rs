//! Core polygon type and measurements.

use crate::primitives::{Point2, Segment2};
use crate::tolerance::{dedup_ring, segments_intersect, SegmentIntersection};
use num_traits::Float;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simple polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first). Cells produced by this crate are convex and counter-clockwise.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Polygon through `points` ordered by angle around `center`.
    ///
    /// For a star-shaped vertex set around `center` this yields a
    /// counter-clockwise polygon.
    pub fn sorted_around(mut points: Vec<Point2<F>>, center: Point2<F>) -> Self {
        points.sort_by(|a, b| {
            a.angle_from(center)
                .partial_cmp(&b.angle_from(center))
                .unwrap_or(Ordering::Equal)
        });
        Self::new(points)
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over the closed boundary as segments.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the centroid (center of mass) of the polygon.
    pub fn centroid(&self) -> Option<Point2<F>> {
        polygon_centroid(&self.vertices)
    }

    /// Tests if a point is inside the polygon.
    pub fn contains(&self, point: Point2<F>) -> bool {
        polygon_contains(&self.vertices, point)
    }

    /// Tests if the polygon is convex, ignoring turns within `eps`.
    pub fn is_convex(&self, eps: F) -> bool {
        polygon_is_convex(&self.vertices, eps)
    }

    /// Tests that no two non-adjacent edges touch.
    pub fn is_simple(&self, eps: F) -> bool {
        polygon_is_simple(&self.vertices, eps)
    }

    /// Returns `true` if two consecutive vertices (closing pair included)
    /// are within `eps` of each other.
    pub fn has_repeated_vertex(&self, eps: F) -> bool {
        self.len() > 1 && self.edges().any(|e| e.is_degenerate(eps))
    }

    /// Drops consecutive duplicate vertices within `eps`.
    pub fn dedup(&mut self, eps: F) {
        self.vertices = dedup_ring(&self.vertices, eps);
    }

    /// Ensures the polygon has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < F::zero() {
            self.vertices.reverse();
        }
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding. Coordinates are taken
/// relative to the first vertex, so small polygons far from the origin keep
/// their precision.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let origin = vertices[0];
    let n = vertices.len();
    let twice = (1..n - 1).fold(F::zero(), |acc, i| {
        acc + (vertices[i] - origin).cross(vertices[i + 1] - origin)
    });

    twice / (F::one() + F::one())
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}

/// Computes the centroid of a polygon.
///
/// Returns None for degenerate polygons: fewer than 3 vertices, or an area
/// within rounding of zero for the polygon's size.
pub fn polygon_centroid<F: Float>(vertices: &[Point2<F>]) -> Option<Point2<F>> {
    if vertices.len() < 3 {
        return None;
    }

    let origin = vertices[0];
    let reach = vertices
        .iter()
        .fold(F::zero(), |acc, &v| acc.max(v.distance_squared(origin)));
    let area = polygon_signed_area(vertices);
    if area.abs() <= F::epsilon() * reach {
        return None;
    }

    // Fan of triangles from the first vertex
    let three = F::from(3.0)?;
    let mut cx = F::zero();
    let mut cy = F::zero();
    for i in 1..vertices.len() - 1 {
        let (a, b) = (vertices[i] - origin, vertices[i + 1] - origin);
        let cross = a.cross(b);
        cx = cx + (a.x + b.x) * cross;
        cy = cy + (a.y + b.y) * cross;
    }

    let two = F::one() + F::one();
    let denom = three * two * area;
    Some(Point2::new(origin.x + cx / denom, origin.y + cy / denom))
}

/// Tests if a point is inside a polygon using the ray casting algorithm.
///
/// Points on the boundary may return either true or false.
pub fn polygon_contains<F: Float>(vertices: &[Point2<F>], point: Point2<F>) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let n = vertices.len();

    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        if ((vi.y > point.y) != (vj.y > point.y))
            && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Tests if a polygon is convex.
///
/// Returns true if all turns larger than `eps` (cross product of consecutive
/// edges) have the same sign. Collinear runs are tolerated.
pub fn polygon_is_convex<F: Float>(vertices: &[Point2<F>], eps: F) -> bool {
    if vertices.len() < 3 {
        return true;
    }

    let n = vertices.len();
    let mut sign: Option<bool> = None;

    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];

        let cross = (b - a).cross(c - b);

        if cross.abs() > eps {
            let is_positive = cross > F::zero();
            match sign {
                None => sign = Some(is_positive),
                Some(s) if s != is_positive => return false,
                _ => {}
            }
        }
    }

    true
}

/// Tests that the closed ring has no self-intersections.
///
/// Adjacent edges may share their common vertex; any other contact
/// (crossing, touching, or overlapping) makes the ring non-simple.
pub fn polygon_is_simple<F: Float>(vertices: &[Point2<F>], eps: F) -> bool {
    let n = vertices.len();
    if n < 4 {
        return true;
    }

    let edge = |i: usize| Segment2::new(vertices[i], vertices[(i + 1) % n]);

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match segments_intersect(edge(i), edge(j), eps) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point { .. } if adjacent => {}
                _ => return false,
            }
        }
    }

    true
}
