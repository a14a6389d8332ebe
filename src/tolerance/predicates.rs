//! Geometric predicates and constructions with explicit tolerance.
//!
//! Every function here takes the run's tolerance `eps` as a parameter. The
//! same value is meant to be threaded through a whole triangulation and
//! Voronoi build so that near-ties are resolved the same way everywhere:
//!
//! - `orient2d`: `|cross| <= eps` is collinear.
//! - `in_circumcircle`: an oriented incircle determinant `>= -eps` counts as
//!   inside, so points on the circle are inside.
//! - `circumcenter`: a collinear triple (per `orient2d`) has no circumcenter.

use crate::error::{Result, VoronoiError};
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Twice the signed area of triangle `a, b, c`.
///
/// Positive if `c` is left of the directed line `a -> b`, negative if right,
/// zero if the three points are collinear.
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Classifies the orientation of three points with tolerance.
///
/// If the absolute value of twice the signed area is at most `eps`, the
/// points are considered collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = orientation(a, b, c);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Oriented incircle determinant.
///
/// Positive when `p` lies inside the circle through `a`, `b`, `c`, negative
/// when outside, zero on the circle, whatever the winding of the triangle.
/// Equals `2 * area(abc) * (r² - |p - center|²)`.
pub fn incircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    // | ax-px  ay-py  (ax-px)²+(ay-py)² |
    // | bx-px  by-py  (bx-px)²+(by-py)² |
    // | cx-px  cy-py  (cx-px)²+(cy-py)² |
    let ad = a - p;
    let bd = b - p;
    let cd = c - p;

    let aa = ad.magnitude_squared();
    let bb = bd.magnitude_squared();
    let cc = cd.magnitude_squared();

    let det = aa * bd.cross(cd) - bb * ad.cross(cd) + cc * ad.cross(bd);

    if orientation(a, b, c) < F::zero() {
        -det
    } else {
        det
    }
}

/// Tests if `p` lies inside or on the circumcircle of triangle `a, b, c`.
///
/// Boundary policy: a point on the circle (within `eps` on the incircle
/// determinant) counts as inside. Bowyer-Watson relies on this being applied
/// the same way to every triangle. A collinear triple has no circumcircle
/// and contains nothing.
///
/// # Example
///
/// ```
/// use voronum::tolerance::in_circumcircle;
/// use voronum::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.5), a, b, c, 1e-10));
/// // Opposite corner of the unit square is exactly on the circle
/// assert!(in_circumcircle(Point2::new(1.0, 1.0), a, b, c, 1e-10));
/// assert!(!in_circumcircle(Point2::new(2.0, 2.0), a, b, c, 1e-10));
/// ```
pub fn in_circumcircle<F: Float>(
    p: Point2<F>,
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> bool {
    if orient2d(a, b, c, eps) == Orientation::Collinear {
        return false;
    }
    incircle(p, a, b, c) >= -eps
}

/// Computes the circumcenter of triangle `a, b, c`.
///
/// Works relative to `a` to keep magnitudes small.
///
/// # Errors
///
/// Returns [`VoronoiError::DegenerateInput`] when the three points are
/// collinear within `eps`.
///
/// # Example
///
/// ```
/// use voronum::tolerance::circumcenter;
/// use voronum::Point2;
///
/// let center = circumcenter(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     1e-10,
/// )
/// .unwrap();
///
/// assert!((center.x - 0.5).abs() < 1e-12);
/// assert!((center.y - 0.5).abs() < 1e-12);
/// ```
pub fn circumcenter<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    eps: F,
) -> Result<Point2<F>> {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.cross(ac);

    if cross.abs() <= eps {
        let (ax, ay) = a.to_f64_pair();
        let (bx, by) = b.to_f64_pair();
        let (cx, cy) = c.to_f64_pair();
        return Err(VoronoiError::DegenerateInput {
            reason: format!(
                "circumcenter undefined for collinear points ({ax}, {ay}), ({bx}, {by}), ({cx}, {cy})"
            ),
        });
    }

    let two = F::one() + F::one();
    let d = two * cross;
    let ab2 = ab.magnitude_squared();
    let ac2 = ac.magnitude_squared();

    let ux = (ac.y * ab2 - ab.y * ac2) / d;
    let uy = (ab.x * ac2 - ac.x * ab2) / d;

    Ok(Point2::new(a.x + ux, a.y + uy))
}

/// Checks if a point lies on a line segment within tolerance.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// Result of a segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments intersect at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along second segment (0 = start, 1 = end).
        t2: F,
    },
    /// Segments are collinear and overlap along a stretch.
    Overlapping {
        /// Start of the overlapping region.
        start: Point2<F>,
        /// End of the overlapping region.
        end: Point2<F>,
    },
}

/// Tests if two line segments intersect, with tolerance.
///
/// Used to check that output cell polygons do not self-intersect.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);
    let d = s2.start - s1.start;

    if cross.abs() <= eps {
        // Parallel: only collinear segments can meet
        if s1.distance_squared_to_point(s2.start) > eps * eps
            && s1.distance_squared_to_point(s2.end) > eps * eps
        {
            return SegmentIntersection::None;
        }

        let len_sq = d1.magnitude_squared();
        if len_sq <= eps * eps {
            return if point_on_segment(s1.start, s2, eps) {
                SegmentIntersection::Point {
                    point: s1.start,
                    t1: F::zero(),
                    t2: s2.closest_point(s1.start).1,
                }
            } else {
                SegmentIntersection::None
            };
        }

        // Project s2 onto s1's parameter line and intersect with [0, 1]
        let ta = (s2.start - s1.start).dot(d1) / len_sq;
        let tb = (s2.end - s1.start).dot(d1) / len_sq;
        let lo = ta.min(tb).max(F::zero());
        let hi = ta.max(tb).min(F::one());

        if lo > hi + eps {
            return SegmentIntersection::None;
        }
        if (hi - lo).abs() <= eps {
            let point = s1.point_at(lo);
            return SegmentIntersection::Point {
                point,
                t1: lo,
                t2: s2.closest_point(point).1,
            };
        }
        return SegmentIntersection::Overlapping {
            start: s1.point_at(lo),
            end: s1.point_at(hi),
        };
    }

    // s1.start + t1 * d1 = s2.start + t2 * d2 (Cramer's rule)
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    let lo = -eps;
    let hi = F::one() + eps;
    if t1 < lo || t1 > hi || t2 < lo || t2 > hi {
        return SegmentIntersection::None;
    }

    let t1 = t1.max(F::zero()).min(F::one());
    SegmentIntersection::Point {
        point: s1.point_at(t1),
        t1,
        t2: t2.max(F::zero()).min(F::one()),
    }
}

/// Intersection of the infinite lines through `s1` and `s2`.
///
/// Returns `None` when the lines are parallel within `eps` (including
/// coincident lines).
pub fn line_intersection<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> Option<Point2<F>> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);
    if cross.abs() <= eps {
        return None;
    }
    let t = (s2.start - s1.start).cross(d2) / cross;
    Some(s1.point_at(t))
}
