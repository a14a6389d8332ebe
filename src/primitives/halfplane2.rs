//! Closed half-plane in 2D.

use super::{Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed half-plane `{ p : normal · p <= offset }`.
///
/// The normal always has unit length, so `signed_distance` is a true
/// Euclidean distance and a single tolerance means the same thing for
/// every half-plane regardless of how it was built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane2<F> {
    /// Outward unit normal of the boundary line.
    pub normal: Vec2<F>,
    /// Signed distance of the boundary line from the origin along `normal`.
    pub offset: F,
}

impl<F: Float> HalfPlane2<F> {
    /// Creates a half-plane from an outward normal and a point on its boundary.
    ///
    /// Returns `None` if the normal is (near) zero.
    pub fn new(normal: Vec2<F>, through: Point2<F>) -> Option<Self> {
        let normal = normal.normalize()?;
        Some(Self {
            normal,
            offset: normal.dot(through.to_vec()),
        })
    }

    /// Half-plane on the left of the directed line `a -> b` (boundary included).
    ///
    /// Walking a counter-clockwise convex polygon, the left side of every
    /// edge is the interior.
    pub fn left_of(a: Point2<F>, b: Point2<F>) -> Option<Self> {
        Self::new((b - a).perpendicular_cw(), a)
    }

    /// Points at least as close to `site` as to `other`.
    ///
    /// The boundary is the perpendicular bisector of the two points; the
    /// half-plane always contains `site`. Returns `None` when the points
    /// coincide.
    pub fn bisector(site: Point2<F>, other: Point2<F>) -> Option<Self> {
        Self::new(other - site, site.midpoint(other))
    }

    /// Signed distance from the boundary; negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, p: Point2<F>) -> F {
        self.normal.dot(p.to_vec()) - self.offset
    }

    /// Returns `true` if `p` is inside or within `eps` of the boundary.
    #[inline]
    pub fn contains(&self, p: Point2<F>, eps: F) -> bool {
        self.signed_distance(p) <= eps
    }

    /// Point where segment `s -> e` crosses the boundary line.
    ///
    /// Returns `None` if the segment is parallel to the boundary.
    pub fn crossing(&self, s: Point2<F>, e: Point2<F>) -> Option<Point2<F>> {
        let ds = self.signed_distance(s);
        let de = self.signed_distance(e);
        let denom = ds - de;
        if denom.abs() <= F::epsilon() {
            return None;
        }
        Some(s.lerp(e, ds / denom))
    }

    /// The same boundary with the opposite side selected.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}
