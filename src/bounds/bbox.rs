//! Axis-aligned bounding box used as the clip region for Voronoi cells.

use crate::error::{Result, VoronoiError};
use crate::polygon::Polygon;
use crate::primitives::{HalfPlane2, Point2, Vec2};
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned rectangle `(xmin, ymin) - (xmax, ymax)`.
///
/// Unbounded Voronoi cells are cut down to this box, so it must strictly
/// contain every site for the diagram to be meaningful; see [`validate_for`].
///
/// [`validate_for`]: BoundingBox::validate_for
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> BoundingBox<F> {
    /// Creates a box from its min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates a box from `(xmin, ymin, xmax, ymax)`.
    #[inline]
    pub fn from_coords(xmin: F, ymin: F, xmax: F, ymax: F) -> Self {
        Self::new(Point2::new(xmin, ymin), Point2::new(xmax, ymax))
    }

    /// Tightest box around the points, or `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox = bbox.expand_to_include(p);
        }
        Some(bbox)
    }

    /// Extent of the points grown by `margin_ratio` of its larger side.
    ///
    /// When all points coincide the larger side is taken as 1 so the box
    /// still has area. Returns `None` for an empty input.
    ///
    /// # Example
    ///
    /// ```
    /// use voronum::bounds::BoundingBox;
    /// use voronum::Point2;
    ///
    /// let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(10.0, 5.0)];
    /// let bbox = BoundingBox::around_points(&points, 0.1).unwrap();
    ///
    /// assert_eq!(bbox, BoundingBox::from_coords(-1.0, -1.0, 11.0, 6.0));
    /// ```
    pub fn around_points(points: &[Point2<F>], margin_ratio: F) -> Option<Self> {
        let extent = Self::from_points(points.iter().copied())?;
        let mut span = extent.width().max(extent.height());
        if span <= F::zero() {
            span = F::one();
        }
        Some(extent.expanded(span * margin_ratio))
    }

    /// Returns the box grown by `margin` on every side.
    #[inline]
    pub fn expanded(self, margin: F) -> Self {
        let m = Vec2::new(margin, margin);
        Self::new(self.min - m, self.max + m)
    }

    /// Returns a new box expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns the width of the box.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the box.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the center point of the box.
    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Length of the box diagonal.
    #[inline]
    pub fn diagonal(self) -> F {
        self.min.distance(self.max)
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(self) -> F {
        self.width() * self.height()
    }

    /// Returns `true` if the box contains `p`, boundary included, within `eps`.
    #[inline]
    pub fn contains_point(self, p: Point2<F>, eps: F) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }

    /// Returns `true` if `p` is inside the box by more than `eps` on every side.
    #[inline]
    pub fn strictly_contains(self, p: Point2<F>, eps: F) -> bool {
        p.x > self.min.x + eps
            && p.x < self.max.x - eps
            && p.y > self.min.y + eps
            && p.y < self.max.y - eps
    }

    /// The four corners in counter-clockwise order, starting at `min`.
    pub fn corners(self) -> [Point2<F>; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// The box as a counter-clockwise polygon.
    pub fn to_polygon(self) -> Polygon<F> {
        Polygon::new(self.corners().to_vec())
    }

    /// The box as the intersection of four half-planes (left, right, bottom, top).
    pub fn half_planes(self) -> [HalfPlane2<F>; 4] {
        let one = F::one();
        let zero = F::zero();
        [
            HalfPlane2 {
                normal: Vec2::new(-one, zero),
                offset: -self.min.x,
            },
            HalfPlane2 {
                normal: Vec2::new(one, zero),
                offset: self.max.x,
            },
            HalfPlane2 {
                normal: Vec2::new(zero, -one),
                offset: -self.min.y,
            },
            HalfPlane2 {
                normal: Vec2::new(zero, one),
                offset: self.max.y,
            },
        ]
    }

    /// Checks that the box is finite, has positive area, and strictly
    /// contains every site.
    ///
    /// # Errors
    ///
    /// [`VoronoiError::InvalidBoundingBox`] naming the first offending site.
    pub fn validate_for(self, sites: &[Point2<F>], eps: F) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(VoronoiError::InvalidBoundingBox {
                reason: "non-finite corner".to_string(),
            });
        }
        if self.width() <= eps || self.height() <= eps {
            let (w, h) = Point2::new(self.width(), self.height()).to_f64_pair();
            return Err(VoronoiError::InvalidBoundingBox {
                reason: format!("empty or inverted box ({w} x {h})"),
            });
        }
        if let Some((index, site)) = sites
            .iter()
            .enumerate()
            .find(|(_, s)| !self.strictly_contains(**s, eps))
        {
            let (x, y) = site.to_f64_pair();
            return Err(VoronoiError::InvalidBoundingBox {
                reason: format!("site {index} at ({x}, {y}) is not strictly inside the box"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points(vec![
            Point2::new(1.0_f64, 5.0),
            Point2::new(-2.0, 3.0),
            Point2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(bbox, BoundingBox::from_coords(-2.0, -1.0, 4.0, 5.0));
        assert!(BoundingBox::<f64>::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_around_points_uses_larger_side() {
        let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(2.0, 1.0)];
        let bbox = BoundingBox::around_points(&points, 0.5).unwrap();
        assert_eq!(bbox, BoundingBox::from_coords(-1.0, -1.0, 3.0, 2.0));
    }

    #[test]
    fn test_around_single_point() {
        let points = vec![Point2::new(3.0_f64, 3.0)];
        let bbox = BoundingBox::around_points(&points, 0.1).unwrap();
        assert_relative_eq!(bbox.width(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(bbox.center().x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_measurements() {
        let bbox = BoundingBox::from_coords(0.0_f64, 0.0, 3.0, 4.0);
        assert_eq!(bbox.width(), 3.0);
        assert_eq!(bbox.height(), 4.0);
        assert_eq!(bbox.area(), 12.0);
        assert_eq!(bbox.diagonal(), 5.0);
        assert_eq!(bbox.center(), Point2::new(1.5, 2.0));
    }

    #[test]
    fn test_contains_vs_strictly_contains() {
        let bbox = BoundingBox::from_coords(0.0_f64, 0.0, 1.0, 1.0);
        let edge = Point2::new(0.0, 0.5);
        assert!(bbox.contains_point(edge, 0.0));
        assert!(!bbox.strictly_contains(edge, 0.0));
        assert!(bbox.strictly_contains(Point2::new(0.5, 0.5), 1e-10));
        assert!(!bbox.contains_point(Point2::new(1.5, 0.5), 1e-10));
    }

    #[test]
    fn test_corners_are_ccw() {
        let bbox = BoundingBox::from_coords(0.0_f64, 0.0, 2.0, 1.0);
        let polygon = bbox.to_polygon();
        assert_relative_eq!(polygon.signed_area(), 2.0);
    }

    #[test]
    fn test_half_planes_match_box() {
        let bbox = BoundingBox::from_coords(-1.0_f64, -2.0, 3.0, 4.0);
        let planes = bbox.half_planes();
        let inside = Point2::new(0.0, 0.0);
        let outside = Point2::new(3.5, 0.0);
        assert!(planes.iter().all(|h| h.contains(inside, 0.0)));
        assert!(!planes.iter().all(|h| h.contains(outside, 0.0)));
        for corner in bbox.corners() {
            assert!(planes.iter().all(|h| h.contains(corner, 1e-12)));
        }
    }

    #[test]
    fn test_validate_for() {
        let bbox = BoundingBox::from_coords(0.0_f64, 0.0, 10.0, 10.0);
        let sites = vec![Point2::new(1.0, 1.0), Point2::new(9.0, 9.0)];
        assert!(bbox.validate_for(&sites, 1e-10).is_ok());

        let outside = vec![Point2::new(1.0, 1.0), Point2::new(10.0, 5.0)];
        assert!(matches!(
            bbox.validate_for(&outside, 1e-10),
            Err(VoronoiError::InvalidBoundingBox { .. })
        ));

        let inverted = BoundingBox::from_coords(10.0_f64, 0.0, 0.0, 10.0);
        assert!(inverted.validate_for(&[], 1e-10).is_err());
    }
}
