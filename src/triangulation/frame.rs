//! Translation and uniform scaling of a site set onto a unit extent.
//!
//! Orientation and in-circle determinants grow with the second and fourth
//! power of the coordinates, so comparing them against one fixed tolerance
//! only makes sense once the sites span a known size. Predicates run on
//! unit coordinates; results are mapped back before they leave the crate.

use crate::bounds::BoundingBox;
use crate::primitives::Point2;
use num_traits::Float;

/// Similarity transform taking the extent of a site set to a box whose
/// larger side is 1, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UnitFrame<F> {
    origin: Point2<F>,
    scale: F,
}

impl<F: Float> UnitFrame<F> {
    /// Frame for `sites`. The scale falls back to 1 when every site
    /// coincides; `None` for an empty slice.
    pub(crate) fn around(sites: &[Point2<F>]) -> Option<Self> {
        let extent = BoundingBox::from_points(sites.iter().copied())?;
        let span = extent.width().max(extent.height());
        let scale = if span > F::zero() && span.is_finite() {
            span
        } else {
            F::one()
        };
        Some(Self {
            origin: extent.center(),
            scale,
        })
    }

    /// Length of one unit in input coordinates.
    #[inline]
    pub(crate) fn scale(&self) -> F {
        self.scale
    }

    #[inline]
    pub(crate) fn to_unit(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            (p.x - self.origin.x) / self.scale,
            (p.y - self.origin.y) / self.scale,
        )
    }

    #[inline]
    pub(crate) fn from_unit(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.origin.x + p.x * self.scale,
            self.origin.y + p.y * self.scale,
        )
    }

    /// Every site in unit coordinates.
    pub(crate) fn to_unit_all(&self, sites: &[Point2<F>]) -> Vec<Point2<F>> {
        sites.iter().map(|&p| self.to_unit(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_extent() {
        let sites = vec![
            Point2::new(45.0_f64, 5.0),
            Point2::new(45.003, 5.0),
            Point2::new(45.0015, 5.001),
        ];
        let frame = UnitFrame::around(&sites).unwrap();
        let unit = frame.to_unit_all(&sites);

        let extent = BoundingBox::from_points(unit.iter().copied()).unwrap();
        assert_relative_eq!(extent.width(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(extent.center().x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(extent.center().y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(frame.scale(), 0.003, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let sites = vec![Point2::new(1e-4_f64, -2e-4), Point2::new(3e-4, 5e-4)];
        let frame = UnitFrame::around(&sites).unwrap();
        for &p in &sites {
            let back = frame.from_unit(frame.to_unit(p));
            assert_relative_eq!(back.x, p.x, epsilon = 1e-18);
            assert_relative_eq!(back.y, p.y, epsilon = 1e-18);
        }
    }

    #[test]
    fn test_coincident_sites_keep_unit_scale() {
        let sites = vec![Point2::new(2.0_f64, 3.0), Point2::new(2.0, 3.0)];
        let frame = UnitFrame::around(&sites).unwrap();
        assert_eq!(frame.scale(), 1.0);
        assert_eq!(frame.to_unit(sites[0]), Point2::origin());
        assert!(UnitFrame::<f64>::around(&[]).is_none());
    }
}
