//! Options for a full Voronoi run.

use crate::bounds::BoundingBox;
use crate::error::{Result, VoronoiError};
use crate::primitives::Point2;
use crate::voronoi::CellStrategy;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default tolerance shared by every predicate of a run.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Default margin of an automatic bounding box, as a fraction of the larger
/// side of the input extent.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.10;

/// Options for [`compute_voronoi`](crate::compute_voronoi).
///
/// # Example
///
/// ```
/// use voronum::{CellStrategy, VoronoiConfig};
///
/// let config: VoronoiConfig<f64> = VoronoiConfig::default()
///     .with_margin_ratio(0.25)
///     .with_strategy(CellStrategy::CircumcenterDual);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.epsilon, 1e-10);
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: VoronoiConfig<f64> = serde_json::from_str(&json).unwrap();
/// assert_eq!(restored, config);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoronoiConfig<F> {
    /// Tolerance for every predicate: deduplication, orientation,
    /// in-circle, half-plane containment and vertex merging.
    pub epsilon: F,
    /// Margin of the automatic bounding box, relative to the larger side of
    /// the input extent. Ignored when `bounding_box` is set.
    pub margin_ratio: F,
    /// Explicit clipping box. Must strictly contain every site.
    pub bounding_box: Option<BoundingBox<F>>,
    /// How each cell polygon is built.
    pub strategy: CellStrategy,
}

impl<F: Float> Default for VoronoiConfig<F> {
    fn default() -> Self {
        Self {
            epsilon: F::from(DEFAULT_EPSILON).unwrap_or_else(F::epsilon),
            margin_ratio: F::from(DEFAULT_MARGIN_RATIO).unwrap_or_else(F::zero),
            bounding_box: None,
            strategy: CellStrategy::default(),
        }
    }
}

impl<F: Float> VoronoiConfig<F> {
    /// Sets the tolerance.
    pub fn with_epsilon(mut self, epsilon: F) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the automatic bounding box margin.
    pub fn with_margin_ratio(mut self, margin_ratio: F) -> Self {
        self.margin_ratio = margin_ratio;
        self
    }

    /// Clips cells to `bbox` instead of an automatic box.
    pub fn with_bounding_box(mut self, bbox: BoundingBox<F>) -> Self {
        self.bounding_box = Some(bbox);
        self
    }

    /// Sets the cell construction strategy.
    pub fn with_strategy(mut self, strategy: CellStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// [`VoronoiError::InvalidConfig`] for a non-positive or non-finite
    /// epsilon, a negative or non-finite margin ratio, or a zero margin
    /// ratio without an explicit box (the automatic box would put the
    /// outermost sites on its boundary).
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= F::zero() {
            return Err(VoronoiError::InvalidConfig {
                reason: format!(
                    "epsilon must be positive and finite, got {}",
                    self.epsilon.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        if !self.margin_ratio.is_finite() || self.margin_ratio < F::zero() {
            return Err(VoronoiError::InvalidConfig {
                reason: format!(
                    "margin ratio must be non-negative and finite, got {}",
                    self.margin_ratio.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        if self.bounding_box.is_none() && self.margin_ratio <= F::zero() {
            return Err(VoronoiError::InvalidConfig {
                reason: "margin ratio must be positive when the bounding box is automatic"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// The explicit box if one is set, otherwise the extent of `sites`
    /// grown by the margin ratio.
    ///
    /// # Errors
    ///
    /// [`VoronoiError::InvalidBoundingBox`] if there are no sites to bound.
    pub fn bounding_box_for(&self, sites: &[Point2<F>]) -> Result<BoundingBox<F>> {
        match self.bounding_box {
            Some(bbox) => Ok(bbox),
            None => BoundingBox::around_points(sites, self.margin_ratio).ok_or_else(|| {
                VoronoiError::InvalidBoundingBox {
                    reason: "no sites to bound".to_string(),
                }
            }),
        }
    }
}
