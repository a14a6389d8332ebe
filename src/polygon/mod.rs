//! Convex polygons and half-plane clipping.
//!
//! This module provides:
//! - Area, centroid, convexity and simplicity checks
//! - Sutherland-Hodgman clipping against a single half-plane, a sequence of
//!   half-planes, a bounding box, or a convex polygon
//!
//! # Example
//!
//! ```
//! use voronum::bounds::BoundingBox;
//! use voronum::polygon::{clip_to_box, Polygon};
//! use voronum::Point2;
//!
//! let big = Polygon::new(vec![
//!     Point2::new(-5.0_f64, -5.0),
//!     Point2::new(5.0, -5.0),
//!     Point2::new(5.0, 5.0),
//!     Point2::new(-5.0, 5.0),
//! ]);
//! let bbox = BoundingBox::from_coords(0.0, 0.0, 1.0, 1.0);
//!
//! let clipped = clip_to_box(&big, &bbox, 1e-10);
//! assert!((clipped.area() - 1.0).abs() < 1e-12);
//! ```

mod clip;
mod core;

pub use clip::{clip_against_halfplane, clip_polygon, clip_to_box, sutherland_hodgman};
pub use core::{
    polygon_area, polygon_centroid, polygon_contains, polygon_is_convex, polygon_is_simple,
    polygon_signed_area, Polygon,
};
