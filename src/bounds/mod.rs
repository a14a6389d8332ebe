//! Bounding regions.

mod bbox;

pub use bbox::BoundingBox;
