//! Epsilon-aware geometric predicates: the geometry kernel.
//!
//! All functions in this module take explicit tolerance parameters.
//! No hidden epsilons are used; a pipeline run passes one value
//! (see [`crate::config::DEFAULT_EPSILON`]) to all of them.

mod predicates;
mod weld;

pub use predicates::{
    circumcenter, in_circumcircle, incircle, line_intersection, orient2d, orientation,
    point_on_segment, segments_intersect, Orientation, SegmentIntersection,
};
pub use weld::{dedup_points, dedup_ring};
