//! voronum - Bounded planar Voronoi diagrams
//!
//! Triangulates a point cloud with incremental Bowyer-Watson, then derives
//! one convex cell per site, clipped to a bounding box. Every predicate of a
//! run shares a single tolerance, so near-duplicate points, collinear triples
//! and cocircular quadruples are resolved consistently.
//!
//! # Example
//!
//! ```
//! use voronum::{compute_voronoi, Point2, VoronoiConfig};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(2.0, 3.0),
//!     Point2::new(2.0, 1.0),
//! ];
//!
//! let diagram = compute_voronoi(&points, &VoronoiConfig::default()).unwrap();
//!
//! assert_eq!(diagram.cells().len(), 4);
//! let box_area = diagram.bounding_box().area();
//! assert!((diagram.total_area() - box_area).abs() < 1e-9);
//! ```

pub mod bounds;
pub mod config;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;
pub mod voronoi;

pub use bounds::BoundingBox;
pub use config::{VoronoiConfig, DEFAULT_EPSILON, DEFAULT_MARGIN_RATIO};
pub use error::{Result, VoronoiError};
pub use polygon::{clip_against_halfplane, clip_polygon, Polygon};
pub use primitives::{HalfPlane2, Point2, Segment2, Vec2};
pub use tolerance::{
    circumcenter, in_circumcircle, orient2d, point_on_segment, segments_intersect, Orientation,
    SegmentIntersection,
};
pub use triangulation::{triangulate, Mesh, Triangle};
pub use voronoi::{build_voronoi, compute_voronoi, CellStrategy, VoronoiCell, VoronoiDiagram};
