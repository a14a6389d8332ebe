//! Bounded Voronoi diagrams built from a Delaunay mesh.
//!
//! A Voronoi diagram partitions the plane into cells, where each cell contains
//! all points closer to its generating site than to any other site. Cells of
//! sites on the convex hull are unbounded, so every cell is clipped to a
//! bounding box.
//!
//! # Example
//!
//! ```
//! use voronum::voronoi::CellStrategy;
//! use voronum::{compute_voronoi, Point2, VoronoiConfig};
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//! ];
//!
//! let config = VoronoiConfig::default().with_strategy(CellStrategy::CircumcenterDual);
//! let voronoi = compute_voronoi(&sites, &config).unwrap();
//!
//! // One triangle means one Voronoi vertex (the circumcenter)
//! assert_eq!(voronoi.circumcenters().len(), 1);
//!
//! // Three sites means three cells
//! assert_eq!(voronoi.cells().len(), 3);
//! ```

mod builder;
mod diagram;

pub use builder::{build_voronoi, compute_voronoi};
pub use diagram::{CellStrategy, VoronoiCell, VoronoiDiagram};
