//! Delaunay triangulation of point sets.
//!
//! [`triangulate`] turns a point cloud into a [`Mesh`]: deduplicated sites
//! plus counter-clockwise triangles with cached circumcircles. [`Adjacency`]
//! derives the per-site topology the Voronoi builder walks.

mod adjacency;
mod delaunay;
mod frame;
mod mesh;
mod triangle;

pub use adjacency::{Adjacency, HullEdge};
pub use delaunay::triangulate;
pub use mesh::{DelaunayViolation, Mesh};
pub use triangle::{Circumcircle, Edge, Triangle};
