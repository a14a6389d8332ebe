//! Error types for triangulation and Voronoi construction.

use thiserror::Error;

/// Errors that can occur while building a Delaunay mesh or a Voronoi diagram.
///
/// Every variant carries enough context (a site index or a description of
/// the offending coordinates) to diagnose the input. None of them is ever
/// downgraded to an empty result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoronoiError {
    /// Fewer than three distinct sites remain after deduplication.
    #[error("insufficient points: need at least 3 distinct sites, found {found}")]
    InsufficientPoints {
        /// Number of distinct sites found.
        found: usize,
    },

    /// The input admits no 2D triangulation, or a circumcenter is undefined.
    #[error("degenerate input: {reason}")]
    DegenerateInput {
        /// What made the input degenerate.
        reason: String,
    },

    /// A site has no incident triangle in the mesh.
    #[error("orphan site {site} at ({x}, {y}): no incident triangles")]
    OrphanSite {
        /// Index of the site in the mesh.
        site: usize,
        /// Site x coordinate.
        x: f64,
        /// Site y coordinate.
        y: f64,
    },

    /// The bounding box is malformed or does not contain every site.
    #[error("invalid bounding box: {reason}")]
    InvalidBoundingBox {
        /// Why the box was rejected.
        reason: String,
    },

    /// An input coordinate is NaN or infinite.
    #[error("non-finite coordinate in input point {index}")]
    NonFiniteCoordinate {
        /// Index of the offending point in the caller's input.
        index: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which value was rejected.
        reason: String,
    },
}

/// Result type alias for triangulation and Voronoi operations.
pub type Result<T> = std::result::Result<T, VoronoiError>;
