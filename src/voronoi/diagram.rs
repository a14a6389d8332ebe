//! Voronoi cells and the diagram that collects them.

use crate::bounds::BoundingBox;
use crate::polygon::Polygon;
use crate::primitives::Point2;
use crate::triangulation::{Mesh, Triangle};
use num_traits::Float;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a cell polygon is constructed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStrategy {
    /// Intersect the bounding box with the bisector half-plane of the site
    /// against each Delaunay neighbor.
    #[default]
    HalfPlane,
    /// Sort the circumcenters of the incident triangles around the site and
    /// clip the result to the bounding box.
    CircumcenterDual,
}

impl CellStrategy {
    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            CellStrategy::HalfPlane => "half-plane",
            CellStrategy::CircumcenterDual => "circumcenter-dual",
        }
    }
}

impl fmt::Display for CellStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Voronoi cell of one site, clipped to the bounding box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiCell<F> {
    /// Index of the site in the mesh.
    pub site: usize,
    /// The site itself.
    pub point: Point2<F>,
    /// Convex, counter-clockwise boundary without repeated vertices.
    pub polygon: Polygon<F>,
}

impl<F: Float> VoronoiCell<F> {
    /// Cell vertices, counter-clockwise.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.polygon.vertices
    }

    /// Area of the clipped cell.
    #[inline]
    pub fn area(&self) -> F {
        self.polygon.area()
    }
}

/// A Voronoi diagram bounded by a box.
///
/// Holds one cell per mesh site, in site order, together with the mesh it
/// was built from so the triangulation and raw circumcenters remain
/// available for inspection.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct VoronoiDiagram<F> {
    cells: Vec<VoronoiCell<F>>,
    mesh: Mesh<F>,
    bounding_box: BoundingBox<F>,
    strategy: CellStrategy,
}

impl<F: Float> VoronoiDiagram<F> {
    pub(crate) fn new(
        cells: Vec<VoronoiCell<F>>,
        mesh: Mesh<F>,
        bounding_box: BoundingBox<F>,
        strategy: CellStrategy,
    ) -> Self {
        Self {
            cells,
            mesh,
            bounding_box,
            strategy,
        }
    }

    /// All cells, indexed by site.
    #[inline]
    pub fn cells(&self) -> &[VoronoiCell<F>] {
        &self.cells
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the diagram has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell of site `site`.
    #[inline]
    pub fn cell(&self, site: usize) -> Option<&VoronoiCell<F>> {
        self.cells.get(site)
    }

    /// The cell that input point `input` ended up in after deduplication.
    pub fn cell_of_input(&self, input: usize) -> Option<&VoronoiCell<F>> {
        self.cell(self.mesh.site_of_input(input)?)
    }

    /// The cell containing `point`: the cell of the nearest site.
    ///
    /// Returns `None` if `point` is outside the bounding box by more than
    /// `eps`. Equidistant sites resolve to the lower index.
    pub fn cell_at(&self, point: Point2<F>, eps: F) -> Option<&VoronoiCell<F>> {
        if !self.bounding_box.contains_point(point, eps) {
            return None;
        }
        self.cells.iter().fold(None, |best: Option<&VoronoiCell<F>>, cell| {
            match best {
                Some(b) if b.point.distance_squared(point) <= cell.point.distance_squared(point) => {
                    Some(b)
                }
                _ => Some(cell),
            }
        })
    }

    /// Sum of the cell areas. Equals the box area up to rounding when the
    /// cells tile the box.
    pub fn total_area(&self) -> F {
        self.cells
            .iter()
            .fold(F::zero(), |acc, cell| acc + cell.area())
    }

    /// The mesh the diagram was built from.
    #[inline]
    pub fn mesh(&self) -> &Mesh<F> {
        &self.mesh
    }

    /// The Delaunay triangles, for overlay rendering.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        self.mesh.triangles()
    }

    /// Unclipped circumcenters of the Delaunay triangles.
    pub fn circumcenters(&self) -> Vec<Point2<F>> {
        self.mesh.circumcenters()
    }

    /// The box every cell was clipped to.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox<F> {
        self.bounding_box
    }

    /// The strategy that built the cells.
    #[inline]
    pub fn strategy(&self) -> CellStrategy {
        self.strategy
    }
}
