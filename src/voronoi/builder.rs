//! Cell construction from a Delaunay mesh.
//!
//! Two strategies produce the same bounded cell for every site:
//!
//! - [`CellStrategy::HalfPlane`] starts from the bounding box and clips it
//!   with the perpendicular bisector of the site and each Delaunay neighbor.
//! - [`CellStrategy::CircumcenterDual`] walks the circumcenters of the
//!   triangles around the site. Cells of hull sites are unbounded, so they
//!   are closed with points pushed far out along the two outward Voronoi
//!   rays before clipping to the box.

use super::diagram::{CellStrategy, VoronoiCell, VoronoiDiagram};
use crate::bounds::BoundingBox;
use crate::config::VoronoiConfig;
use crate::error::{Result, VoronoiError};
use crate::polygon::{clip_polygon, clip_to_box, Polygon};
use crate::primitives::{HalfPlane2, Point2, Segment2, Vec2};
use crate::tolerance::dedup_ring;
use crate::triangulation::{triangulate, Adjacency, HullEdge, Mesh};
use num_traits::Float;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds the Voronoi diagram of a mesh, clipped to `bbox`.
///
/// Cells are returned in site order. With the `parallel` feature, cells are
/// computed concurrently with identical results.
///
/// # Errors
///
/// - [`VoronoiError::InvalidBoundingBox`] if `bbox` is malformed or does not
///   strictly contain every site, or a cell collapses after clipping
/// - [`VoronoiError::OrphanSite`] if a site has no incident triangle or
///   neighbor
///
/// # Example
///
/// ```
/// use voronum::bounds::BoundingBox;
/// use voronum::triangulation::triangulate;
/// use voronum::voronoi::{build_voronoi, CellStrategy};
/// use voronum::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
/// ];
/// let mesh = triangulate(&points, 1e-10).unwrap();
/// let bbox = BoundingBox::from_coords(-1.0, -1.0, 2.0, 2.0);
///
/// let diagram = build_voronoi(&mesh, bbox, CellStrategy::HalfPlane, 1e-10).unwrap();
///
/// // Three cells tile the box
/// assert_eq!(diagram.len(), 3);
/// assert!((diagram.total_area() - 9.0).abs() < 1e-9);
/// ```
pub fn build_voronoi<F>(
    mesh: &Mesh<F>,
    bbox: BoundingBox<F>,
    strategy: CellStrategy,
    eps: F,
) -> Result<VoronoiDiagram<F>>
where
    F: Float + Send + Sync,
{
    let sites = mesh.sites();
    bbox.validate_for(sites, eps)?;

    let _span = tracing::debug_span!("build_voronoi", %strategy, sites = sites.len()).entered();

    let adjacency = mesh.adjacency();
    let builder = CellBuilder {
        mesh,
        adjacency: &adjacency,
        bbox,
        eps,
    };
    let build = |site: usize| builder.cell(site, strategy);

    #[cfg(feature = "parallel")]
    let cells: Result<Vec<VoronoiCell<F>>> =
        (0..sites.len()).into_par_iter().map(build).collect();
    #[cfg(not(feature = "parallel"))]
    let cells: Result<Vec<VoronoiCell<F>>> = (0..sites.len()).map(build).collect();
    let cells = cells?;

    tracing::debug!(cells = cells.len(), "voronoi diagram built");

    Ok(VoronoiDiagram::new(cells, mesh.clone(), bbox, strategy))
}

/// Triangulates `points` and builds their Voronoi diagram in one step.
///
/// The bounding box is the configured one, or the input extent grown by
/// the configured margin.
///
/// # Errors
///
/// Any error of [`VoronoiConfig::validate`], [`triangulate`] or
/// [`build_voronoi`].
///
/// # Example
///
/// ```
/// use voronum::{compute_voronoi, Point2, VoronoiConfig};
///
/// let mut points: Vec<Point2<f64>> = Vec::new();
/// for i in 0..3 {
///     for j in 0..3 {
///         points.push(Point2::new(i as f64, j as f64));
///     }
/// }
///
/// let diagram = compute_voronoi(&points, &VoronoiConfig::default()).unwrap();
///
/// // The center site owns the unit square around it
/// let center = diagram.cell_of_input(4).unwrap();
/// assert!((center.area() - 1.0).abs() < 1e-9);
/// ```
pub fn compute_voronoi<F>(
    points: &[Point2<F>],
    config: &VoronoiConfig<F>,
) -> Result<VoronoiDiagram<F>>
where
    F: Float + Send + Sync,
{
    config.validate()?;
    let mesh = triangulate(points, config.epsilon)?;
    let bbox = config.bounding_box_for(mesh.sites())?;
    build_voronoi(&mesh, bbox, config.strategy, config.epsilon)
}

struct CellBuilder<'a, F> {
    mesh: &'a Mesh<F>,
    adjacency: &'a Adjacency,
    bbox: BoundingBox<F>,
    eps: F,
}

impl<F: Float> CellBuilder<'_, F> {
    fn cell(&self, site: usize, strategy: CellStrategy) -> Result<VoronoiCell<F>> {
        let polygon = match strategy {
            CellStrategy::HalfPlane => self.half_plane_cell(site)?,
            CellStrategy::CircumcenterDual => self.dual_cell(site)?,
        };

        // A sliver no wider than eps across the whole box counts as empty
        if polygon.len() < 3 || polygon.area() <= self.eps * self.bbox.diagonal() {
            let (x, y) = self.mesh.sites()[site].to_f64_pair();
            return Err(VoronoiError::InvalidBoundingBox {
                reason: format!("cell of site {site} at ({x}, {y}) is empty after clipping"),
            });
        }

        tracing::trace!(site, vertices = polygon.len(), "built cell");
        Ok(VoronoiCell {
            site,
            point: self.mesh.sites()[site],
            polygon,
        })
    }

    fn orphan(&self, site: usize) -> VoronoiError {
        let (x, y) = self.mesh.sites()[site].to_f64_pair();
        VoronoiError::OrphanSite { site, x, y }
    }

    /// The box cut by the bisector against every Delaunay neighbor.
    fn half_plane_cell(&self, site: usize) -> Result<Polygon<F>> {
        let neighbors = self.adjacency.neighbors(site);
        if neighbors.is_empty() {
            return Err(self.orphan(site));
        }

        let sites = self.mesh.sites();
        let p = sites[site];
        let half_planes: Vec<HalfPlane2<F>> = neighbors
            .iter()
            .filter_map(|&other| HalfPlane2::bisector(p, sites[other]))
            .collect();

        Ok(clip_polygon(&self.bbox.to_polygon(), half_planes.iter(), self.eps))
    }

    /// Circumcenters of the incident triangles, sorted around the site and
    /// clipped to the box.
    fn dual_cell(&self, site: usize) -> Result<Polygon<F>> {
        let incident = self.adjacency.incident_triangles(site);
        if incident.is_empty() {
            return Err(self.orphan(site));
        }

        let triangles = self.mesh.triangles();
        let p = self.mesh.sites()[site];

        let mut points: Vec<Point2<F>> = Vec::with_capacity(incident.len() + 3);
        for &t in incident {
            let center = triangles[t].circumcenter();
            if !points.iter().any(|q| q.approx_eq(center, self.eps)) {
                points.push(center);
            }
        }

        if let Some((incoming, outgoing)) = self.adjacency.hull_edges_at(site) {
            let far = self.far_points(p, &points, incoming, outgoing);
            points.extend(far);
        }

        let ring = Polygon::sorted_around(points, p);
        let clipped = clip_to_box(&ring, &self.bbox, self.eps);
        Ok(Polygon::new(dedup_ring(&clipped.vertices, self.eps)))
    }

    /// Points that close the unbounded cell of a hull site beyond the box.
    ///
    /// One point on each outward Voronoi ray (starting at the circumcenter of
    /// the hull edge's triangle) and one along the bisecting direction from
    /// the site. Every point lies at least `reach` past the box center
    /// along its direction, which keeps the closing edges outside the box.
    fn far_points(
        &self,
        site: Point2<F>,
        centers: &[Point2<F>],
        incoming: HullEdge,
        outgoing: HullEdge,
    ) -> Vec<Point2<F>> {
        let sites = self.mesh.sites();
        let triangles = self.mesh.triangles();
        let origin = self.bbox.center();

        let four = F::one() + F::one() + F::one() + F::one();
        let farthest = centers
            .iter()
            .chain(std::iter::once(&site))
            .fold(F::zero(), |acc, q| acc.max(q.distance(origin)));
        let reach = four * (self.bbox.diagonal() + farthest);

        let push = |from: Point2<F>, direction: Vec2<F>| {
            from + direction * (from.distance(origin) + reach)
        };

        let mut far = Vec::with_capacity(3);
        let mut directions = Vec::with_capacity(2);
        for edge in [incoming, outgoing] {
            let segment = Segment2::new(sites[edge.from], sites[edge.to]);
            if let Some(normal) = segment.right_normal() {
                far.push(push(triangles[edge.triangle].circumcenter(), normal));
                directions.push(normal);
            }
        }
        if let [a, b] = directions.as_slice() {
            if let Some(bisecting) = (*a + *b).normalize() {
                far.push(push(site, bisecting));
            }
        }
        far
    }
}
