//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a super-triangle containing all points
//! 2. Insert points one at a time: remove every triangle whose circumcircle
//!    contains the point, then connect the point to the boundary of the hole
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Triangles live in an arena with an edge index, so the hole boundary is
//! found by looking up the triangle across each edge instead of counting
//! edges in a hash map.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use voronum::triangulation::triangulate;
//! use voronum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let mesh = triangulate(&points, 1e-10).unwrap();
//!
//! // Interior point splits the hull triangle in three
//! assert_eq!(mesh.triangles().len(), 3);
//!
//! for tri in mesh.triangles() {
//!     assert!(tri.a < mesh.sites().len());
//!     assert!(tri.b < mesh.sites().len());
//!     assert!(tri.c < mesh.sites().len());
//! }
//! ```

use super::adjacency::Adjacency;
use super::frame::UnitFrame;
use super::mesh::Mesh;
use super::triangle::{Edge, Triangle};
use crate::bounds::BoundingBox;
use crate::error::{Result, VoronoiError};
use crate::primitives::Point2;
use crate::tolerance::{dedup_points, in_circumcircle, orient2d, Orientation};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Distance of the super-triangle vertices from the center of the input, in
/// units of the input's larger extent.
const SUPER_TRIANGLE_SCALE: f64 = 1.0e4;

/// Angle of the first super-triangle vertex, in radians. Keeps the super
/// vertices off the axis-aligned lines that grid inputs occupy.
const SUPER_TRIANGLE_PHASE: f64 = 0.4;

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses the Bowyer-Watson incremental insertion algorithm.
///
/// # Arguments
///
/// * `points` - The points to triangulate
/// * `eps` - Tolerance shared by every predicate of the run
///
/// # Returns
///
/// A [`Mesh`] over the deduplicated sites. Points closer than `eps` to an
/// earlier point collapse onto it; [`Mesh::site_of_input`] maps each input
/// index to its site. Triangles are in counter-clockwise orientation.
///
/// # Errors
///
/// - [`VoronoiError::NonFiniteCoordinate`] if any coordinate is NaN or infinite
/// - [`VoronoiError::InsufficientPoints`] if fewer than 3 distinct sites remain
/// - [`VoronoiError::DegenerateInput`] if all sites are collinear, if a
///   new triangle would have no circumcenter, or if the finished triangles
///   leave a site uncovered
///
/// Orientation and in-circle tests run on the sites translated and scaled
/// so their larger extent is 1, so `eps` is relative to the input size for
/// those predicates. Deduplication compares input coordinates directly.
///
/// # Example
///
/// ```
/// use voronum::triangulation::triangulate;
/// use voronum::Point2;
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let mesh = triangulate(&points, 1e-10).unwrap();
///
/// // Square with center point should produce 4 triangles
/// assert_eq!(mesh.triangles().len(), 4);
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>], eps: F) -> Result<Mesh<F>> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(VoronoiError::NonFiniteCoordinate { index });
    }

    let (sites, input_to_site) = dedup_points(points, eps);
    let n = sites.len();

    tracing::debug!(
        inputs = points.len(),
        sites = n,
        "starting Delaunay triangulation"
    );
    if n < points.len() {
        tracing::warn!(
            dropped = points.len() - n,
            "merged input points closer than epsilon"
        );
    }

    if n < 3 {
        return Err(VoronoiError::InsufficientPoints { found: n });
    }

    // Predicates run on a unit-size copy so `eps` means the same thing at
    // every input scale; the mesh keeps the input coordinates.
    let frame =
        UnitFrame::around(&sites).ok_or(VoronoiError::InsufficientPoints { found: n })?;
    let unit = frame.to_unit_all(&sites);

    if all_collinear(&unit, eps) {
        return Err(VoronoiError::DegenerateInput {
            reason: format!("all {n} sites are collinear"),
        });
    }

    let mut arena = Arena::new(&unit, eps)?;
    for index in 0..n {
        arena.insert(index)?;
    }

    let triangles: Vec<Triangle<F>> = arena
        .into_triangles(n)
        .into_iter()
        .map(|tri| tri.from_unit(&frame))
        .collect();
    check_complete(&triangles, &sites, &unit, eps)?;

    tracing::debug!(triangles = triangles.len(), "triangulation complete");

    Ok(Mesh::new(sites, input_to_site, triangles))
}

/// Rejects a triangle set that does not tile the convex hull of the sites.
///
/// Every site must be a vertex, no site may lie outside a boundary edge,
/// and a single disk with `h` boundary edges has exactly `2n - h - 2`
/// triangles. `unit` holds the sites in unit coordinates for the
/// orientation test; `sites` is only used to report coordinates.
fn check_complete<F: Float>(
    triangles: &[Triangle<F>],
    sites: &[Point2<F>],
    unit: &[Point2<F>],
    eps: F,
) -> Result<()> {
    let n = sites.len();
    if triangles.is_empty() {
        return Err(VoronoiError::DegenerateInput {
            reason: format!("no triangle connects the {n} sites"),
        });
    }

    let adjacency = Adjacency::new(triangles, n);
    if let Some(site) = (0..n).find(|&s| adjacency.incident_triangles(s).is_empty()) {
        let (x, y) = sites[site].to_f64_pair();
        return Err(VoronoiError::DegenerateInput {
            reason: format!("site {site} at ({x}, {y}) is not a vertex of any triangle"),
        });
    }

    for edge in adjacency.hull_edges() {
        let (a, b) = (unit[edge.from], unit[edge.to]);
        let outside = (0..n).find(|&s| orient2d(a, b, unit[s], eps) == Orientation::Clockwise);
        if let Some(site) = outside {
            let (x, y) = sites[site].to_f64_pair();
            return Err(VoronoiError::DegenerateInput {
                reason: format!(
                    "site {site} at ({x}, {y}) lies outside boundary edge ({}, {})",
                    edge.from, edge.to
                ),
            });
        }
    }

    let hull = adjacency.hull_edges().len();
    let expected = (2 * n).checked_sub(hull + 2);
    if expected != Some(triangles.len()) {
        return Err(VoronoiError::DegenerateInput {
            reason: format!(
                "{} triangles over {n} sites with {hull} hull edges do not tile the hull",
                triangles.len()
            ),
        });
    }
    Ok(())
}

/// Returns true if every site lies within `eps` of the line through the
/// first site and the site farthest from it.
fn all_collinear<F: Float>(sites: &[Point2<F>], eps: F) -> bool {
    let Some(&a) = sites.first() else {
        return true;
    };
    let farthest = sites.iter().copied().max_by(|p, q| {
        a.distance_squared(*p)
            .partial_cmp(&a.distance_squared(*q))
            .unwrap_or(Ordering::Equal)
    });
    let Some(b) = farthest else {
        return true;
    };

    sites
        .iter()
        .all(|&c| orient2d(a, b, c, eps) == Orientation::Collinear)
}

fn constant<F: Float>(value: f64) -> Result<F> {
    F::from(value).ok_or_else(|| VoronoiError::DegenerateInput {
        reason: format!("constant {value} is not representable in the coordinate type"),
    })
}

/// Working state of one triangulation run.
///
/// Triangles are never moved once created; removed ones are flagged dead
/// so that ids held by the edge index stay valid.
struct Arena<F> {
    /// Sites in unit coordinates, followed by the three super-triangle
    /// vertices.
    points: Vec<Point2<F>>,
    triangles: Vec<Triangle<F>>,
    alive: Vec<bool>,
    /// Live triangles on each side of every edge.
    edges: HashMap<Edge, [Option<usize>; 2]>,
    eps: F,
}

impl<F: Float> Arena<F> {
    /// Seeds the arena with a super-triangle that contains every site.
    fn new(sites: &[Point2<F>], eps: F) -> Result<Self> {
        let extent = BoundingBox::from_points(sites.iter().copied()).ok_or_else(|| {
            VoronoiError::InsufficientPoints { found: 0 }
        })?;
        let center = extent.center();
        let radius = extent.width().max(extent.height()) * constant(SUPER_TRIANGLE_SCALE)?;
        let phase: F = constant(SUPER_TRIANGLE_PHASE)?;
        let third: F = constant(std::f64::consts::TAU / 3.0)?;

        let n = sites.len();
        let mut points = Vec::with_capacity(n + 3);
        points.extend_from_slice(sites);
        // Increasing angles, so the super-triangle is counter-clockwise
        for k in 0..3 {
            let angle = phase + third * constant(k as f64)?;
            points.push(Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        let mut arena = Self {
            points,
            triangles: Vec::new(),
            alive: Vec::new(),
            edges: HashMap::new(),
            eps,
        };
        arena.add(n, n + 1, n + 2)?;
        Ok(arena)
    }

    fn add(&mut self, a: usize, b: usize, c: usize) -> Result<usize> {
        let triangle = Triangle::new(a, b, c, &self.points, self.eps)?;
        let id = self.triangles.len();
        self.triangles.push(triangle);
        self.alive.push(true);

        for (u, v) in triangle.edges() {
            let slots = self.edges.entry(Edge::new(u, v)).or_insert([None, None]);
            match slots.iter_mut().find(|slot| slot.is_none()) {
                Some(slot) => *slot = Some(id),
                None => {
                    return Err(VoronoiError::DegenerateInput {
                        reason: format!("edge ({u}, {v}) would border more than two triangles"),
                    })
                }
            }
        }
        Ok(id)
    }

    fn remove(&mut self, id: usize) {
        self.alive[id] = false;
        for (u, v) in self.triangles[id].edges() {
            let edge = Edge::new(u, v);
            if let Some(slots) = self.edges.get_mut(&edge) {
                for slot in slots.iter_mut() {
                    if *slot == Some(id) {
                        *slot = None;
                    }
                }
                if slots.iter().all(Option::is_none) {
                    self.edges.remove(&edge);
                }
            }
        }
    }

    /// The live triangle across edge `(u, v)` from triangle `id`.
    fn neighbor(&self, id: usize, u: usize, v: usize) -> Option<usize> {
        self.edges
            .get(&Edge::new(u, v))?
            .iter()
            .flatten()
            .copied()
            .find(|&t| t != id)
    }

    /// Inserts site `index`, re-triangulating the cavity of triangles whose
    /// circumcircle contains it.
    fn insert(&mut self, index: usize) -> Result<()> {
        let p = self.points[index];

        let bad: Vec<usize> = (0..self.triangles.len())
            .filter(|&t| {
                if !self.alive[t] {
                    return false;
                }
                let tri = &self.triangles[t];
                in_circumcircle(
                    p,
                    self.points[tri.a],
                    self.points[tri.b],
                    self.points[tri.c],
                    self.eps,
                )
            })
            .collect();

        if bad.is_empty() {
            let (x, y) = p.to_f64_pair();
            return Err(VoronoiError::DegenerateInput {
                reason: format!("site {index} at ({x}, {y}) is outside every circumcircle"),
            });
        }

        // An edge bounds the cavity when the triangle across it survives.
        // Walking the bad triangles in creation order keeps the output
        // deterministic.
        let bad_set: HashSet<usize> = bad.iter().copied().collect();
        let mut boundary: Vec<(usize, usize)> = Vec::new();
        for &t in &bad {
            for (u, v) in self.triangles[t].edges() {
                let shared = self
                    .neighbor(t, u, v)
                    .is_some_and(|other| bad_set.contains(&other));
                if !shared {
                    boundary.push((u, v));
                }
            }
        }

        for &(u, v) in &boundary {
            if orient2d(self.points[u], self.points[v], p, self.eps) != Orientation::CounterClockwise
            {
                let (x, y) = p.to_f64_pair();
                return Err(VoronoiError::DegenerateInput {
                    reason: format!(
                        "site {index} at ({x}, {y}) is collinear with cavity edge ({u}, {v})"
                    ),
                });
            }
        }

        for &t in &bad {
            self.remove(t);
        }
        // Boundary edges keep the winding of the removed triangles
        for &(u, v) in &boundary {
            self.add(u, v, index)?;
        }

        tracing::trace!(
            site = index,
            removed = bad.len(),
            created = boundary.len(),
            "inserted site"
        );
        Ok(())
    }

    /// Live triangles that use only real sites, in creation order.
    fn into_triangles(self, site_count: usize) -> Vec<Triangle<F>> {
        self.triangles
            .into_iter()
            .zip(self.alive)
            .filter(|(tri, alive)| *alive && tri.vertices().iter().all(|&v| v < site_count))
            .map(|(tri, _)| tri)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPS: f64 = 1e-10;

    fn assert_empty_circumcircles(mesh: &Mesh<f64>) {
        let sites = mesh.sites();
        for tri in mesh.triangles() {
            let center = tri.circumcenter();
            let r2 = tri.circumcircle.radius_squared;
            for (i, &p) in sites.iter().enumerate() {
                if !tri.contains_vertex(i) {
                    assert!(
                        center.distance_squared(p) >= r2 - 1e-9,
                        "Point {} is inside circumcircle of triangle ({}, {}, {})",
                        i,
                        tri.a,
                        tri.b,
                        tri.c
                    );
                }
            }
        }
    }

    fn assert_ccw(mesh: &Mesh<f64>) {
        let sites = mesh.sites();
        for tri in mesh.triangles() {
            assert_eq!(
                orient2d(sites[tri.a], sites[tri.b], sites[tri.c], EPS),
                Orientation::CounterClockwise
            );
        }
    }

    #[test]
    fn test_triangulate_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert_eq!(
            triangulate(&points, EPS).unwrap_err(),
            VoronoiError::InsufficientPoints { found: 0 }
        );
    }

    #[test]
    fn test_triangulate_one_point() {
        let points = vec![Point2::new(0.0_f64, 0.0)];
        assert_eq!(
            triangulate(&points, EPS).unwrap_err(),
            VoronoiError::InsufficientPoints { found: 1 }
        );
    }

    #[test]
    fn test_triangulate_two_points() {
        let points = vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(
            triangulate(&points, EPS).unwrap_err(),
            VoronoiError::InsufficientPoints { found: 2 }
        );
    }

    #[test]
    fn test_triangulate_three_points() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert_eq!(mesh.triangles().len(), 1);
        assert_eq!(mesh.triangles()[0].key(), [0, 1, 2]);
        assert_ccw(&mesh);
    }

    #[test]
    fn test_triangulate_square() {
        // Cocircular corners: either diagonal is valid, but there are 2 triangles
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert_eq!(mesh.triangles().len(), 2);
        assert_ccw(&mesh);
        assert_empty_circumcircles(&mesh);
    }

    #[test]
    fn test_triangulate_no_point_in_circumcircle() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
            Point2::new(0.25, 0.75),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert_empty_circumcircles(&mesh);
        assert_ccw(&mesh);
    }

    #[test]
    fn test_triangulate_grid() {
        let mut points: Vec<Point2<f64>> = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(Point2::new(i as f64, j as f64));
            }
        }

        let mesh = triangulate(&points, EPS).unwrap();

        // 3x3 squares, each split into 2 triangles
        assert_eq!(mesh.triangles().len(), 18);
        assert_empty_circumcircles(&mesh);
        assert_ccw(&mesh);
    }

    #[test]
    fn test_triangulate_random_like() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert!(!mesh.triangles().is_empty());
        assert_empty_circumcircles(&mesh);
        assert!(mesh.find_delaunay_violation(EPS).is_none());
    }

    #[test]
    fn test_triangulate_collinear() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        ];
        assert!(matches!(
            triangulate(&points, EPS),
            Err(VoronoiError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_triangulate_collinear_within_eps() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 1e-13),
            Point2::new(2.0, 0.0),
        ];
        assert!(matches!(
            triangulate(&points, EPS),
            Err(VoronoiError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_triangulate_non_finite() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(f64::NAN, 1.0),
        ];
        assert_eq!(
            triangulate(&points, EPS).unwrap_err(),
            VoronoiError::NonFiniteCoordinate { index: 2 }
        );
    }

    #[test]
    fn test_triangulate_duplicates_collapse() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 5e-11),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert_eq!(mesh.sites().len(), 3);
        assert_eq!(mesh.triangles().len(), 1);
        assert_eq!(mesh.site_of_input(2), Some(0));
        assert_eq!(mesh.site_of_input(4), Some(1));
        assert_eq!(mesh.site_of_input(3), Some(2));
    }

    #[test]
    fn test_triangulate_duplicates_leave_too_few() {
        let points = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        assert_eq!(
            triangulate(&points, EPS).unwrap_err(),
            VoronoiError::InsufficientPoints { found: 2 }
        );
    }

    #[test]
    fn test_triangulate_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let mesh = triangulate(&points, 1e-6).unwrap();
        assert_eq!(mesh.triangles().len(), 1);
    }

    #[test]
    fn test_triangulate_covers_all_points() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        let mesh = triangulate(&points, EPS).unwrap();

        let mut used: HashSet<usize> = HashSet::new();
        for tri in mesh.triangles() {
            used.extend(tri.vertices());
        }

        for i in 0..points.len() {
            assert!(used.contains(&i), "Point {} not used in triangulation", i);
        }
    }

    #[test]
    fn test_triangulate_is_deterministic() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.7, 0.6),
        ];
        let first = triangulate(&points, EPS).unwrap();
        let second = triangulate(&points, EPS).unwrap();
        assert_eq!(first.triangles(), second.triangles());
    }

    fn xorshift_points(count: usize, seed: u64) -> Vec<Point2<f64>> {
        let mut state = seed;
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as f64 / u64::MAX as f64
        };
        (0..count).map(|_| Point2::new(next(), next())).collect()
    }

    fn assert_tiles_hull(mesh: &Mesh<f64>) {
        let n = mesh.sites().len();
        let h = mesh.hull_edges().len();
        assert_eq!(mesh.triangles().len(), 2 * n - h - 2);
        for site in 0..n {
            assert!(!mesh.incident_triangles(site).is_empty(), "site {} uncovered", site);
        }
        assert!(mesh.find_delaunay_violation(EPS).is_none());
    }

    #[test]
    fn test_triangulate_tiny_extent() {
        let unit = xorshift_points(20, 12345);
        let tiny: Vec<Point2<f64>> = unit
            .iter()
            .map(|p| Point2::new(p.x * 1e-3, p.y * 1e-3))
            .collect();

        let reference = triangulate(&unit, EPS).unwrap();
        let mesh = triangulate(&tiny, EPS).unwrap();

        assert_tiles_hull(&mesh);
        assert_eq!(mesh.triangles().len(), reference.triangles().len());
        assert_eq!(mesh.sites(), &tiny[..]);
    }

    #[test]
    fn test_triangulate_small_offset_cluster() {
        let unit = xorshift_points(8, 67890);
        let offset: Vec<Point2<f64>> = unit
            .iter()
            .map(|p| Point2::new(45.0 + p.x * 0.003, 5.0 + p.y * 0.003))
            .collect();

        let reference = triangulate(&unit, EPS).unwrap();
        let mesh = triangulate(&offset, EPS).unwrap();

        assert_tiles_hull(&mesh);
        let keys = |m: &Mesh<f64>| {
            let mut keys: Vec<[usize; 3]> = m.triangles().iter().map(Triangle::key).collect();
            keys.sort_unstable();
            keys
        };
        assert_eq!(keys(&mesh), keys(&reference));

        // Circumcircles are reported in input coordinates
        for tri in mesh.triangles() {
            let center = tri.circumcenter();
            let r = tri.circumradius();
            for v in tri.vertices() {
                assert!((center.distance(offset[v]) - r).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_check_complete_rejects_uncovered_site() {
        let sites = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.4, 0.4),
        ];
        let triangles = vec![Triangle::new(0, 1, 2, &sites, EPS).unwrap()];
        let err = check_complete(&triangles, &sites, &sites, EPS).unwrap_err();
        assert!(
            matches!(err, VoronoiError::DegenerateInput { ref reason } if reason.contains("site 3"))
        );
    }

    #[test]
    fn test_check_complete_rejects_missing_hull_triangle() {
        // Square fanned around its center with one of the four triangles lost
        let sites = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let mut triangles = vec![
            Triangle::new(0, 1, 4, &sites, EPS).unwrap(),
            Triangle::new(1, 2, 4, &sites, EPS).unwrap(),
            Triangle::new(2, 3, 4, &sites, EPS).unwrap(),
        ];
        assert!(matches!(
            check_complete(&triangles, &sites, &sites, EPS),
            Err(VoronoiError::DegenerateInput { .. })
        ));

        triangles.push(Triangle::new(3, 0, 4, &sites, EPS).unwrap());
        assert!(check_complete(&triangles, &sites, &sites, EPS).is_ok());
    }

    #[test]
    fn test_check_complete_rejects_disconnected_pieces() {
        let sites = vec![
            Point2::new(0.0_f64, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(2.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(2.0, 3.0),
        ];
        let triangles = vec![
            Triangle::new(0, 1, 2, &sites, EPS).unwrap(),
            Triangle::new(3, 4, 5, &sites, EPS).unwrap(),
        ];
        assert!(check_complete(&triangles, &sites, &sites, EPS).is_err());
    }

    #[test]
    fn test_triangulate_large_coordinates() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(1000.0, 1000.0),
            Point2::new(1010.0, 1000.0),
            Point2::new(1005.0, 1008.0),
            Point2::new(1004.0, 1003.0),
        ];
        let mesh = triangulate(&points, EPS).unwrap();
        assert_eq!(mesh.triangles().len(), 3);
        assert_empty_circumcircles(&mesh);
    }
}
