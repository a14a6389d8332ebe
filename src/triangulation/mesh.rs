//! The Delaunay mesh produced by [`triangulate`](super::triangulate).

use super::adjacency::{Adjacency, HullEdge};
use super::frame::UnitFrame;
use super::triangle::{Edge, Triangle};
use crate::primitives::Point2;
use crate::tolerance::incircle;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A defect found by [`Mesh::find_delaunay_violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelaunayViolation {
    /// A site is not a vertex of any triangle.
    UncoveredSite {
        /// Index of the site.
        site: usize,
    },
    /// The triangles do not form a single disk: the count differs from
    /// `2n - h - 2` for `h` boundary edges.
    TriangleCount {
        /// Number of triangles in the mesh.
        found: usize,
        /// Number a complete triangulation would have.
        expected: usize,
    },
    /// A site lies strictly inside the circumcircle of a triangle.
    InsideCircumcircle {
        /// Index of the offending triangle.
        triangle: usize,
        /// Index of the site inside its circumcircle.
        site: usize,
    },
}

/// A triangulation over a set of deduplicated sites.
///
/// Owns its sites; triangles refer to them by index. Every triangle is
/// counter-clockwise and non-degenerate, and its circumcircle is cached.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<F> {
    sites: Vec<Point2<F>>,
    input_to_site: Vec<usize>,
    triangles: Vec<Triangle<F>>,
}

impl<F: Float> Mesh<F> {
    pub(crate) fn new(
        sites: Vec<Point2<F>>,
        input_to_site: Vec<usize>,
        triangles: Vec<Triangle<F>>,
    ) -> Self {
        Self {
            sites,
            input_to_site,
            triangles,
        }
    }

    /// The deduplicated sites, in order of first occurrence in the input.
    #[inline]
    pub fn sites(&self) -> &[Point2<F>] {
        &self.sites
    }

    /// The triangles, counter-clockwise.
    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    /// Site index that input point `input` was merged into.
    #[inline]
    pub fn site_of_input(&self, input: usize) -> Option<usize> {
        self.input_to_site.get(input).copied()
    }

    /// Site index for every input point.
    #[inline]
    pub fn input_mapping(&self) -> &[usize] {
        &self.input_to_site
    }

    /// Circumcenter of every triangle, in triangle order. These are the
    /// Voronoi vertices before any clipping.
    pub fn circumcenters(&self) -> Vec<Point2<F>> {
        self.triangles.iter().map(Triangle::circumcenter).collect()
    }

    /// Every undirected edge, sorted.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .triangles
            .iter()
            .flat_map(|tri| tri.edges())
            .map(|(u, v)| Edge::new(u, v))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Builds the site adjacency lists.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::new(&self.triangles, self.sites.len())
    }

    /// Indices of the triangles incident to `site`.
    pub fn incident_triangles(&self, site: usize) -> Vec<usize> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.contains_vertex(site))
            .map(|(id, _)| id)
            .collect()
    }

    /// Delaunay neighbors of `site`, ascending.
    pub fn neighbors(&self, site: usize) -> Vec<usize> {
        self.adjacency().neighbors(site).to_vec()
    }

    /// Edges on the boundary of the mesh, each directed so the mesh lies
    /// to its left.
    pub fn hull_edges(&self) -> Vec<HullEdge> {
        self.adjacency().hull_edges().to_vec()
    }

    /// Brute-force check that the mesh is a complete Delaunay triangulation.
    ///
    /// Reports, in this order, the first site that no triangle uses, a
    /// triangle count that cannot tile a single disk, and the first triangle
    /// with a non-vertex site whose incircle determinant exceeds `eps`.
    /// The in-circle test runs on the sites scaled to a unit extent, as in
    /// [`triangulate`](super::triangulate). Sites on a circumcircle are
    /// allowed.
    pub fn find_delaunay_violation(&self, eps: F) -> Option<DelaunayViolation> {
        let n = self.sites.len();
        let adjacency = self.adjacency();
        if let Some(site) = (0..n).find(|&s| adjacency.incident_triangles(s).is_empty()) {
            return Some(DelaunayViolation::UncoveredSite { site });
        }

        let expected = (2 * n).saturating_sub(adjacency.hull_edges().len() + 2);
        if self.triangles.len() != expected {
            return Some(DelaunayViolation::TriangleCount {
                found: self.triangles.len(),
                expected,
            });
        }

        let frame = UnitFrame::around(&self.sites)?;
        let unit = frame.to_unit_all(&self.sites);
        self.triangles.iter().enumerate().find_map(|(id, tri)| {
            let (a, b, c) = (unit[tri.a], unit[tri.b], unit[tri.c]);
            unit.iter()
                .enumerate()
                .find(|&(i, &p)| !tri.contains_vertex(i) && incircle(p, a, b, c) > eps)
                .map(|(site, _)| DelaunayViolation::InsideCircumcircle { triangle: id, site })
        })
    }
}
