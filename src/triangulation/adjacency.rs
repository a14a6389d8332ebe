//! Site-to-triangle and site-to-site adjacency derived from a mesh.

use super::triangle::{Edge, Triangle};
use num_traits::Float;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh edge used by exactly one triangle.
///
/// `from -> to` follows the counter-clockwise winding of `triangle`, so the
/// mesh interior lies to the left and the outward normal points right.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HullEdge {
    /// Start vertex index.
    pub from: usize,
    /// End vertex index.
    pub to: usize,
    /// The only triangle using this edge.
    pub triangle: usize,
}

/// Adjacency lists for every site of a mesh.
///
/// Built on demand from the triangle list; the mesh itself stores only
/// sites and triangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency {
    incident: Vec<Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
    hull: Vec<HullEdge>,
}

impl Adjacency {
    /// Builds adjacency for `site_count` sites from `triangles`.
    pub fn new<F: Float>(triangles: &[Triangle<F>], site_count: usize) -> Self {
        let mut incident = vec![Vec::new(); site_count];
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); site_count];
        // Edge -> (uses, directed edge and triangle of the first use)
        let mut uses: BTreeMap<Edge, (usize, HullEdge)> = BTreeMap::new();

        for (id, tri) in triangles.iter().enumerate() {
            for v in tri.vertices() {
                incident[v].push(id);
            }
            for (u, v) in tri.edges() {
                neighbors[u].push(v);
                neighbors[v].push(u);
                uses.entry(Edge::new(u, v))
                    .and_modify(|(count, _)| *count += 1)
                    .or_insert((
                        1,
                        HullEdge {
                            from: u,
                            to: v,
                            triangle: id,
                        },
                    ));
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }

        let hull = uses
            .into_values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, edge)| edge)
            .collect();

        Self {
            incident,
            neighbors,
            hull,
        }
    }

    /// Number of sites covered.
    #[inline]
    pub fn site_count(&self) -> usize {
        self.incident.len()
    }

    /// Indices of the triangles that have `site` as a vertex.
    pub fn incident_triangles(&self, site: usize) -> &[usize] {
        self.incident.get(site).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sites sharing an edge with `site`, ascending.
    pub fn neighbors(&self, site: usize) -> &[usize] {
        self.neighbors.get(site).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every hull edge, ordered by its undirected vertex pair.
    pub fn hull_edges(&self) -> &[HullEdge] {
        &self.hull
    }

    /// The hull edges that end at and start from `site`, in that order.
    ///
    /// `None` for interior sites.
    pub fn hull_edges_at(&self, site: usize) -> Option<(HullEdge, HullEdge)> {
        let incoming = self.hull.iter().find(|e| e.to == site)?;
        let outgoing = self.hull.iter().find(|e| e.from == site)?;
        Some((*incoming, *outgoing))
    }

    /// Returns true if `site` lies on the boundary of the mesh.
    pub fn is_hull_site(&self, site: usize) -> bool {
        self.hull.iter().any(|e| e.from == site || e.to == site)
    }
}
