//! Triangle and edge records of a Delaunay mesh.

use super::frame::UnitFrame;
use crate::error::Result;
use crate::primitives::Point2;
use crate::tolerance::circumcenter;
use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circumscribed circle of a triangle, stored as center and squared radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    /// Point equidistant from the three vertices.
    pub center: Point2<F>,
    /// Squared circumradius.
    pub radius_squared: F,
}

impl<F: Float> Circumcircle<F> {
    /// Circle through `a`, `b`, `c`.
    ///
    /// # Errors
    ///
    /// `DegenerateInput` when the points are collinear within `eps`.
    pub fn through(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Result<Self> {
        let center = circumcenter(a, b, c, eps)?;
        Ok(Self {
            center,
            radius_squared: center.distance_squared(a),
        })
    }

    /// Circumradius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius_squared.sqrt()
    }
}

/// A triangle represented by indices into the mesh's site array.
///
/// Vertices are stored in counter-clockwise order. The circumcircle is
/// computed once when the triangle is created and reused by the Voronoi
/// dual.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<F> {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
    /// Cached circumscribed circle.
    pub circumcircle: Circumcircle<F>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle over `points[a]`, `points[b]`, `points[c]`,
    /// computing its circumcircle.
    pub(crate) fn new(a: usize, b: usize, c: usize, points: &[Point2<F>], eps: F) -> Result<Self> {
        let circumcircle = Circumcircle::through(points[a], points[b], points[c], eps)?;
        Ok(Self {
            a,
            b,
            c,
            circumcircle,
        })
    }

    /// The same triangle with its circumcircle mapped out of `frame`.
    pub(crate) fn from_unit(self, frame: &UnitFrame<F>) -> Self {
        let scale = frame.scale();
        Self {
            circumcircle: Circumcircle {
                center: frame.from_unit(self.circumcircle.center),
                radius_squared: self.circumcircle.radius_squared * scale * scale,
            },
            ..self
        }
    }

    /// The three vertex indices in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }

    /// The vertex indices sorted ascending; identifies the triangle
    /// regardless of rotation.
    #[inline]
    pub fn key(&self) -> [usize; 3] {
        let mut key = self.vertices();
        key.sort_unstable();
        key
    }

    /// Returns the three directed edges, following the counter-clockwise winding.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }

    /// The vertex not on edge `(u, v)`, if `(u, v)` is an edge of this triangle.
    pub fn opposite(&self, u: usize, v: usize) -> Option<usize> {
        if !self.contains_vertex(u) || !self.contains_vertex(v) || u == v {
            return None;
        }
        self.vertices().into_iter().find(|&w| w != u && w != v)
    }

    /// Circumcenter; a Voronoi vertex of the dual diagram.
    #[inline]
    pub fn circumcenter(&self) -> Point2<F> {
        self.circumcircle.center
    }

    /// Circumradius.
    #[inline]
    pub fn circumradius(&self) -> F {
        self.circumcircle.radius()
    }
}

/// An undirected edge, normalized so the smaller index comes first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub usize, pub usize);

impl Edge {
    /// Creates the normalized edge between two vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Edge(a, b)
        } else {
            Edge(b, a)
        }
    }

    /// Returns `true` if `v` is an endpoint.
    #[inline]
    pub fn touches(&self, v: usize) -> bool {
        self.0 == v || self.1 == v
    }
}
