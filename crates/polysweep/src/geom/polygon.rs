//! Simple polygon with normalized orientation and derived edge indexes.
//!
//! Invariants (after `Polygon::new`)
//! - At least 3 vertices, all finite, non-zero enclosed area.
//! - Shoelace sum `Σ v[i] × v[i+1]` is negative (orientation normalized).
//! - `edges[i]` joins `vertices[i]` to `vertices[(i + 1) % n]`.
//! - `vertical_edges` holds exactly the `Direction::Vertical` edges, grouped by x.
//!
//! The polygon is read-only once built; the query engine only uses the
//! accessors below.

use std::collections::BTreeMap;

use super::types::{Coord, CoordKey, Direction, Edge, Point};
use crate::error::{CoordRole, GeometryError};

type VertexKey<T> = (CoordKey<T>, CoordKey<T>);

#[derive(Clone, Debug)]
pub struct Polygon<T: Coord> {
    vertices: Vec<Point<T>>,
    edges: Vec<Edge<T>>,
    vertical_edges: BTreeMap<CoordKey<T>, Vec<Edge<T>>>,
    vertex_set: BTreeMap<VertexKey<T>, usize>,
}

impl<T: Coord> Polygon<T> {
    /// Validate, normalize orientation, and derive edges.
    pub fn new(vertices: Vec<Point<T>>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        if let Some(index) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite {
                role: CoordRole::Vertex,
                index,
            });
        }
        if shoelace(&vertices) == nalgebra::zero::<T>() {
            return Err(GeometryError::ZeroArea);
        }
        let mut poly = Self {
            vertices,
            edges: Vec::new(),
            vertical_edges: BTreeMap::new(),
            vertex_set: BTreeMap::new(),
        };
        poly.normalize();
        poly.build_edges();
        Ok(poly)
    }

    /// Build from raw `(x, y)` pairs; ids are the input positions.
    pub fn from_coords(coords: &[(T, T)]) -> Result<Self, GeometryError> {
        let vertices = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(x, y, i))
            .collect();
        Self::new(vertices)
    }

    fn normalize(&mut self) {
        if shoelace(&self.vertices) > nalgebra::zero::<T>() {
            self.vertices.reverse();
        }
    }

    fn build_edges(&mut self) {
        let n = self.vertices.len();
        self.edges.reserve(n);
        for i in 0..n {
            let edge = Edge::new(self.vertices[i], self.vertices[(i + 1) % n], i);
            if edge.direction == Direction::Vertical {
                self.vertical_edges
                    .entry(CoordKey(edge.left.x()))
                    .or_default()
                    .push(edge);
            }
            self.edges.push(edge);
        }
        for v in &self.vertices {
            *self.vertex_set.entry(vertex_key(v)).or_insert(0) += 1;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed polygon; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in normalized traversal order.
    #[inline]
    pub fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Vertical edges grouped by their common x, ascending.
    pub fn vertical_edges(&self) -> impl Iterator<Item = (T, &[Edge<T>])> + '_ {
        self.vertical_edges
            .iter()
            .map(|(k, edges)| (k.0, edges.as_slice()))
    }

    /// Vertical edges lying on the line `X = x` (exact match).
    pub fn vertical_edges_at(&self, x: T) -> &[Edge<T>] {
        self.vertical_edges
            .get(&CoordKey(x))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Does `p` sit exactly on a vertex?
    #[inline]
    pub fn contains_vertex(&self, p: &Point<T>) -> bool {
        self.vertex_multiplicity(p) > 0
    }

    /// Number of vertices at exactly `p`'s coordinates.
    pub fn vertex_multiplicity(&self, p: &Point<T>) -> usize {
        self.vertex_set.get(&vertex_key(p)).copied().unwrap_or(0)
    }

    /// Signed area in the normalized orientation (negative).
    pub fn signed_area(&self) -> T {
        shoelace(&self.vertices) * nalgebra::convert::<f64, T>(0.5)
    }

    #[inline]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }
}

#[inline]
fn vertex_key<T: Coord>(p: &Point<T>) -> VertexKey<T> {
    (CoordKey(p.x()), CoordKey(p.y()))
}

/// Shoelace sum `Σ v[i] × v[(i+1) % n]` (twice the signed area).
pub fn shoelace<T: Coord>(vertices: &[Point<T>]) -> T {
    let n = vertices.len();
    let mut sum = nalgebra::zero::<T>();
    for i in 0..n {
        sum += vertices[i].cross(&vertices[(i + 1) % n]);
    }
    sum
}
