//! Ordered set of edges crossed by the sweep line.
//!
//! The order is recomputed per comparison from the two edges' own x-spans, so
//! the container carries no sweep position. Edges are kept in a sorted `Vec`;
//! lookups are binary searches (`partition_point`).

use std::cmp::Ordering;

use crate::geom::{cmp_coord, Coord, Edge};

/// Order two edges by height over their common x-range.
///
/// Compares `y` at `x0 = max(min_x)` first and at `x1 = min(max_x)` second, so
/// edges sharing an endpoint are still told apart by where they go next.
pub(crate) fn cmp_edges<T: Coord>(a: &Edge<T>, b: &Edge<T>) -> Ordering {
    let (a_lo, b_lo) = (a.min_x(), b.min_x());
    let (a_hi, b_hi) = (a.max_x(), b.max_x());
    let x0 = if a_lo > b_lo { a_lo } else { b_lo };
    let x1 = if a_hi < b_hi { a_hi } else { b_hi };
    cmp_coord(a.y_at(x0), b.y_at(x0)).then_with(|| cmp_coord(a.y_at(x1), b.y_at(x1)))
}

#[derive(Clone, Debug)]
pub(crate) struct ActiveEdges<T: Coord> {
    edges: Vec<Edge<T>>,
}

impl<T: Coord> ActiveEdges<T> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            edges: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Edge<T>> {
        self.edges.get(i)
    }

    /// Insert after any edges comparing equal (multiset semantics).
    pub fn insert(&mut self, edge: Edge<T>) {
        let at = self
            .edges
            .partition_point(|e| cmp_edges(e, &edge) != Ordering::Greater);
        self.edges.insert(at, edge);
    }

    /// Remove the edge with `edge.id`. Returns false if it was not active.
    pub fn remove(&mut self, edge: &Edge<T>) -> bool {
        let lo = self.lower_bound(edge);
        let hit = self.edges[lo..]
            .iter()
            .take_while(|e| cmp_edges(*e, edge) == Ordering::Equal)
            .position(|e| e.id == edge.id)
            .map(|k| lo + k);
        let hit = match hit {
            Some(i) => Some(i),
            None => {
                // Rounding made the comparator disagree with insertion time.
                let found = self.edges.iter().position(|e| e.id == edge.id);
                if found.is_some() {
                    tracing::debug!(edge = edge.id, "active edge found by id scan");
                }
                found
            }
        };
        match hit {
            Some(i) => {
                self.edges.remove(i);
                true
            }
            None => false,
        }
    }

    /// Index of the first edge not less than `probe` (`len()` if none).
    #[inline]
    pub fn lower_bound(&self, probe: &Edge<T>) -> usize {
        self.edges
            .partition_point(|e| cmp_edges(e, probe) == Ordering::Less)
    }

    #[cfg(test)]
    pub fn ids(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.id).collect()
    }
}
