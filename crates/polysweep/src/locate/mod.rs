//! Batched point location: one engine per (polygon, query list).
//!
//! Purpose
//! - Classify Q query points against an N-gon in O((N + Q) log(N + Q)) by
//!   sweeping all queries and edge endpoints together, instead of O(N) per point.
//!
//! Pipeline
//! - `Polygon::new` normalizes orientation and derives edges (done before an
//!   engine can exist).
//! - `QueryEngine::new` ingests queries: exact vertex hits are BORDER up front,
//!   queries are grouped by x for the vertical-edge pass.
//! - `QueryEngine::run` runs the vertical-edge pass and the general sweep; both
//!   only ever raise a stored result, so their order does not matter.
//!
//! Stage order is carried by ownership: `run` consumes the engine, and there is
//! no way to obtain an un-normalized polygon.
//!
//! Code cross-refs: `geom::{Polygon, Edge, Direction}`, `naive` (reference).

mod active;
mod sweep;
mod types;
mod vertical;

use std::collections::BTreeMap;

use crate::error::{CoordRole, GeometryError};
use crate::geom::{Coord, CoordKey, Point, Polygon};

pub use types::Classification;

/// Query state for one polygon.
#[derive(Clone, Debug)]
pub struct QueryEngine<'p, T: Coord> {
    polygon: &'p Polygon<T>,
    queries: Vec<Point<T>>,
    by_x: BTreeMap<CoordKey<T>, Vec<usize>>,
    answers: Vec<Classification>,
}

impl<'p, T: Coord> QueryEngine<'p, T> {
    /// Ingest `queries`; results are reported in this order. Query ids are
    /// reassigned to input positions.
    pub fn new(polygon: &'p Polygon<T>, queries: &[Point<T>]) -> Result<Self, GeometryError> {
        let mut engine = Self {
            polygon,
            queries: Vec::with_capacity(queries.len()),
            by_x: BTreeMap::new(),
            answers: Vec::with_capacity(queries.len()),
        };
        for q in queries {
            engine.push_query(*q)?;
        }
        Ok(engine)
    }

    fn push_query(&mut self, q: Point<T>) -> Result<(), GeometryError> {
        let id = self.queries.len();
        if !q.is_finite() {
            return Err(GeometryError::NonFinite {
                role: CoordRole::Query,
                index: id,
            });
        }
        let q = q.with_id(id);
        let initial = if self.polygon.contains_vertex(&q) {
            Classification::Border
        } else {
            Classification::Outside
        };
        self.answers.push(initial);
        self.by_x.entry(CoordKey(q.x())).or_default().push(id);
        self.queries.push(q);
        Ok(())
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon<T> {
        self.polygon
    }

    /// Ingested queries (ids equal positions).
    #[inline]
    pub fn queries(&self) -> &[Point<T>] {
        &self.queries
    }

    /// Results so far; before `run` only vertex hits are set.
    #[inline]
    pub fn classifications(&self) -> &[Classification] {
        &self.answers
    }

    /// Run both passes and return one classification per query, in input order.
    pub fn run(mut self) -> Vec<Classification> {
        let _span = tracing::debug_span!(
            "locate",
            vertices = self.polygon.len(),
            queries = self.queries.len()
        )
        .entered();
        vertical::answer_vertical(self.polygon, &self.queries, &self.by_x, &mut self.answers);
        sweep::answer_sweep(self.polygon, &self.queries, &mut self.answers);
        self.answers
    }
}

/// Classify `queries` against `polygon` (see `QueryEngine`).
pub fn locate<T: Coord>(
    polygon: &Polygon<T>,
    queries: &[Point<T>],
) -> Result<Vec<Classification>, GeometryError> {
    Ok(QueryEngine::new(polygon, queries)?.run())
}

/// Build the polygon from raw pairs and classify raw query pairs.
pub fn locate_coords<T: Coord>(
    vertices: &[(T, T)],
    queries: &[(T, T)],
) -> Result<Vec<Classification>, GeometryError> {
    let polygon = Polygon::from_coords(vertices)?;
    let queries: Vec<Point<T>> = queries
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Point::new(x, y, i))
        .collect();
    locate(&polygon, &queries)
}
