//! 2D geometry for batched polygon location.
//!
//! Purpose
//! - Generic `Point`/`Edge`/`Polygon` over the coordinate type (`Coord`).
//! - The polygon fixes its orientation once and derives the lookups the query
//!   engine needs: edges with direction classes, vertical edges grouped by x,
//!   and a vertex membership set.
//!
//! Code cross-refs: `locate::QueryEngine` (consumer), `naive` (reference test).

mod polygon;
pub mod rand;
mod types;

pub use polygon::{shoelace, Polygon};
pub use types::{Coord, CoordKey, Direction, Edge, Point};

pub(crate) use types::cmp_coord;

#[cfg(test)]
mod tests;
