//! Basic 2D types for polygon location.
//!
//! - `Coord`: numeric coordinate bound (any `RealField` scalar that is `Copy`).
//! - `Point`: coordinate plus the identity index used to report results.
//! - `Edge`, `Direction`: directed polygon side tagged with its sweep class.
//! - `CoordKey`: exact (no epsilon) ordered key for coordinate-indexed maps.

use nalgebra::{Point2, RealField};
use std::cmp::Ordering;

/// Scalar type usable as a coordinate.
pub trait Coord: RealField + Copy {}

impl<T: RealField + Copy> Coord for T {}

/// Three-way comparison of finite coordinates. NaN compares as equal; callers
/// reject non-finite input before it reaches any ordering.
#[inline]
pub(crate) fn cmp_coord<T: Coord>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// A 2D point with a stable identity index.
///
/// Equality and ordering look at `(x, y)` only: two points with different ids
/// but the same coordinates coincide.
#[derive(Clone, Copy, Debug)]
pub struct Point<T: Coord> {
    pub pos: Point2<T>,
    pub id: usize,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T, id: usize) -> Self {
        Self {
            pos: Point2::new(x, y),
            id,
        }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.pos.y
    }

    /// Same coordinates, different identity.
    #[inline]
    pub fn with_id(self, id: usize) -> Self {
        Self { id, ..self }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }

    /// 2D cross product `self × other` of the position vectors.
    #[inline]
    pub fn cross(&self, other: &Point<T>) -> T {
        self.pos.x * other.pos.y - self.pos.y * other.pos.x
    }
}

impl<T: Coord> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl<T: Coord> PartialOrd for Point<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x().partial_cmp(&other.x())? {
            Ordering::Equal => self.y().partial_cmp(&other.y()),
            o => Some(o),
        }
    }
}

/// Sweep class of an edge, derived from the x-order of its endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `left.x == right.x` (includes zero-length edges).
    Vertical,
    /// `left.x < right.x`.
    RisingX,
    /// `left.x > right.x`. After normalization these edges have the interior
    /// directly above them.
    FallingX,
}

impl Direction {
    #[inline]
    pub fn classify<T: Coord>(from_x: T, to_x: T) -> Self {
        if from_x == to_x {
            Direction::Vertical
        } else if from_x < to_x {
            Direction::RisingX
        } else {
            Direction::FallingX
        }
    }
}

/// Directed polygon side `left → right` in traversal order.
///
/// `left`/`right` are not sorted by x; use `min_x_end`/`max_x_end` for that.
#[derive(Clone, Copy, Debug)]
pub struct Edge<T: Coord> {
    pub left: Point<T>,
    pub right: Point<T>,
    pub id: usize,
    pub direction: Direction,
}

impl<T: Coord> Edge<T> {
    pub fn new(left: Point<T>, right: Point<T>, id: usize) -> Self {
        Self {
            left,
            right,
            id,
            direction: Direction::classify(left.x(), right.x()),
        }
    }

    /// Degenerate edge collapsed onto `p`, used to search the active set.
    #[inline]
    pub(crate) fn probe(p: Point<T>) -> Self {
        Self::new(p, p, usize::MAX)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.direction == Direction::Vertical
    }

    /// Endpoint with the smaller x (the second endpoint on ties).
    #[inline]
    pub fn min_x_end(&self) -> &Point<T> {
        if self.left.x() < self.right.x() {
            &self.left
        } else {
            &self.right
        }
    }

    /// Endpoint with the larger x (the first endpoint on ties).
    #[inline]
    pub fn max_x_end(&self) -> &Point<T> {
        if self.left.x() < self.right.x() {
            &self.right
        } else {
            &self.left
        }
    }

    #[inline]
    pub fn min_x(&self) -> T {
        self.min_x_end().x()
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.max_x_end().x()
    }

    #[inline]
    pub fn min_y(&self) -> T {
        if self.left.y() < self.right.y() {
            self.left.y()
        } else {
            self.right.y()
        }
    }

    #[inline]
    pub fn max_y(&self) -> T {
        if self.left.y() < self.right.y() {
            self.right.y()
        } else {
            self.left.y()
        }
    }

    /// Height of the supporting segment at `x`, interpolated from the min-x end.
    ///
    /// Zero x-span returns `left.y` instead of dividing by zero. At either
    /// endpoint's x the endpoint's own y is returned exactly.
    pub fn y_at(&self, x: T) -> T {
        let lo = self.min_x_end();
        let hi = self.max_x_end();
        if lo.x() == hi.x() {
            return self.left.y();
        }
        if x == lo.x() {
            return lo.y();
        }
        if x == hi.x() {
            return hi.y();
        }
        lo.y() + (hi.y() - lo.y()) * (x - lo.x()) / (hi.x() - lo.x())
    }
}

/// Exact ordered key over a coordinate (map keys for "same x" grouping).
#[derive(Clone, Copy, Debug)]
pub struct CoordKey<T: Coord>(pub T);

impl<T: Coord> PartialEq for CoordKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Coord> Eq for CoordKey<T> {}

impl<T: Coord> PartialOrd for CoordKey<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Coord> Ord for CoordKey<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_coord(self.0, other.0)
    }
}
