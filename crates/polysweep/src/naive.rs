//! Per-point reference classifier (O(N) per query).
//!
//! Exact border test (zero cross product inside the edge's bounding box),
//! then even-odd ray casting towards +x with half-open edge ownership in y.
//! Orientation-agnostic; used as the oracle for the sweep and from the CLI.

use crate::geom::{Coord, Point, Polygon};
use crate::locate::Classification;

/// Classify one point against a vertex ring (implicitly closed).
pub fn classify_point<T: Coord>(ring: &[Point<T>], p: &Point<T>) -> Classification {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        if on_segment(a, b, p) {
            return Classification::Border;
        }
        if (a.y() > p.y()) != (b.y() > p.y()) {
            let x_cross = a.x() + (p.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
            if p.x() < x_cross {
                inside = !inside;
            }
        }
    }
    if inside {
        Classification::Inside
    } else {
        Classification::Outside
    }
}

/// Classify every query independently.
pub fn classify_all<T: Coord>(polygon: &Polygon<T>, queries: &[Point<T>]) -> Vec<Classification> {
    queries
        .iter()
        .map(|q| classify_point(polygon.vertices(), q))
        .collect()
}

fn on_segment<T: Coord>(a: &Point<T>, b: &Point<T>, p: &Point<T>) -> bool {
    let cross = (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x());
    if cross != nalgebra::zero::<T>() {
        return false;
    }
    let (lo_x, hi_x) = if a.x() < b.x() { (a.x(), b.x()) } else { (b.x(), a.x()) };
    let (lo_y, hi_y) = if a.y() < b.y() { (a.y(), b.y()) } else { (b.y(), a.y()) };
    lo_x <= p.x() && p.x() <= hi_x && lo_y <= p.y() && p.y() <= hi_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(x, y, i))
            .collect()
    }

    #[test]
    fn square_both_orientations() {
        let ccw = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let mut cw = ccw.clone();
        cw.reverse();
        for r in [&ccw, &cw] {
            let c = |x, y| classify_point(r, &Point::new(x, y, 0));
            assert_eq!(c(2.0, 2.0), Classification::Inside);
            assert_eq!(c(4.0, 2.0), Classification::Border);
            assert_eq!(c(0.0, 0.0), Classification::Border);
            assert_eq!(c(5.0, 2.0), Classification::Outside);
            assert_eq!(c(-1.0, 4.0), Classification::Outside);
        }
    }

    #[test]
    fn ray_through_reflex_vertex() {
        // Arrow notch: the ray from (1,2) passes exactly through vertex (3,2).
        let r = ring(&[(0.0, 0.0), (4.0, 0.0), (3.0, 2.0), (4.0, 4.0), (0.0, 4.0)]);
        assert_eq!(
            classify_point(&r, &Point::new(1.0, 2.0, 0)),
            Classification::Inside
        );
        assert_eq!(
            classify_point(&r, &Point::new(3.5, 2.0, 0)),
            Classification::Outside
        );
    }
}
