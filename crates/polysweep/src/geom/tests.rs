use super::*;
use crate::error::{CoordRole, GeometryError};

fn square() -> Polygon<f64> {
    Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]).unwrap()
}

#[test]
fn orientation_is_normalized_to_negative_shoelace() {
    let ccw = square();
    assert!(shoelace(ccw.vertices()) < 0.0);
    assert_eq!(ccw.vertices()[0], Point::new(0.0, 4.0, 0));

    let cw = Polygon::from_coords(&[(0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]).unwrap();
    assert!(shoelace(cw.vertices()) < 0.0);
    assert_eq!(cw.vertices()[0], Point::new(0.0, 4.0, 0));
    assert!((ccw.area() - 16.0).abs() < 1e-12);
    assert!((ccw.signed_area() + 16.0).abs() < 1e-12);
}

#[test]
fn edges_follow_vertices_cyclically() {
    let p = square();
    let n = p.len();
    assert_eq!(p.edges().len(), n);
    for (i, e) in p.edges().iter().enumerate() {
        assert_eq!(e.id, i);
        assert_eq!(e.left, p.vertices()[i]);
        assert_eq!(e.right, p.vertices()[(i + 1) % n]);
    }
    let dirs: Vec<Direction> = p.edges().iter().map(|e| e.direction).collect();
    assert_eq!(
        dirs,
        vec![
            Direction::RisingX,
            Direction::Vertical,
            Direction::FallingX,
            Direction::Vertical
        ]
    );
}

#[test]
fn vertical_edges_grouped_by_x() {
    let p = square();
    let groups: Vec<(f64, usize)> = p.vertical_edges().map(|(x, es)| (x, es.len())).collect();
    assert_eq!(groups, vec![(0.0, 1), (4.0, 1)]);
    assert_eq!(p.vertical_edges_at(4.0)[0].min_y(), 0.0);
    assert_eq!(p.vertical_edges_at(4.0)[0].max_y(), 4.0);
    assert!(p.vertical_edges_at(2.0).is_empty());
}

#[test]
fn vertex_membership_is_exact() {
    let p = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (2.0, 2.0), (0.0, 2.0)])
        .unwrap();
    assert!(p.contains_vertex(&Point::new(2.0, 0.0, 99)));
    assert!(!p.contains_vertex(&Point::new(2.0, 1e-12, 0)));
    assert_eq!(p.vertex_multiplicity(&Point::new(2.0, 2.0, 0)), 2);
    assert_eq!(p.vertex_multiplicity(&Point::new(1.0, 1.0, 0)), 0);
    assert!(p.contains_vertex(&Point::new(2.0, 2.0, 5)));
    // The repeated vertex yields a zero-length edge, classified as vertical.
    assert!(p.edges().iter().any(|e| e.is_vertical() && e.min_y() == e.max_y()));
}

#[test]
fn malformed_polygons_are_rejected() {
    assert_eq!(
        Polygon::<f64>::from_coords(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err(),
        GeometryError::TooFewVertices { count: 2 }
    );
    assert_eq!(
        Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap_err(),
        GeometryError::ZeroArea
    );
    assert_eq!(
        Polygon::from_coords(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 0.0)]).unwrap_err(),
        GeometryError::NonFinite {
            role: CoordRole::Vertex,
            index: 1
        }
    );
}

#[test]
fn edge_height_interpolation() {
    let e = Edge::new(Point::new(4.0, 0.0, 0), Point::new(0.0, 4.0, 1), 0);
    assert_eq!(e.direction, Direction::FallingX);
    assert_eq!(e.min_x_end().x(), 0.0);
    assert_eq!(e.y_at(0.0), 4.0);
    assert_eq!(e.y_at(4.0), 0.0);
    assert_eq!(e.y_at(1.0), 3.0);

    // Endpoints are returned exactly even where interpolation would round.
    let f = Edge::new(Point::new(0.0, 0.1, 0), Point::new(1.0, 0.3, 1), 0);
    assert_eq!(f.y_at(1.0), 0.3);

    // Zero x-span falls back to the first endpoint.
    let v = Edge::new(Point::new(1.0, 5.0, 0), Point::new(1.0, 2.0, 1), 0);
    assert!(v.is_vertical());
    assert_eq!(v.y_at(1.0), 5.0);
    assert_eq!(v.y_at(3.0), 5.0);
}

#[test]
fn points_compare_by_coordinates_only() {
    let a = Point::new(1.0, 2.0, 0);
    let b = Point::new(1.0, 2.0, 7);
    let c = Point::new(1.0, 3.0, 0);
    assert_eq!(a, b);
    assert!(a < c);
    assert!(a > Point::new(0.5, 9.0, 0));
}

#[test]
fn generic_over_f32() {
    let p = Polygon::<f32>::from_coords(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]).unwrap();
    assert_eq!(p.len(), 3);
    assert!((p.area() - 4.5).abs() < 1e-6);
}
