use approx::assert_relative_eq;
use manifold2d::query::details::contact_manifold_edge_circle;
use manifold2d::query::{contact_manifold, Manifold, ManifoldType, WorldManifold};
use manifold2d::shape::{Circle, Edge, FeatureId, Polyline, Shape};
use nalgebra::{Isometry2, Point2, Vector2};

fn bare_edge(vertex1: Point2<f32>, vertex2: Point2<f32>) -> Edge {
    let mut edge = Edge::new(vertex1, vertex2);
    edge.radius = 0.0;
    edge
}

#[test]
fn circle_above_edge_interior() {
    let edge = bare_edge(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(0.0, 0.4);

    let mut manifold = Manifold::new();
    contact_manifold_edge_circle(&pos1, &edge, &pos2, &circle, &mut manifold);

    assert_eq!(manifold.kind, ManifoldType::Face1);
    assert_eq!(manifold.points.len(), 1);
    assert_relative_eq!(manifold.local_normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-6);

    let world = WorldManifold::new(&manifold, &pos1, edge.radius, &pos2, circle.radius);
    assert_relative_eq!(world.normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-6);
    assert_relative_eq!(world.separations[0], -0.1, epsilon = 1.0e-5);
}

#[test]
fn circle_too_far_above_the_edge() {
    let edge = bare_edge(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(0.0, 1.4);

    let mut manifold = Manifold::new();
    contact_manifold_edge_circle(&pos1, &edge, &pos2, &circle, &mut manifold);
    assert!(manifold.points.is_empty());
}

#[test]
fn isolated_edge_collides_from_below_too() {
    let edge = bare_edge(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(0.0, -0.4);

    let mut manifold = Manifold::new();
    contact_manifold_edge_circle(&pos1, &edge, &pos2, &circle, &mut manifold);

    assert_eq!(manifold.kind, ManifoldType::Face1);
    assert_relative_eq!(manifold.local_normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-6);
}

#[test]
fn vertex_contact_without_ghost() {
    let edge = bare_edge(Point2::origin(), Point2::new(2.0, 0.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(-0.2, 0.1);

    let mut manifold = Manifold::new();
    contact_manifold_edge_circle(&pos1, &edge, &pos2, &circle, &mut manifold);

    assert_eq!(manifold.kind, ManifoldType::Circles);
    assert_eq!(manifold.points.len(), 1);
    assert_eq!(manifold.local_point, Point2::origin());
    assert_eq!(manifold.points[0].id.feature1(), FeatureId::Vertex(0));

    let world = WorldManifold::new(&manifold, &pos1, edge.radius, &pos2, circle.radius);
    // Center 0.05f32.sqrt() away from the vertex, minus the circle radius.
    assert_relative_eq!(world.separations[0], 0.05f32.sqrt() - 0.5, epsilon = 1.0e-5);
}

#[test]
fn preceding_edge_owns_the_vertex_contact() {
    let mut edge = bare_edge(Point2::origin(), Point2::new(2.0, 0.0));
    edge.vertex0 = Some(Point2::new(-2.0, 2.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();

    // The circle projects onto the preceding edge: that edge owns the
    // contact, this one stays silent.
    let mut manifold = Manifold::new();
    contact_manifold_edge_circle(
        &pos1,
        &edge,
        &Isometry2::translation(-0.2, 0.1),
        &circle,
        &mut manifold,
    );
    assert!(manifold.points.is_empty());

    // Below the joint the circle projects past the preceding edge, so the
    // vertex contact is accepted here.
    contact_manifold_edge_circle(
        &pos1,
        &edge,
        &Isometry2::translation(-0.1, -0.3),
        &circle,
        &mut manifold,
    );
    assert_eq!(manifold.kind, ManifoldType::Circles);
    assert_eq!(manifold.points.len(), 1);
}

#[test]
fn chain_joint_is_owned_by_one_edge_only() {
    // Two chained edges meeting at (1, 0); the circle floats just past the
    // joint, over the second edge.
    let chain = Polyline::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(2.0, 0.5),
    ])
    .unwrap();
    let shape1 = Shape::Polyline(chain);
    let shape2 = Shape::Circle(Circle::new(Point2::origin(), 0.5));
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(1.1, 0.3);

    let mut manifold = Manifold::new();
    contact_manifold(&pos1, &shape1, 0, &pos2, &shape2, 0, &mut manifold).unwrap();
    assert!(manifold.points.is_empty());

    contact_manifold(&pos1, &shape1, 1, &pos2, &shape2, 0, &mut manifold).unwrap();
    assert_eq!(manifold.kind, ManifoldType::Face1);
    assert_eq!(manifold.points.len(), 1);
    let expected_normal = Vector2::new(-0.5, 1.0).normalize();
    assert_relative_eq!(manifold.local_normal, expected_normal, epsilon = 1.0e-6);
}

#[test]
fn edge_end_ids_differ() {
    // Distinct ids at the two ends of an edge let a solver tell the vertex
    // contacts apart frame over frame.
    let edge = bare_edge(Point2::origin(), Point2::new(2.0, 0.0));
    let circle = Circle::new(Point2::origin(), 0.5);
    let pos1 = Isometry2::identity();

    let mut start = Manifold::new();
    contact_manifold_edge_circle(
        &pos1,
        &edge,
        &Isometry2::translation(-0.2, 0.1),
        &circle,
        &mut start,
    );
    let mut end = Manifold::new();
    contact_manifold_edge_circle(
        &pos1,
        &edge,
        &Isometry2::translation(2.2, 0.1),
        &circle,
        &mut end,
    );

    assert_eq!(start.points.len(), 1);
    assert_eq!(end.points.len(), 1);
    assert_ne!(start.points[0].id, end.points[0].id);
    assert_eq!(end.local_point, Point2::new(2.0, 0.0));
}
