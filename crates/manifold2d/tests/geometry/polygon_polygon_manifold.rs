use approx::assert_relative_eq;
use manifold2d::query::details::contact_manifold_polygon_polygon;
use manifold2d::query::{Manifold, ManifoldType, WorldManifold};
use manifold2d::shape::Polygon;
use nalgebra::{Isometry2, Point2, Vector2};

fn bare_cuboid(half_width: f32, half_height: f32) -> Polygon {
    let mut polygon = Polygon::cuboid(half_width, half_height);
    polygon.set_radius(0.0);
    polygon
}

#[test]
fn overlapping_squares_share_a_face() {
    let square1 = bare_cuboid(1.0, 1.0);
    let square2 = bare_cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(1.9, 0.0);

    let mut manifold = Manifold::new();
    contact_manifold_polygon_polygon(&pos1, &square1, &pos2, &square2, &mut manifold);

    assert_eq!(manifold.kind, ManifoldType::Face1);
    assert_eq!(manifold.points.len(), 2);
    assert_relative_eq!(manifold.local_normal, Vector2::new(1.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(manifold.local_point, Point2::new(1.0, 0.0), epsilon = 1.0e-6);

    // The contact points are the corners of the incident face, expressed in
    // the second square's frame.
    assert_relative_eq!(
        manifold.points[0].local_point,
        Point2::new(-1.0, 1.0),
        epsilon = 1.0e-5
    );
    assert_relative_eq!(
        manifold.points[1].local_point,
        Point2::new(-1.0, -1.0),
        epsilon = 1.0e-5
    );
    assert_ne!(manifold.points[0].id, manifold.points[1].id);

    let world = WorldManifold::new(&manifold, &pos1, 0.0, &pos2, 0.0);
    assert_relative_eq!(world.normal, Vector2::new(1.0, 0.0), epsilon = 1.0e-6);
    for (point, separation) in world.points.iter().zip(world.separations.iter()) {
        assert_relative_eq!(point.x, 0.95, epsilon = 1.0e-5);
        assert_relative_eq!(*separation, -0.1, epsilon = 1.0e-5);
    }
}

#[test]
fn separated_squares_produce_nothing() {
    let square1 = bare_cuboid(1.0, 1.0);
    let square2 = bare_cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(2.5, 0.0);

    let mut manifold = Manifold::new();
    contact_manifold_polygon_polygon(&pos1, &square1, &pos2, &square2, &mut manifold);
    assert!(manifold.points.is_empty());
}

#[test]
fn skin_radius_keeps_nearby_squares_in_contact() {
    // Default skins, 0.01 each: cores 0.015 apart still count as touching.
    let square1 = Polygon::cuboid(1.0, 1.0);
    let square2 = Polygon::cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(2.015, 0.0);

    let mut manifold = Manifold::new();
    contact_manifold_polygon_polygon(&pos1, &square1, &pos2, &square2, &mut manifold);
    assert_eq!(manifold.points.len(), 2);

    let world = WorldManifold::new(&manifold, &pos1, square1.radius(), &pos2, square2.radius());
    for separation in &world.separations {
        assert_relative_eq!(*separation, -0.005, epsilon = 1.0e-5);
    }

    // Beyond both skins, no contact at all.
    let pos2 = Isometry2::translation(2.05, 0.0);
    contact_manifold_polygon_polygon(&pos1, &square1, &pos2, &square2, &mut manifold);
    assert!(manifold.points.is_empty());
}

#[test]
fn corner_on_face_flips_the_reference() {
    // A small diamond poking its corner into the top face of a big square:
    // the square's face is clearly the deeper axis, so it becomes the
    // reference even though it belongs to the second shape.
    let mut diamond = Polygon::from_convex_polyline(vec![
        Point2::new(0.0, -0.3),
        Point2::new(0.3, 0.0),
        Point2::new(0.0, 0.3),
        Point2::new(-0.3, 0.0),
    ])
    .unwrap();
    diamond.set_radius(0.0);
    let big = bare_cuboid(2.0, 2.0);

    let pos1 = Isometry2::translation(0.0, 2.2);
    let pos2 = Isometry2::identity();

    let mut manifold = Manifold::new();
    contact_manifold_polygon_polygon(&pos1, &diamond, &pos2, &big, &mut manifold);

    assert_eq!(manifold.kind, ManifoldType::Face2);
    assert_eq!(manifold.points.len(), 1);
    assert_relative_eq!(manifold.local_normal, Vector2::new(0.0, 1.0), epsilon = 1.0e-6);
    // The single point is the diamond's bottom corner, in the diamond's frame.
    assert_relative_eq!(
        manifold.points[0].local_point,
        Point2::new(0.0, -0.3),
        epsilon = 1.0e-5
    );

    let world = WorldManifold::new(&manifold, &pos1, 0.0, &pos2, 0.0);
    assert_relative_eq!(world.normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-6);
    assert_relative_eq!(world.points[0], Point2::new(0.0, 1.95), epsilon = 1.0e-5);
    assert_relative_eq!(world.separations[0], -0.1, epsilon = 1.0e-5);
}

#[test]
fn swapped_arguments_agree_in_world_space() {
    let square1 = bare_cuboid(1.0, 1.0);
    let square2 = bare_cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();
    let pos2 = Isometry2::translation(1.9, 0.0);

    let mut forward = Manifold::new();
    contact_manifold_polygon_polygon(&pos1, &square1, &pos2, &square2, &mut forward);
    let mut reversed = Manifold::new();
    contact_manifold_polygon_polygon(&pos2, &square2, &pos1, &square1, &mut reversed);

    let world_forward = WorldManifold::new(&forward, &pos1, 0.0, &pos2, 0.0);
    let world_reversed = WorldManifold::new(&reversed, &pos2, 0.0, &pos1, 0.0);

    assert_relative_eq!(world_forward.normal, -world_reversed.normal, epsilon = 1.0e-6);
    assert_eq!(world_forward.points.len(), 2);
    assert_eq!(world_reversed.points.len(), 2);
    // Same contact points, traversed from the other incident face.
    assert_relative_eq!(world_forward.points[0], world_reversed.points[1], epsilon = 1.0e-5);
    assert_relative_eq!(world_forward.points[1], world_reversed.points[0], epsilon = 1.0e-5);
    for (s1, s2) in world_forward
        .separations
        .iter()
        .zip(world_reversed.separations.iter().rev())
    {
        assert_relative_eq!(*s1, *s2, epsilon = 1.0e-5);
    }
}

#[test]
fn contact_ids_are_stable_across_frames() {
    // Default skins: the side planes are extruded by the skin thickness, so
    // a small tangential drift does not re-label the contact points.
    let square1 = Polygon::cuboid(1.0, 1.0);
    let square2 = Polygon::cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();

    let mut manifold1 = Manifold::new();
    contact_manifold_polygon_polygon(
        &pos1,
        &square1,
        &Isometry2::translation(1.9, 0.0),
        &square2,
        &mut manifold1,
    );
    let mut manifold2 = Manifold::new();
    contact_manifold_polygon_polygon(
        &pos1,
        &square1,
        &Isometry2::translation(1.88, 0.005),
        &square2,
        &mut manifold2,
    );

    assert_eq!(manifold1.points.len(), 2);
    assert_eq!(manifold2.points.len(), 2);
    for (p1, p2) in manifold1.points.iter().zip(manifold2.points.iter()) {
        assert_eq!(p1.id, p2.id);
    }
}
