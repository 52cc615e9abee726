use manifold2d::query::details::contact_manifold_polygon_polygon;
use manifold2d::query::{point_states, ContactId, Manifold, ManifoldPoint, PointState};
use manifold2d::shape::{FeatureId, Polygon};
use nalgebra::{Isometry2, Point2};

fn manifold_with_ids(ids: &[ContactId]) -> Manifold {
    let mut manifold = Manifold::new();
    for id in ids {
        manifold.points.push(ManifoldPoint {
            local_point: Point2::origin(),
            id: *id,
        });
    }
    manifold
}

#[test]
fn identical_manifolds_persist() {
    let manifold = manifold_with_ids(&[
        ContactId::new(FeatureId::Face(1), FeatureId::Vertex(3)),
        ContactId::new(FeatureId::Face(1), FeatureId::Vertex(0)),
    ]);

    let (states1, states2) = point_states(&manifold, &manifold);
    assert_eq!(states1, [PointState::Persist, PointState::Persist]);
    assert_eq!(states2, [PointState::Persist, PointState::Persist]);
}

#[test]
fn changed_points_are_added_and_removed() {
    let id_a = ContactId::new(FeatureId::Face(0), FeatureId::Vertex(0));
    let id_b = ContactId::new(FeatureId::Face(0), FeatureId::Vertex(1));
    let id_c = ContactId::new(FeatureId::Vertex(2), FeatureId::Face(0));

    let old = manifold_with_ids(&[id_a, id_b]);
    let new = manifold_with_ids(&[id_b, id_c]);

    let (states1, states2) = point_states(&old, &new);
    assert_eq!(states1, [PointState::Remove, PointState::Persist]);
    assert_eq!(states2, [PointState::Persist, PointState::Add]);
}

#[test]
fn unused_slots_are_null() {
    let single = manifold_with_ids(&[ContactId::UNKNOWN]);
    let empty = Manifold::new();

    let (states1, states2) = point_states(&single, &empty);
    assert_eq!(states1, [PointState::Remove, PointState::Null]);
    assert_eq!(states2, [PointState::Null, PointState::Null]);
}

#[test]
fn touching_squares_persist_across_a_step() {
    // Two consecutive narrow-phase frames of the same pair produce matching
    // ids, which is what lets a solver warm-start its impulses.
    let square1 = Polygon::cuboid(1.0, 1.0);
    let square2 = Polygon::cuboid(1.0, 1.0);
    let pos1 = Isometry2::identity();

    let mut before = Manifold::new();
    contact_manifold_polygon_polygon(
        &pos1,
        &square1,
        &Isometry2::translation(1.9, 0.0),
        &square2,
        &mut before,
    );
    let mut after = Manifold::new();
    contact_manifold_polygon_polygon(
        &pos1,
        &square1,
        &Isometry2::translation(1.89, 0.005),
        &square2,
        &mut after,
    );

    let (states1, states2) = point_states(&before, &after);
    assert_eq!(states1, [PointState::Persist, PointState::Persist]);
    assert_eq!(states2, [PointState::Persist, PointState::Persist]);
}
