use crate::math::{Isometry, Real};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::Circle;

/// Computes the contact manifold between two circles.
pub fn contact_manifold_circle_circle(
    pos1: &Isometry<Real>,
    circle1: &Circle,
    pos2: &Isometry<Real>,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let center1 = pos1 * circle1.center;
    let center2 = pos2 * circle2.center;
    let sum_radius = circle1.radius + circle2.radius;

    if na::distance_squared(&center1, &center2) > sum_radius * sum_radius {
        return;
    }

    manifold.kind = ManifoldType::Circles;
    manifold.local_point = circle1.center;
    manifold.points.push(ManifoldPoint {
        local_point: circle2.center,
        id: ContactId::UNKNOWN,
    });
}
