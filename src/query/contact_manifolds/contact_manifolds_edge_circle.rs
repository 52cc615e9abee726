use crate::math::{Isometry, Point, Real, Vector};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{Circle, Edge, FeatureId};

/// Computes the contact manifold between a one-sided edge and a circle.
pub fn contact_manifold_edge_circle(
    pos1: &Isometry<Real>,
    edge1: &Edge,
    pos2: &Isometry<Real>,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    // Circle center in the edge's frame.
    let q = pos1.inverse_transform_point(&(pos2 * circle2.center));

    let a = edge1.vertex1;
    let b = edge1.vertex2;
    let e = b - a;

    // Barycentric coordinates of the projection of `q` onto the edge.
    let u = e.dot(&(b - q));
    let v = e.dot(&(q - a));

    let radius = edge1.radius + circle2.radius;

    // Region A: the circle is past `vertex1`.
    if v <= 0.0 {
        if na::distance_squared(&q, &a) > radius * radius {
            return;
        }

        // The preceding edge owns this contact if `q` projects inside it.
        if let Some(v0) = edge1.vertex0 {
            let e1 = a - v0;
            if e1.dot(&(a - q)) > 0.0 {
                return;
            }
        }

        manifold.kind = ManifoldType::Circles;
        manifold.local_normal = Vector::zeros();
        manifold.local_point = a;
        manifold.points.push(ManifoldPoint {
            local_point: circle2.center,
            id: ContactId::new(FeatureId::Vertex(0), FeatureId::Vertex(0)),
        });
        return;
    }

    // Region B: the circle is past `vertex2`.
    if u <= 0.0 {
        if na::distance_squared(&q, &b) > radius * radius {
            return;
        }

        // The following edge owns this contact if `q` projects inside it.
        if let Some(v3) = edge1.vertex3 {
            let e2 = v3 - b;
            if e2.dot(&(q - b)) > 0.0 {
                return;
            }
        }

        manifold.kind = ManifoldType::Circles;
        manifold.local_normal = Vector::zeros();
        manifold.local_point = b;
        manifold.points.push(ManifoldPoint {
            local_point: circle2.center,
            id: ContactId::new(FeatureId::Vertex(1), FeatureId::Vertex(0)),
        });
        return;
    }

    // Region AB: the circle faces the edge interior.
    let den = e.norm_squared();
    debug_assert!(den > 0.0);
    let p = Point::from((a.coords * u + b.coords * v) / den);
    if na::distance_squared(&q, &p) > radius * radius {
        return;
    }

    // Face the circle, whichever side of the edge it is on.
    let mut normal = Vector::new(-e.y, e.x);
    if normal.dot(&(q - a)) < 0.0 {
        normal = -normal;
    }

    manifold.kind = ManifoldType::Face1;
    manifold.local_normal = normal.normalize();
    manifold.local_point = a;
    manifold.points.push(ManifoldPoint {
        local_point: circle2.center,
        id: ContactId::new(FeatureId::Face(0), FeatureId::Vertex(0)),
    });
}
