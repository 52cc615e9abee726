use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{Circle, Polygon};

/// Computes the contact manifold between a convex polygon and a circle.
pub fn contact_manifold_polygon_circle(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    circle2: &Circle,
    manifold: &mut Manifold,
) {
    manifold.clear();

    // Circle center in the polygon's frame.
    let center = pos1.inverse_transform_point(&(pos2 * circle2.center));

    let vertices = polygon1.vertices();
    let normals = polygon1.normals();
    let radius = polygon1.radius() + circle2.radius;

    // Face of maximum separation.
    let mut best = 0;
    let mut separation = -Real::MAX;
    for (i, (vertex, normal)) in vertices.iter().zip(normals.iter()).enumerate() {
        let s = normal.dot(&(center - *vertex));
        if s > radius {
            return;
        }
        if s > separation {
            separation = s;
            best = i;
        }
    }

    let v1 = vertices[best];
    let v2 = vertices[(best + 1) % vertices.len()];

    // With the center inside the polygon the barycentric test below is
    // meaningless, keep the deepest face.
    if separation < DEFAULT_EPSILON {
        manifold.kind = ManifoldType::Face1;
        manifold.local_normal = *normals[best];
        manifold.local_point = na::center(&v1, &v2);
        manifold.points.push(ManifoldPoint {
            local_point: circle2.center,
            id: ContactId::UNKNOWN,
        });
        return;
    }

    // Voronoi region of the face the center projects on.
    let u1 = (center - v1).dot(&(v2 - v1));
    let u2 = (center - v2).dot(&(v1 - v2));

    if u1 <= 0.0 {
        if na::distance_squared(&center, &v1) > radius * radius {
            return;
        }

        manifold.kind = ManifoldType::Face1;
        manifold.local_normal = (center - v1).normalize();
        manifold.local_point = v1;
    } else if u2 <= 0.0 {
        if na::distance_squared(&center, &v2) > radius * radius {
            return;
        }

        manifold.kind = ManifoldType::Face1;
        manifold.local_normal = (center - v2).normalize();
        manifold.local_point = v2;
    } else {
        let face_center = na::center(&v1, &v2);
        if (center - face_center).dot(&normals[best]) > radius {
            return;
        }

        manifold.kind = ManifoldType::Face1;
        manifold.local_normal = *normals[best];
        manifold.local_point = face_center;
    }

    manifold.points.push(ManifoldPoint {
        local_point: circle2.center,
        id: ContactId::UNKNOWN,
    });
}
