use crate::math::{Isometry, Real, Vector};
use crate::query::clip::{clip_segment_to_line, ClipVertex};
use crate::query::contact_manifolds::{ABSOLUTE_TOL, RELATIVE_TOL};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{FeatureId, Polygon};

/// Separation of `polygon2` from the `edge1`-th face of `polygon1`.
fn edge_separation(
    polygon1: &Polygon,
    pos1: &Isometry<Real>,
    edge1: usize,
    polygon2: &Polygon,
    pos2: &Isometry<Real>,
) -> Real {
    let vertices2 = polygon2.vertices();

    // The candidate face normal, in world space then in `polygon2`'s frame.
    let normal1_world = pos1 * polygon1.normals()[edge1].into_inner();
    let normal1 = pos2.inverse_transform_vector(&normal1_world);

    // Support point of `polygon2` in the direction `-normal1`.
    let mut support = 0;
    let mut min_dot = Real::MAX;
    for (i, vertex) in vertices2.iter().enumerate() {
        let dot = vertex.coords.dot(&normal1);
        if dot < min_dot {
            min_dot = dot;
            support = i;
        }
    }

    let v1 = pos1 * polygon1.vertices()[edge1];
    let v2 = pos2 * vertices2[support];
    (v2 - v1).dot(&normal1_world)
}

/// Face of `polygon1` whose outward normal maximizes the separation of
/// `polygon2`, found by hill-climbing the hull from a centroid-based seed.
fn find_max_separation(
    polygon1: &Polygon,
    pos1: &Isometry<Real>,
    polygon2: &Polygon,
    pos2: &Isometry<Real>,
) -> (usize, Real) {
    let normals1 = polygon1.normals();
    let count1 = normals1.len();

    // Direction from `polygon1`'s centroid to `polygon2`'s, in `polygon1`'s frame.
    let delta = pos2 * polygon2.centroid() - pos1 * polygon1.centroid();
    let local_delta = pos1.inverse_transform_vector(&delta);

    // Seed the search with the face whose normal points most toward `polygon2`.
    let mut edge = 0;
    let mut max_dot = -Real::MAX;
    for (i, normal) in normals1.iter().enumerate() {
        let dot = normal.dot(&local_delta);
        if dot > max_dot {
            max_dot = dot;
            edge = i;
        }
    }

    let separation = edge_separation(polygon1, pos1, edge, polygon2, pos2);

    let prev_edge = (edge + count1 - 1) % count1;
    let prev_separation = edge_separation(polygon1, pos1, prev_edge, polygon2, pos2);

    let next_edge = (edge + 1) % count1;
    let next_separation = edge_separation(polygon1, pos1, next_edge, polygon2, pos2);

    // Walk toward increasing separations. Separation is quasi-unimodal over
    // the faces of a convex polygon so a local maximum is the global one.
    let (increment, mut best_edge, mut best_separation) =
        if prev_separation > separation && prev_separation > next_separation {
            (count1 - 1, prev_edge, prev_separation)
        } else if next_separation > separation {
            (1, next_edge, next_separation)
        } else {
            return (edge, separation);
        };

    loop {
        let edge = (best_edge + increment) % count1;
        let separation = edge_separation(polygon1, pos1, edge, polygon2, pos2);

        if separation > best_separation {
            best_edge = edge;
            best_separation = separation;
        } else {
            return (best_edge, best_separation);
        }
    }
}

/// The edge of `polygon2` most anti-parallel to the reference face normal
/// `edge1` of `polygon1`, as world-space clip vertices.
fn find_incident_edge(
    polygon1: &Polygon,
    pos1: &Isometry<Real>,
    edge1: usize,
    polygon2: &Polygon,
    pos2: &Isometry<Real>,
) -> [ClipVertex; 2] {
    let vertices2 = polygon2.vertices();
    let normals2 = polygon2.normals();

    // Reference face normal in `polygon2`'s frame.
    let normal1 = pos2.inverse_transform_vector(&(pos1 * polygon1.normals()[edge1].into_inner()));

    let mut index = 0;
    let mut min_dot = Real::MAX;
    for (i, normal) in normals2.iter().enumerate() {
        let dot = normal1.dot(normal);
        if dot < min_dot {
            min_dot = dot;
            index = i;
        }
    }

    let i1 = index;
    let i2 = (i1 + 1) % vertices2.len();

    [
        ClipVertex {
            point: pos2 * vertices2[i1],
            id: ContactId::new(FeatureId::Face(edge1 as u32), FeatureId::Vertex(i1 as u32)),
        },
        ClipVertex {
            point: pos2 * vertices2[i2],
            id: ContactId::new(FeatureId::Face(edge1 as u32), FeatureId::Vertex(i2 as u32)),
        },
    ]
}

/// Computes the contact manifold between two convex polygons.
pub fn contact_manifold_polygon_polygon(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    polygon2: &Polygon,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let total_radius = polygon1.radius() + polygon2.radius();

    let (candidate1, separation1) = find_max_separation(polygon1, pos1, polygon2, pos2);
    if separation1 > total_radius {
        return;
    }

    let (candidate2, separation2) = find_max_separation(polygon2, pos2, polygon1, pos1);
    if separation2 > total_radius {
        return;
    }

    // Keep the first polygon's face unless the second one is clearly deeper,
    // so the reference face does not oscillate between near-tied axes.
    let flipped = separation2 > RELATIVE_TOL * separation1 + ABSOLUTE_TOL;
    let (reference, incident, pos_ref, pos_inc, edge1) = if flipped {
        manifold.kind = ManifoldType::Face2;
        (polygon2, polygon1, pos2, pos1, candidate2)
    } else {
        manifold.kind = ManifoldType::Face1;
        (polygon1, polygon2, pos1, pos2, candidate1)
    };

    let incident_edge = find_incident_edge(reference, pos_ref, edge1, incident, pos_inc);

    let vertices1 = reference.vertices();
    let iv1 = edge1;
    let iv2 = (edge1 + 1) % vertices1.len();

    let v11 = vertices1[iv1];
    let v12 = vertices1[iv2];

    let local_tangent = (v12 - v11).normalize();
    let local_normal = Vector::new(local_tangent.y, -local_tangent.x);
    let plane_point = na::center(&v11, &v12);

    let tangent = pos_ref * local_tangent;
    let normal = Vector::new(tangent.y, -tangent.x);

    let v11 = pos_ref * v11;
    let v12 = pos_ref * v12;

    let front_offset = normal.dot(&v11.coords);

    // Side planes, extruded by the skin thickness.
    let side_offset1 = -tangent.dot(&v11.coords) + total_radius;
    let side_offset2 = tangent.dot(&v12.coords) + total_radius;

    let Ok(clipped) = clip_segment_to_line(&incident_edge, &-tangent, side_offset1, iv1 as u32)
        .into_inner()
    else {
        log::debug!("Roundoff in the side clipping lost the contact points.");
        return;
    };
    let Ok(clipped) =
        clip_segment_to_line(&clipped, &tangent, side_offset2, iv2 as u32).into_inner()
    else {
        log::debug!("Roundoff in the side clipping lost the contact points.");
        return;
    };

    manifold.local_normal = local_normal;
    manifold.local_point = plane_point;

    for clip_vertex in &clipped {
        let separation = normal.dot(&clip_vertex.point.coords) - front_offset;

        if separation <= total_radius {
            let id = if flipped {
                clip_vertex.id.swapped()
            } else {
                clip_vertex.id
            };
            manifold.points.push(ManifoldPoint {
                local_point: pos_inc.inverse_transform_point(&clip_vertex.point),
                id,
            });
        }
    }
}
