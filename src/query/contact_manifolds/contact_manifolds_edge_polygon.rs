use crate::math::{Isometry, Point, Real, Vector, ANGULAR_SLOP, DEFAULT_EPSILON};
use crate::query::clip::{clip_segment_to_line, ClipVertex};
use crate::query::contact_manifolds::{ABSOLUTE_TOL, RELATIVE_TOL};
use crate::query::{ContactId, Manifold, ManifoldPoint, ManifoldType};
use crate::shape::{Edge, FeatureId, Polygon};
use na::Unit;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum AxisKind {
    Edge,
    Polygon,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Axis {
    kind: AxisKind,
    index: usize,
    separation: Real,
}

/// Scratch state for edge/polygon manifold computation.
///
/// One instance holds the buffers of a single [`collide`][Self::collide]
/// call, so a narrow phase can keep an instance per worker and reuse it
/// across pairs instead of reallocating. Nothing observable persists between
/// calls, but a call mutates the buffers: concurrent use of one instance is
/// not possible, each worker owns its own.
#[derive(Clone, Debug)]
pub struct EdgePolygonCollider {
    v1: Point<Real>,
    v2: Point<Real>,
    normal: Vector<Real>,
    lower_limit: Vector<Real>,
    upper_limit: Vector<Real>,
    front: bool,
    radius: Real,
    vertices2: SmallVec<[Point<Real>; 8]>,
    normals2: SmallVec<[Vector<Real>; 8]>,
}

impl Default for EdgePolygonCollider {
    fn default() -> Self {
        EdgePolygonCollider {
            v1: Point::origin(),
            v2: Point::origin(),
            normal: Vector::zeros(),
            lower_limit: Vector::zeros(),
            upper_limit: Vector::zeros(),
            front: false,
            radius: 0.0,
            vertices2: SmallVec::new(),
            normals2: SmallVec::new(),
        }
    }
}

impl EdgePolygonCollider {
    /// Creates a collider with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the contact manifold between a one-sided edge and a convex
    /// polygon.
    ///
    /// The edge's ghost vertices, when present, restrict the admissible
    /// contact normals so a polygon sliding over the joint between two
    /// chained edges never catches on the joint itself.
    pub fn collide(
        &mut self,
        pos1: &Isometry<Real>,
        edge1: &Edge,
        pos2: &Isometry<Real>,
        polygon2: &Polygon,
        manifold: &mut Manifold,
    ) {
        manifold.clear();

        // Work in the edge's frame.
        let xf = pos1.inv_mul(pos2);
        let centroid2 = xf * polygon2.centroid();

        let v1 = edge1.vertex1;
        let v2 = edge1.vertex2;

        let Some(direction1) = Unit::try_new(v2 - v1, DEFAULT_EPSILON) else {
            log::debug!("Edge/polygon contact query on a degenerate edge, ignoring.");
            return;
        };
        let normal1 = Vector::new(direction1.y, -direction1.x);
        let offset1 = normal1.dot(&(centroid2 - v1));

        // Neighboring edge normals, their convexity at the shared vertex, and
        // the centroid offset from their planes. A degenerate neighbor is
        // treated as absent.
        let prev = edge1.vertex0.and_then(|v0| {
            Unit::try_new(v1 - v0, DEFAULT_EPSILON).map(|direction0| {
                let normal0 = Vector::new(direction0.y, -direction0.x);
                (
                    normal0,
                    direction0.perp(&direction1) >= 0.0,
                    normal0.dot(&(centroid2 - v0)),
                )
            })
        });
        let next = edge1.vertex3.and_then(|v3| {
            Unit::try_new(v3 - v2, DEFAULT_EPSILON).map(|direction2| {
                let normal2 = Vector::new(direction2.y, -direction2.x);
                (
                    normal2,
                    direction1.perp(&direction2) >= 0.0,
                    normal2.dot(&(centroid2 - v2)),
                )
            })
        });

        // Front/back classification and admissible normal range. The table
        // is asymmetric on purpose; it encodes which neighbor owns the
        // normals at a convex joint.
        let (front, normal, lower_limit, upper_limit) = match (prev, next) {
            (Some((normal0, convex1, offset0)), Some((normal2, convex2, offset2))) => {
                if convex1 && convex2 {
                    let front = offset0 >= 0.0 || offset1 >= 0.0 || offset2 >= 0.0;
                    if front {
                        (front, normal1, normal0, normal2)
                    } else {
                        (front, -normal1, -normal1, -normal1)
                    }
                } else if convex1 {
                    let front = offset0 >= 0.0 || (offset1 >= 0.0 && offset2 >= 0.0);
                    if front {
                        (front, normal1, normal0, normal1)
                    } else {
                        (front, -normal1, -normal2, -normal1)
                    }
                } else if convex2 {
                    let front = offset2 >= 0.0 || (offset0 >= 0.0 && offset1 >= 0.0);
                    if front {
                        (front, normal1, normal1, normal2)
                    } else {
                        (front, -normal1, -normal1, -normal0)
                    }
                } else {
                    let front = offset0 >= 0.0 && offset1 >= 0.0 && offset2 >= 0.0;
                    if front {
                        (front, normal1, normal1, normal1)
                    } else {
                        (front, -normal1, -normal2, -normal0)
                    }
                }
            }
            (Some((normal0, convex1, offset0)), None) => {
                if convex1 {
                    let front = offset0 >= 0.0 || offset1 >= 0.0;
                    if front {
                        (front, normal1, normal0, -normal1)
                    } else {
                        (front, -normal1, normal1, -normal1)
                    }
                } else {
                    let front = offset0 >= 0.0 && offset1 >= 0.0;
                    if front {
                        (front, normal1, normal1, -normal1)
                    } else {
                        (front, -normal1, normal1, -normal0)
                    }
                }
            }
            (None, Some((normal2, convex2, offset2))) => {
                if convex2 {
                    let front = offset1 >= 0.0 || offset2 >= 0.0;
                    if front {
                        (front, normal1, -normal1, normal2)
                    } else {
                        (front, -normal1, -normal1, normal1)
                    }
                } else {
                    let front = offset1 >= 0.0 && offset2 >= 0.0;
                    if front {
                        (front, normal1, -normal1, normal1)
                    } else {
                        (front, -normal1, -normal2, normal1)
                    }
                }
            }
            (None, None) => {
                // No neighbors: the edge collides on both sides.
                let front = offset1 >= 0.0;
                if front {
                    (front, normal1, -normal1, -normal1)
                } else {
                    (front, -normal1, normal1, normal1)
                }
            }
        };

        self.v1 = v1;
        self.v2 = v2;
        self.normal = normal;
        self.lower_limit = lower_limit;
        self.upper_limit = upper_limit;
        self.front = front;
        self.radius = edge1.radius + polygon2.radius();

        self.vertices2.clear();
        self.normals2.clear();
        for vertex in polygon2.vertices() {
            self.vertices2.push(xf * *vertex);
        }
        for normal2 in polygon2.normals() {
            self.normals2.push(xf * normal2.into_inner());
        }

        let edge_axis = self.compute_edge_separation();
        if edge_axis.separation > self.radius {
            return;
        }

        let polygon_axis = self.compute_polygon_separation();
        if let Some(axis) = polygon_axis {
            if axis.separation > self.radius {
                return;
            }
        }

        // Same hysteresis as the polygon/polygon case: the polygon face must
        // beat the edge clearly to become the reference.
        let primary = match polygon_axis {
            Some(axis) if axis.separation > RELATIVE_TOL * edge_axis.separation + ABSOLUTE_TOL => {
                axis
            }
            _ => edge_axis,
        };

        let count2 = self.vertices2.len();
        let (incident_edge, i1, i2, ref_v1, ref_v2, ref_normal) =
            if primary.kind == AxisKind::Edge {
                manifold.kind = ManifoldType::Face1;

                // The polygon face most anti-parallel to the edge normal is
                // the incident one.
                let mut best = 0;
                let mut best_dot = Real::MAX;
                for (i, normal2) in self.normals2.iter().enumerate() {
                    let dot = self.normal.dot(normal2);
                    if dot < best_dot {
                        best_dot = dot;
                        best = i;
                    }
                }

                let i1 = best;
                let i2 = (i1 + 1) % count2;
                let incident = [
                    ClipVertex {
                        point: self.vertices2[i1],
                        id: ContactId::new(FeatureId::Face(0), FeatureId::Vertex(i1 as u32)),
                    },
                    ClipVertex {
                        point: self.vertices2[i2],
                        id: ContactId::new(FeatureId::Face(0), FeatureId::Vertex(i2 as u32)),
                    },
                ];

                if self.front {
                    (incident, 0, 1, v1, v2, normal1)
                } else {
                    (incident, 1, 0, v2, v1, -normal1)
                }
            } else {
                manifold.kind = ManifoldType::Face2;

                let id = ContactId::new(
                    FeatureId::Vertex(0),
                    FeatureId::Face(primary.index as u32),
                );
                let incident = [
                    ClipVertex { point: v1, id },
                    ClipVertex { point: v2, id },
                ];

                let i1 = primary.index;
                let i2 = (i1 + 1) % count2;
                (
                    incident,
                    i1 as u32,
                    i2 as u32,
                    self.vertices2[i1],
                    self.vertices2[i2],
                    self.normals2[i1],
                )
            };

        let side_normal1 = Vector::new(ref_normal.y, -ref_normal.x);
        let side_offset1 = side_normal1.dot(&ref_v1.coords);
        let side_normal2 = -side_normal1;
        let side_offset2 = side_normal2.dot(&ref_v2.coords);

        let Ok(clipped) =
            clip_segment_to_line(&incident_edge, &side_normal1, side_offset1, i1).into_inner()
        else {
            return;
        };
        let Ok(clipped) =
            clip_segment_to_line(&clipped, &side_normal2, side_offset2, i2).into_inner()
        else {
            return;
        };

        if manifold.kind == ManifoldType::Face1 {
            manifold.local_normal = ref_normal;
            manifold.local_point = ref_v1;
        } else {
            // The polygon's own local data, not the edge-frame copies.
            manifold.local_normal = polygon2.normals()[primary.index].into_inner();
            manifold.local_point = polygon2.vertices()[primary.index];
        }

        for clip_vertex in &clipped {
            let separation = ref_normal.dot(&(clip_vertex.point - ref_v1));

            if separation <= self.radius {
                let (local_point, id) = if manifold.kind == ManifoldType::Face1 {
                    (
                        xf.inverse_transform_point(&clip_vertex.point),
                        clip_vertex.id,
                    )
                } else {
                    (clip_vertex.point, clip_vertex.id.swapped())
                };
                manifold.points.push(ManifoldPoint { local_point, id });
            }
        }
    }

    /// Separation of the polygon from the edge's own (front or back) normal.
    fn compute_edge_separation(&self) -> Axis {
        let mut separation = Real::MAX;

        for vertex in &self.vertices2 {
            let s = self.normal.dot(&(vertex - self.v1));
            if s < separation {
                separation = s;
            }
        }

        Axis {
            kind: AxisKind::Edge,
            index: usize::from(!self.front),
            separation,
        }
    }

    /// Best polygon-face axis whose normal lies inside the admissible range.
    ///
    /// Returns early with the offending axis when some face already
    /// separates the shapes; the caller bails out on it.
    fn compute_polygon_separation(&self) -> Option<Axis> {
        let mut best: Option<Axis> = None;
        let perp = Vector::new(-self.normal.y, self.normal.x);

        for (i, vertex) in self.vertices2.iter().enumerate() {
            let n = -self.normals2[i];

            let s1 = n.dot(&(vertex - self.v1));
            let s2 = n.dot(&(vertex - self.v2));
            let s = s1.min(s2);

            if s > self.radius {
                return Some(Axis {
                    kind: AxisKind::Polygon,
                    index: i,
                    separation: s,
                });
            }

            // Reject normals outside the range allowed by the adjacency
            // classification.
            if n.dot(&perp) >= 0.0 {
                if (n - self.upper_limit).dot(&self.normal) < -ANGULAR_SLOP {
                    continue;
                }
            } else if (n - self.lower_limit).dot(&self.normal) < -ANGULAR_SLOP {
                continue;
            }

            if best.map_or(true, |axis| s > axis.separation) {
                best = Some(Axis {
                    kind: AxisKind::Polygon,
                    index: i,
                    separation: s,
                });
            }
        }

        best
    }
}
