use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON, MAX_MANIFOLD_POINTS};
use crate::query::ContactId;
use arrayvec::ArrayVec;

/// The way the points of a [`Manifold`] were generated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ManifoldType {
    /// The manifold holds the single contact point between two circles.
    Circles,
    /// The points were clipped against a reference face of the first shape.
    Face1,
    /// The points were clipped against a reference face of the second shape.
    Face2,
}

/// A single contact point of a contact manifold.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManifoldPoint {
    /// The contact point in the local space of the incident shape.
    pub local_point: Point<Real>,
    /// The identity of this contact point, stable across frames.
    pub id: ContactId,
}

/// A contact manifold between two shapes.
///
/// A manifold describes up to [`MAX_MANIFOLD_POINTS`] contact points sharing
/// the same normal information, stored in a form that does not depend on the
/// world position of either shape so it stays meaningful while the shapes
/// move:
///
/// - For `Circles` manifolds, `local_point` is the contact source point on
///   the first shape (a circle center, or the edge vertex a circle rests on)
///   in the first shape's local frame, and the single point stores the second
///   circle's center in the second shape's local frame. `local_normal` is
///   meaningless.
/// - For `Face1` manifolds, `local_normal` and `local_point` are the
///   reference face normal and a point on that face, in the first shape's
///   local frame; each point stores a clipped point of the incident (second)
///   shape in the second shape's local frame.
/// - For `Face2` manifolds the roles are exchanged: the reference face
///   belongs to the second shape, and the points live in the first shape's
///   local frame.
///
/// Use [`WorldManifold`] to recover world-space positions, a world normal,
/// and penetration depths from a manifold and the positions of both shapes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Manifold {
    /// The contact points of this manifold.
    pub points: ArrayVec<ManifoldPoint, MAX_MANIFOLD_POINTS>,
    /// The reference face normal, in the reference shape's local frame.
    pub local_normal: Vector<Real>,
    /// The reference point of this manifold, in the reference shape's local frame.
    pub local_point: Point<Real>,
    /// The way the points of this manifold were generated.
    pub kind: ManifoldType,
}

impl Default for Manifold {
    fn default() -> Self {
        Manifold {
            points: ArrayVec::new(),
            local_normal: Vector::zeros(),
            local_point: Point::origin(),
            kind: ManifoldType::Circles,
        }
    }
}

impl Manifold {
    /// Creates a new empty contact manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all the contact points from `self`.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Re-expresses this manifold with the roles of both shapes exchanged.
    ///
    /// A manifold computed for the pair `(shape2, shape1)` reads, after the
    /// flip, exactly as if it had been computed for `(shape1, shape2)`.
    pub fn flip(&mut self) {
        self.kind = match self.kind {
            ManifoldType::Circles => {
                if let Some(point) = self.points.first_mut() {
                    std::mem::swap(&mut self.local_point, &mut point.local_point);
                }
                ManifoldType::Circles
            }
            ManifoldType::Face1 => ManifoldType::Face2,
            ManifoldType::Face2 => ManifoldType::Face1,
        };

        for point in &mut self.points {
            point.id = point.id.swapped();
        }
    }
}

/// A contact manifold re-expressed in world space.
///
/// This is recomputed from a [`Manifold`] whenever world positions are
/// needed, rather than stored, so a manifold can outlive the positions it
/// was generated with.
#[derive(Clone, Debug)]
pub struct WorldManifold {
    /// The world-space contact normal, pointing from the first shape toward
    /// the second.
    pub normal: Vector<Real>,
    /// The world-space contact points, halfway between both surfaces.
    pub points: ArrayVec<Point<Real>, MAX_MANIFOLD_POINTS>,
    /// The signed distance between both surfaces at each contact point.
    /// Negative values mean the surfaces overlap there.
    pub separations: ArrayVec<Real, MAX_MANIFOLD_POINTS>,
}

impl WorldManifold {
    /// Projects `manifold` into world space.
    ///
    /// `radius1` and `radius2` are the occupied radii of both shapes: the
    /// actual radius for a circle, the skin radius for polygons and edges.
    pub fn new(
        manifold: &Manifold,
        pos1: &Isometry<Real>,
        radius1: Real,
        pos2: &Isometry<Real>,
        radius2: Real,
    ) -> Self {
        let mut result = WorldManifold {
            normal: Vector::zeros(),
            points: ArrayVec::new(),
            separations: ArrayVec::new(),
        };

        if manifold.points.is_empty() {
            return result;
        }

        match manifold.kind {
            ManifoldType::Circles => {
                let point1 = pos1 * manifold.local_point;
                let point2 = pos2 * manifold.points[0].local_point;
                let delta = point2 - point1;
                result.normal = if delta.norm_squared() > DEFAULT_EPSILON * DEFAULT_EPSILON {
                    delta.normalize()
                } else {
                    Vector::x()
                };

                let c1 = point1 + result.normal * radius1;
                let c2 = point2 - result.normal * radius2;
                result.points.push(na::center(&c1, &c2));
                result.separations.push((c2 - c1).dot(&result.normal));
            }
            ManifoldType::Face1 => {
                result.normal = pos1 * manifold.local_normal;
                let plane_point = pos1 * manifold.local_point;

                for point in &manifold.points {
                    let clip_point = pos2 * point.local_point;
                    let c1 = clip_point
                        + result.normal
                            * (radius1 - (clip_point - plane_point).dot(&result.normal));
                    let c2 = clip_point - result.normal * radius2;
                    result.points.push(na::center(&c1, &c2));
                    result.separations.push((c2 - c1).dot(&result.normal));
                }
            }
            ManifoldType::Face2 => {
                result.normal = pos2 * manifold.local_normal;
                let plane_point = pos2 * manifold.local_point;

                for point in &manifold.points {
                    let clip_point = pos1 * point.local_point;
                    let c2 = clip_point
                        + result.normal
                            * (radius2 - (clip_point - plane_point).dot(&result.normal));
                    let c1 = clip_point - result.normal * radius1;
                    result.points.push(na::center(&c1, &c2));
                    result.separations.push((c1 - c2).dot(&result.normal));
                }

                // The manifold's normal points toward the first shape here.
                result.normal = -result.normal;
            }
        }

        result
    }
}
