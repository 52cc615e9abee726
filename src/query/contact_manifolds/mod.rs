//! Contact manifold computation between pairs of shapes.
//!
//! A manifold carries up to two contact points, their shared normal
//! information, and per-point [`ContactId`]s stable across frames, so a
//! constraint solver can match points between successive updates and carry
//! accumulated impulses over (see [`point_states`]).

pub use self::contact_id::ContactId;
pub use self::contact_manifold_shape_shape::contact_manifold;
pub use self::contact_manifolds_circle_circle::contact_manifold_circle_circle;
pub use self::contact_manifolds_edge_circle::contact_manifold_edge_circle;
pub use self::contact_manifolds_edge_polygon::EdgePolygonCollider;
pub use self::contact_manifolds_polygon_circle::contact_manifold_polygon_circle;
pub use self::contact_manifolds_polygon_polygon::contact_manifold_polygon_polygon;
pub use self::manifold::{Manifold, ManifoldPoint, ManifoldType, WorldManifold};
pub use self::point_states::{point_states, PointState};

/// Relative part of the hysteresis rule keeping a reference face from
/// oscillating between two near-tied separating axes.
pub(crate) const RELATIVE_TOL: crate::math::Real = 0.98;
/// Absolute part of the same hysteresis rule.
pub(crate) const ABSOLUTE_TOL: crate::math::Real = 0.001;

mod contact_id;
mod contact_manifold_shape_shape;
mod contact_manifolds_circle_circle;
mod contact_manifolds_edge_circle;
mod contact_manifolds_edge_polygon;
mod contact_manifolds_polygon_circle;
mod contact_manifolds_polygon_polygon;
mod manifold;
mod point_states;
