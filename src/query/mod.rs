//! Contact manifold queries between pairs of shapes.
//!
//! # General cases
//! The most general operations provided by this module are:
//!
//! * [`query::contact_manifold()`] to compute the contact manifold between two shapes.
//! * [`query::point_states()`] to match the points of two successive manifolds by contact id.
//! * [`query::test_overlap()`] to determine if two shapes overlap, through a distance engine.
//! * [`WorldManifold::new()`] to project a manifold back into world space.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are versions of
//! [`query::contact_manifold()`] specialized for one pair of shape types
//! known at compile-time, e.g. `contact_manifold_polygon_circle`. They are
//! less convenient but skip the shape dispatch.
//!
//! [`query::contact_manifold()`]: contact_manifold()
//! [`query::point_states()`]: point_states()
//! [`query::test_overlap()`]: test_overlap()

pub use self::contact_manifolds::{
    contact_manifold, point_states, ContactId, EdgePolygonCollider, Manifold, ManifoldPoint,
    ManifoldType, PointState, WorldManifold,
};
pub use self::distance::{
    DistanceInput, DistanceOutput, DistanceProxy, DistanceQuery, SimplexCache,
};
pub use self::error::Unsupported;
pub use self::overlap::test_overlap;

mod clip;
mod contact_manifolds;
mod distance;
mod error;
mod overlap;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::contact_manifolds::{
        contact_manifold_circle_circle, contact_manifold_edge_circle,
        contact_manifold_polygon_circle, contact_manifold_polygon_polygon,
    };
}
