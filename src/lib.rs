/*!
manifold2d
========

**manifold2d** is a 2-dimensional contact manifold generation library written with
the rust programming language.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/manifold2d/0.1.0")]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate either;
pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry2, Point2, Translation2, UnitVector2, Vector2};
    use na::UnitComplex;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The maximum number of points a contact manifold can hold. Two convex
    /// shapes touch along at most a segment in 2D, so two points always suffice.
    pub const MAX_MANIFOLD_POINTS: usize = 2;

    /// The length below which two positions are considered coincident for
    /// collision purposes.
    pub const LINEAR_SLOP: Real = 0.005;

    /// The angular tolerance applied when testing a separating axis against
    /// the admissible normal range of a one-sided edge.
    pub const ANGULAR_SLOP: Real = 2.0 / 180.0 * std::f64::consts::PI as Real;

    /// The default skin radius of polygons, edges, and polyline children.
    pub const POLYGON_RADIUS: Real = 2.0 * LINEAR_SLOP;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry2 as Isometry;

    /// The rotation matrix type.
    pub type Rotation<N> = UnitComplex<N>;

    /// The translation type.
    pub use Translation2 as Translation;
}
