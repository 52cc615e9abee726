use crate::math::{Point, Real};

/// A circle shape.
///
/// The center is expressed in the local frame of the shape, so a circle can be
/// offset from the body position it is attached to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }
}
