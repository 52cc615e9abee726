use crate::math::{Isometry, Real, DEFAULT_EPSILON};
use crate::query::{DistanceInput, DistanceProxy, DistanceQuery, SimplexCache};
use crate::shape::Shape;

/// Tests whether two shapes overlap, through a distance engine.
///
/// The shapes are considered overlapping when the distance between them,
/// radii included, drops below `10.0 * DEFAULT_EPSILON`; slight numerical
/// noise around exact touching thus still reports an overlap.
pub fn test_overlap<D: DistanceQuery + ?Sized>(
    distance: &mut D,
    shape1: &Shape,
    index1: u32,
    shape2: &Shape,
    index2: u32,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
) -> bool {
    let input = DistanceInput {
        proxy1: DistanceProxy::new(shape1, index1),
        proxy2: DistanceProxy::new(shape2, index2),
        pos1: *pos1,
        pos2: *pos2,
        use_radii: true,
    };

    let mut cache = SimplexCache::default();
    let output = distance.compute_distance(&input, &mut cache);

    output.distance < 10.0 * DEFAULT_EPSILON
}
