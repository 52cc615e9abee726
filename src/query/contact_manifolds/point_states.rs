use crate::math::MAX_MANIFOLD_POINTS;
use crate::query::{ContactId, Manifold};

/// The lifecycle of a contact point across two successive manifolds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointState {
    /// The point slot is unused.
    Null,
    /// The point exists in the newer manifold only.
    Add,
    /// The point exists in both manifolds.
    Persist,
    /// The point exists in the older manifold only.
    Remove,
}

/// Matches the points of two successive manifolds by contact id.
///
/// The first returned array describes the fate of each point of `manifold1`
/// (`Persist` or `Remove`), the second the origin of each point of
/// `manifold2` (`Persist` or `Add`). Slots past a manifold's point count are
/// `Null`. Two points match when their [`ContactId`]s are equal, so warm-start
/// data attached to a persisting point may be carried over.
pub fn point_states(
    manifold1: &Manifold,
    manifold2: &Manifold,
) -> (
    [PointState; MAX_MANIFOLD_POINTS],
    [PointState; MAX_MANIFOLD_POINTS],
) {
    let mut states1 = [PointState::Null; MAX_MANIFOLD_POINTS];
    let mut states2 = [PointState::Null; MAX_MANIFOLD_POINTS];

    let contains = |manifold: &Manifold, id: ContactId| manifold.points.iter().any(|pt| pt.id == id);

    for (state, point) in states1.iter_mut().zip(manifold1.points.iter()) {
        *state = if contains(manifold2, point.id) {
            PointState::Persist
        } else {
            PointState::Remove
        };
    }

    for (state, point) in states2.iter_mut().zip(manifold2.points.iter()) {
        *state = if contains(manifold1, point.id) {
            PointState::Persist
        } else {
            PointState::Add
        };
    }

    (states1, states2)
}
