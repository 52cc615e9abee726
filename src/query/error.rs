use std::fmt;

/// Error indicating that a geometric query is not supported between certain
/// shape combinations.
///
/// The pairwise contact routines only exist for the shape pairs the narrow
/// phase registers. Asking for an edge/edge or polyline/polyline manifold,
/// for example, returns this error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl std::error::Error for Unsupported {}
