use crate::math::{Point, Real, POLYGON_RADIUS};

/// A segment shape, optionally aware of the neighboring segments of a
/// polyline.
///
/// The leading normal of the edge points to the right when walking from
/// `vertex1` to `vertex2`. The optional ghost vertices are the neighboring
/// polyline vertices; when present, they restrict the contact normals this
/// edge may produce so that a shape sliding across the shared vertex of two
/// edges never collides with the joint itself, the neighbor owning the
/// contact instead.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Edge {
    /// The first endpoint of the edge.
    pub vertex1: Point<Real>,
    /// The second endpoint of the edge.
    pub vertex2: Point<Real>,
    /// The ghost vertex preceding `vertex1` on the polyline, if any.
    pub vertex0: Option<Point<Real>>,
    /// The ghost vertex following `vertex2` on the polyline, if any.
    pub vertex3: Option<Point<Real>>,
    /// The skin radius inflating this edge for collision purposes.
    pub radius: Real,
}

impl Edge {
    /// Creates a new isolated edge, without ghost vertices.
    #[inline]
    pub fn new(vertex1: Point<Real>, vertex2: Point<Real>) -> Edge {
        Edge {
            vertex1,
            vertex2,
            vertex0: None,
            vertex3: None,
            radius: POLYGON_RADIUS,
        }
    }

    /// Creates a new edge with both ghost vertices set.
    #[inline]
    pub fn one_sided(
        vertex0: Point<Real>,
        vertex1: Point<Real>,
        vertex2: Point<Real>,
        vertex3: Point<Real>,
    ) -> Edge {
        Edge {
            vertex1,
            vertex2,
            vertex0: Some(vertex0),
            vertex3: Some(vertex3),
            radius: POLYGON_RADIUS,
        }
    }
}
