use crate::math::{Point, Real, Vector};
use crate::query::ContactId;
use crate::shape::FeatureId;
use arrayvec::ArrayVec;

/// A vertex of a contact segment being clipped, together with the identity
/// of the shape features that generated it.
#[derive(Copy, Clone, Debug)]
pub struct ClipVertex {
    /// The position of this vertex.
    pub point: Point<Real>,
    /// The contact id identifying the generating feature on both shapes.
    pub id: ContactId,
}

/// Sutherland-Hodgman clipping of a two-vertex segment against a line.
///
/// The line is `normal.dot(p) == offset`, and points with
/// `normal.dot(p) <= offset` are kept. When the segment straddles the line,
/// the intersection vertex is emitted with an id built from `vertex_index1`
/// (the clipping vertex of the first shape) and the face of the second shape
/// the segment was taken from.
///
/// A contact manifold needs two points, so callers discard the result when
/// fewer than two vertices survive.
pub fn clip_segment_to_line(
    points: &[ClipVertex; 2],
    normal: &Vector<Real>,
    offset: Real,
    vertex_index1: u32,
) -> ArrayVec<ClipVertex, 2> {
    let mut out = ArrayVec::new();

    let distance1 = normal.dot(&points[0].point.coords) - offset;
    let distance2 = normal.dot(&points[1].point.coords) - offset;

    if distance1 <= 0.0 {
        out.push(points[0]);
    }
    if distance2 <= 0.0 {
        out.push(points[1]);
    }

    if distance1 * distance2 < 0.0 {
        // The endpoints straddle the line, cut the segment.
        let interp = distance1 / (distance1 - distance2);
        let point = points[0].point + (points[1].point - points[0].point) * interp;
        let index2 = match points[0].id.feature2() {
            FeatureId::Vertex(index) | FeatureId::Face(index) => index,
            FeatureId::Unknown => 0,
        };
        out.push(ClipVertex {
            point,
            id: ContactId::new(FeatureId::Vertex(vertex_index1), FeatureId::Face(index2)),
        });
    }

    out
}
