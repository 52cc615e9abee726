use crate::math::{Isometry, Real};
use crate::query::contact_manifolds::{
    contact_manifold_circle_circle, contact_manifold_edge_circle, contact_manifold_polygon_circle,
    contact_manifold_polygon_polygon, EdgePolygonCollider,
};
use crate::query::{Manifold, Unsupported};
use crate::shape::Shape;

/// Computes the contact manifold between two shapes.
///
/// `index1` and `index2` select the sub-edge of a [`Polyline`][crate::shape::Polyline]
/// and are ignored for the other shapes. When the pair is given in the
/// non-canonical order (e.g. circle first, polygon second), the manifold is
/// computed with the roles exchanged and [`Manifold::flip`]ped back, so its
/// frame conventions always refer to `shape1` and `shape2` as passed here.
///
/// Errors with [`Unsupported`] for edge/edge and polyline/polyline pairs
/// (one-sided edges cannot collide with each other), leaving `manifold`
/// empty.
pub fn contact_manifold(
    pos1: &Isometry<Real>,
    shape1: &Shape,
    index1: u32,
    pos2: &Isometry<Real>,
    shape2: &Shape,
    index2: u32,
    manifold: &mut Manifold,
) -> Result<(), Unsupported> {
    match (shape1, shape2) {
        (Shape::Circle(circle1), Shape::Circle(circle2)) => {
            contact_manifold_circle_circle(pos1, circle1, pos2, circle2, manifold);
            Ok(())
        }
        (Shape::Polygon(polygon1), Shape::Circle(circle2)) => {
            contact_manifold_polygon_circle(pos1, polygon1, pos2, circle2, manifold);
            Ok(())
        }
        (Shape::Polygon(polygon1), Shape::Polygon(polygon2)) => {
            contact_manifold_polygon_polygon(pos1, polygon1, pos2, polygon2, manifold);
            Ok(())
        }
        (Shape::Edge(edge1), Shape::Circle(circle2)) => {
            contact_manifold_edge_circle(pos1, edge1, pos2, circle2, manifold);
            Ok(())
        }
        (Shape::Edge(edge1), Shape::Polygon(polygon2)) => {
            EdgePolygonCollider::new().collide(pos1, edge1, pos2, polygon2, manifold);
            Ok(())
        }
        (Shape::Polyline(polyline1), Shape::Circle(circle2)) => {
            let edge1 = polyline1.edge(index1);
            contact_manifold_edge_circle(pos1, &edge1, pos2, circle2, manifold);
            Ok(())
        }
        (Shape::Polyline(polyline1), Shape::Polygon(polygon2)) => {
            let edge1 = polyline1.edge(index1);
            EdgePolygonCollider::new().collide(pos1, &edge1, pos2, polygon2, manifold);
            Ok(())
        }
        (Shape::Circle(_), Shape::Polygon(_) | Shape::Edge(_) | Shape::Polyline(_))
        | (Shape::Polygon(_), Shape::Edge(_) | Shape::Polyline(_)) => {
            contact_manifold(pos2, shape2, index2, pos1, shape1, index1, manifold)?;
            manifold.flip();
            Ok(())
        }
        (Shape::Edge(_) | Shape::Polyline(_), Shape::Edge(_) | Shape::Polyline(_)) => {
            manifold.clear();
            Err(Unsupported)
        }
    }
}
