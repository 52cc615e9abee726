use crate::math::Real;
use crate::shape::{Circle, Edge, Polygon, Polyline};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A circle shape.
    Circle = 0,
    /// A convex polygon shape.
    Polygon,
    /// A one-sided edge shape.
    Edge,
    /// A polyline shape.
    Polyline,
}

/// A shape usable for contact manifold computation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub enum Shape {
    /// A circle shape.
    Circle(Circle),
    /// A convex polygon shape.
    Polygon(Polygon),
    /// A one-sided edge shape.
    Edge(Edge),
    /// A polyline shape.
    Polyline(Polyline),
}

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Edge(_) => ShapeType::Edge,
            Shape::Polyline(_) => ShapeType::Polyline,
        }
    }

    /// The radius this shape occupies around its boundary.
    ///
    /// This is the actual radius for circles, and the skin radius for the
    /// other shapes.
    pub fn radius(&self) -> Real {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Polygon(polygon) => polygon.radius(),
            Shape::Edge(edge) => edge.radius,
            Shape::Polyline(_) => crate::math::POLYGON_RADIUS,
        }
    }

    /// The number of independently collidable pieces of this shape.
    ///
    /// Only polylines have more than one: one child per edge.
    pub fn child_count(&self) -> u32 {
        match self {
            Shape::Polyline(polyline) => polyline.num_edges() as u32,
            _ => 1,
        }
    }

    /// Converts this abstract shape to a circle, if it is one.
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    /// Converts this abstract shape to a convex polygon, if it is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Converts this abstract shape to an edge, if it is one.
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Shape::Edge(edge) => Some(edge),
            _ => None,
        }
    }

    /// Converts this abstract shape to a polyline, if it is one.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Shape::Polyline(polyline) => Some(polyline),
            _ => None,
        }
    }
}
