//! Shapes supported by manifold2d.

pub use self::circle::Circle;
pub use self::edge::Edge;
pub use self::feature_id::FeatureId;
pub use self::polygon::Polygon;
pub use self::polyline::{Polyline, PolylineBuildError};
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};

mod circle;
mod edge;
mod feature_id;
mod polygon;
mod polyline;
mod shape;
