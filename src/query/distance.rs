use crate::math::{Isometry, Point, Real, Vector, POLYGON_RADIUS};
use crate::shape::Shape;
use arrayvec::ArrayVec;
use either::Either;

/// The point cloud a distance query runs on: one child of a shape, together
/// with its radius.
#[derive(Clone, Debug)]
pub struct DistanceProxy<'a> {
    points: Either<&'a [Point<Real>], ArrayVec<Point<Real>, 2>>,
    radius: Real,
}

impl<'a> DistanceProxy<'a> {
    /// Extracts the vertices and radius of the `index`-th child of `shape`.
    ///
    /// `index` selects the sub-edge of a [`Polyline`][crate::shape::Polyline]
    /// and is ignored for the other shapes.
    pub fn new(shape: &'a Shape, index: u32) -> Self {
        match shape {
            Shape::Circle(circle) => DistanceProxy {
                points: Either::Left(std::slice::from_ref(&circle.center)),
                radius: circle.radius,
            },
            Shape::Polygon(polygon) => DistanceProxy {
                points: Either::Left(polygon.vertices()),
                radius: polygon.radius(),
            },
            Shape::Edge(edge) => {
                let mut points = ArrayVec::new();
                points.push(edge.vertex1);
                points.push(edge.vertex2);
                DistanceProxy {
                    points: Either::Right(points),
                    radius: edge.radius,
                }
            }
            Shape::Polyline(polyline) => {
                let index = index as usize;
                DistanceProxy {
                    points: Either::Left(&polyline.vertices()[index..index + 2]),
                    radius: POLYGON_RADIUS,
                }
            }
        }
    }

    /// The vertices of this proxy.
    pub fn points(&self) -> &[Point<Real>] {
        match &self.points {
            Either::Left(points) => points,
            Either::Right(points) => points,
        }
    }

    /// The radius around the vertices.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Index of the support point of this proxy in the direction `dir`.
    pub fn support(&self, dir: &Vector<Real>) -> usize {
        let mut best = 0;
        let mut best_dot = -Real::MAX;

        for (i, point) in self.points().iter().enumerate() {
            let dot = point.coords.dot(dir);
            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }

        best
    }
}

/// The input of a [`DistanceQuery`].
#[derive(Clone, Debug)]
pub struct DistanceInput<'a> {
    /// The first shape's point cloud.
    pub proxy1: DistanceProxy<'a>,
    /// The second shape's point cloud.
    pub proxy2: DistanceProxy<'a>,
    /// The first shape's position.
    pub pos1: Isometry<Real>,
    /// The second shape's position.
    pub pos2: Isometry<Real>,
    /// Whether the proxies' radii are part of the queried geometry.
    pub use_radii: bool,
}

/// The result of a [`DistanceQuery`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceOutput {
    /// The closest point on the first shape, in world space.
    pub point1: Point<Real>,
    /// The closest point on the second shape, in world space.
    pub point2: Point<Real>,
    /// The distance between both closest points.
    pub distance: Real,
    /// The number of iterations the query ran for.
    pub iterations: u32,
}

/// A warm-start cache carried between successive distance queries on the
/// same pair of proxies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SimplexCache {
    /// The simplex metric (length or area) when the cache was written.
    pub metric: Real,
    /// The number of cached simplex vertices. Zero means a cold cache.
    pub count: u16,
    /// Cached vertex indices on the first proxy.
    pub indices1: [u8; 3],
    /// Cached vertex indices on the second proxy.
    pub indices2: [u8; 3],
}

/// Trait implemented by distance engines (GJK or otherwise) the
/// [`test_overlap`][crate::query::test_overlap] boundary runs on.
///
/// Implementors may keep per-call scratch state behind `&mut self`; one
/// engine instance must not be shared between workers.
pub trait DistanceQuery {
    /// Computes the closest points between the two proxies of `input`.
    fn compute_distance(
        &mut self,
        input: &DistanceInput<'_>,
        cache: &mut SimplexCache,
    ) -> DistanceOutput;
}
