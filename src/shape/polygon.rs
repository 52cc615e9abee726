use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, POLYGON_RADIUS};
use crate::utils;
use na::Unit;

/// A 2D convex polygon with one outward normal per edge.
///
/// Vertices are stored in counter-clockwise order. Edge `i` joins vertex `i`
/// to vertex `i + 1` (wrapping around at the end), and `normals()[i]` is the
/// outward unit normal of that edge. The skin `radius` slightly inflates the
/// polygon for collision purposes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    normals: Vec<Unit<Vector<Real>>>,
    centroid: Point<Real>,
    radius: Real,
}

impl Polygon {
    /// Creates a new 2D convex polygon from a set of points assumed to describe a
    /// counter-clockwise convex polyline.
    ///
    /// Convexity of the input polyline is not checked. Nearly collinear vertices
    /// are merged into a single edge. Returns `None` if fewer than three vertices
    /// survive the merge or if the enclosed area is almost zero.
    pub fn from_convex_polyline(mut points: Vec<Point<Real>>) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let eps = DEFAULT_EPSILON.sqrt();
        let mut normals = Vec::with_capacity(points.len());

        // First, compute all normals.
        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();
            normals.push(utils::ccw_face_normal([&points[i1], &points[i2]])?);
        }

        let mut nremoved = 0;
        // See if the first vertex must be removed.
        if normals[0].dot(&*normals[normals.len() - 1]) > 1.0 - eps {
            nremoved = 1;
        }

        // Second, find vertices that can be removed because
        // of collinearity of adjascent faces.
        for i2 in 1..points.len() {
            let i1 = i2 - 1;
            if normals[i1].dot(&*normals[i2]) > 1.0 - eps {
                // Remove
                nremoved += 1;
            } else {
                points[i2 - nremoved] = points[i2];
                normals[i2 - nremoved] = normals[i2];
            }
        }

        let new_length = points.len() - nremoved;
        points.truncate(new_length);
        normals.truncate(new_length);

        if points.len() < 3 {
            return None;
        }

        // Area-weighted centroid of the triangle fan rooted at the first vertex.
        let origin = points[0];
        let mut area = 0.0;
        let mut acc = Vector::zeros();

        for i in 1..points.len() - 1 {
            let e1 = points[i] - origin;
            let e2 = points[i + 1] - origin;
            let triangle_area = e1.perp(&e2) * 0.5;
            acc += (e1 + e2) * (triangle_area / 3.0);
            area += triangle_area;
        }

        if area < DEFAULT_EPSILON {
            return None;
        }

        Some(Polygon {
            vertices: points,
            normals,
            centroid: origin + acc / area,
            radius: POLYGON_RADIUS,
        })
    }

    /// Creates a rectangle with the given half-extents, centered at the origin.
    pub fn cuboid(half_width: Real, half_height: Real) -> Self {
        Polygon {
            vertices: vec![
                Point::new(-half_width, -half_height),
                Point::new(half_width, -half_height),
                Point::new(half_width, half_height),
                Point::new(-half_width, half_height),
            ],
            normals: vec![
                -Vector::y_axis(),
                Vector::x_axis(),
                Vector::y_axis(),
                -Vector::x_axis(),
            ],
            centroid: Point::origin(),
            radius: POLYGON_RADIUS,
        }
    }

    /// The vertices of this convex polygon, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward unit normals of the edges of this convex polygon.
    #[inline]
    pub fn normals(&self) -> &[Unit<Vector<Real>>] {
        &self.normals
    }

    /// The area-weighted center of this convex polygon.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    /// The skin radius inflating this polygon for collision purposes.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Sets the skin radius inflating this polygon for collision purposes.
    #[inline]
    pub fn set_radius(&mut self, radius: Real) {
        self.radius = radius;
    }
}
