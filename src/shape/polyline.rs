use crate::math::{Point, Real};
use crate::shape::Edge;

/// Indicates a failure when building a polyline.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolylineBuildError {
    /// An open polyline must contain at least one edge.
    #[error("An open polyline requires at least two vertices.")]
    NotEnoughVertices,
    /// A closed polyline must have a non-empty interior.
    #[error("A closed polyline requires at least three vertices.")]
    NotEnoughVerticesForLoop,
}

/// A chain of one-sided edges.
///
/// Consecutive vertices define the edges of the chain. Each edge taken out of
/// the chain carries its neighboring vertices as ghost vertices, restricting
/// the contact normals admissible around the interior joints so shapes slide
/// over them without snagging. The leading side of the chain is on the right
/// when walking from the first vertex to the last.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct Polyline {
    vertices: Vec<Point<Real>>,
    prev_vertex: Option<Point<Real>>,
    next_vertex: Option<Point<Real>>,
}

impl Polyline {
    /// Creates a new open polyline from an ordered vertex buffer.
    ///
    /// The endpoints have no ghost vertex; use [`Polyline::set_prev_vertex`]
    /// and [`Polyline::set_next_vertex`] to connect this chain to its
    /// surroundings.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolylineBuildError> {
        if vertices.len() < 2 {
            return Err(PolylineBuildError::NotEnoughVertices);
        }

        Ok(Polyline {
            vertices,
            prev_vertex: None,
            next_vertex: None,
        })
    }

    /// Creates a new closed polyline from an ordered vertex buffer.
    ///
    /// The loop is closed automatically: do not repeat the first vertex at
    /// the end of the buffer. The leading side of a counter-clockwise loop is
    /// its outside, of a clockwise loop its inside.
    pub fn closed(mut vertices: Vec<Point<Real>>) -> Result<Self, PolylineBuildError> {
        if vertices.len() < 3 {
            return Err(PolylineBuildError::NotEnoughVerticesForLoop);
        }

        let first = vertices[0];
        let prev_vertex = Some(vertices[vertices.len() - 1]);
        let next_vertex = Some(vertices[1]);
        vertices.push(first);

        Ok(Polyline {
            vertices,
            prev_vertex,
            next_vertex,
        })
    }

    /// Sets the ghost vertex preceding the first vertex of this chain.
    pub fn set_prev_vertex(&mut self, vertex: Point<Real>) {
        self.prev_vertex = Some(vertex);
    }

    /// Sets the ghost vertex following the last vertex of this chain.
    pub fn set_next_vertex(&mut self, vertex: Point<Real>) {
        self.next_vertex = Some(vertex);
    }

    /// The vertex buffer of this polyline.
    ///
    /// For a closed polyline this includes the duplicated closing vertex.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The ghost vertex preceding the first vertex, if any.
    #[inline]
    pub fn prev_vertex(&self) -> Option<Point<Real>> {
        self.prev_vertex
    }

    /// The ghost vertex following the last vertex, if any.
    #[inline]
    pub fn next_vertex(&self) -> Option<Point<Real>> {
        self.next_vertex
    }

    /// The number of edges forming this polyline.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Gets the `i`-th edge of this polyline.
    ///
    /// The ghost vertices of the edge are the neighboring chain vertices, or
    /// the chain's own ghost vertices at the ends.
    pub fn edge(&self, i: u32) -> Edge {
        let i = i as usize;
        let mut edge = Edge::new(self.vertices[i], self.vertices[i + 1]);
        edge.vertex0 = if i > 0 {
            Some(self.vertices[i - 1])
        } else {
            self.prev_vertex
        };
        edge.vertex3 = if i + 2 < self.vertices.len() {
            Some(self.vertices[i + 2])
        } else {
            self.next_vertex
        };
        edge
    }

    /// An iterator through all the edges of this polyline.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        (0..self.num_edges() as u32).map(move |i| self.edge(i))
    }
}
