use crate::error::GraphStrokeError;
use crate::math::{point, Point};

use core::fmt;

/// Refers to a vertex of a [`Graph`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    pub const INVALID: Self = VertexId(u32::MAX);
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
    pub fn from_usize(val: usize) -> Self {
        VertexId(val as u32)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Refers to an edge of a [`Graph`].
///
/// Edge ids also identify the polygon generated for the edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct EdgeId(pub u32);

impl EdgeId {
    pub const INVALID: Self = EdgeId(u32::MAX);
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
    pub fn from_usize(val: usize) -> Self {
        EdgeId(val as u32)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A set of positioned vertices connected by straight edges.
///
/// Edges are not validated when they are added. The tessellator checks the
/// whole graph before it starts generating geometry.
///
/// # Examples
///
/// ```
/// use graph_stroke_tessellation::Graph;
/// use graph_stroke_tessellation::math::point;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(point(0.0, 0.0));
/// let b = graph.add_vertex(point(10.0, 0.0));
/// let c = graph.add_vertex(point(10.0, 10.0));
/// graph.add_edge(a, b);
/// graph.add_edge(b, c);
///
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Graph {
    vertices: Vec<Point>,
    edges: Vec<[VertexId; 2]>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Creates a graph from plain coordinate and index arrays.
    pub fn from_slices(vertices: &[[f32; 2]], edges: &[[u32; 2]]) -> Self {
        Graph {
            vertices: vertices.iter().map(|v| point(v[0], v[1])).collect(),
            edges: edges
                .iter()
                .map(|e| [VertexId(e[0]), VertexId(e[1])])
                .collect(),
        }
    }

    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        let id = VertexId::from_usize(self.vertices.len());
        self.vertices.push(position);
        id
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> EdgeId {
        let id = EdgeId::from_usize(self.edges.len());
        self.edges.push([from, to]);
        id
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[[VertexId; 2]] {
        &self.edges
    }

    #[inline]
    pub fn position(&self, id: VertexId) -> Point {
        self.vertices[id.to_usize()]
    }

    #[inline]
    pub fn endpoints(&self, id: EdgeId) -> [VertexId; 2] {
        self.edges[id.to_usize()]
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Checks the preconditions of the tessellator.
    pub fn validate(&self) -> Result<(), GraphStrokeError> {
        for (idx, position) in self.vertices.iter().enumerate() {
            if !(position.x.is_finite() && position.y.is_finite()) {
                return Err(GraphStrokeError::InvalidPosition {
                    vertex: VertexId::from_usize(idx),
                });
            }
        }

        let num_vertices = self.vertices.len();
        for (idx, endpoints) in self.edges.iter().enumerate() {
            let edge = EdgeId::from_usize(idx);
            for &vertex in endpoints {
                if vertex.to_usize() >= num_vertices {
                    return Err(GraphStrokeError::VertexOutOfRange {
                        edge,
                        vertex,
                        num_vertices,
                    });
                }
            }

            let [from, to] = *endpoints;
            if self.position(from) == self.position(to) {
                return Err(GraphStrokeError::DegenerateEdge { edge });
            }
        }

        Ok(())
    }
}

#[test]
fn graph_validation() {
    let graph = Graph::from_slices(&[[0.0, 0.0], [1.0, 0.0]], &[[0, 1]]);
    assert_eq!(graph.validate(), Ok(()));

    let graph = Graph::from_slices(&[[0.0, 0.0], [1.0, 0.0]], &[[0, 1], [1, 2]]);
    assert_eq!(
        graph.validate(),
        Err(GraphStrokeError::VertexOutOfRange {
            edge: EdgeId(1),
            vertex: VertexId(2),
            num_vertices: 2,
        })
    );

    let graph = Graph::from_slices(&[[0.0, 0.0], [1.0, 0.0]], &[[1, 1]]);
    assert_eq!(
        graph.validate(),
        Err(GraphStrokeError::DegenerateEdge { edge: EdgeId(0) })
    );

    let graph = Graph::from_slices(&[[0.0, 0.0], [0.0, 0.0]], &[[0, 1]]);
    assert!(graph.validate().is_err());

    let graph = Graph::from_slices(&[[0.0, f32::INFINITY]], &[]);
    assert_eq!(
        graph.validate(),
        Err(GraphStrokeError::InvalidPosition {
            vertex: VertexId(0)
        })
    );
}

#[test]
fn graph_builder() {
    let mut graph = Graph::with_capacity(2, 1);
    let a = graph.add_vertex(point(1.0, 2.0));
    let b = graph.add_vertex(point(3.0, 4.0));
    let e = graph.add_edge(b, a);

    assert_eq!(a, VertexId(0));
    assert_eq!(b, VertexId(1));
    assert_eq!(e, EdgeId(0));
    assert_eq!(graph.endpoints(e), [b, a]);
    assert_eq!(graph.position(b), point(3.0, 4.0));
    assert!(!graph.is_empty());
    assert_eq!(
        graph,
        Graph::from_slices(&[[1.0, 2.0], [3.0, 4.0]], &[[1, 0]])
    );
}
