use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// The graph stroke tessellator's result type.
pub type GraphStrokeResult = Result<(), GraphStrokeError>;

/// The graph stroke tessellator's error enumeration.
///
/// Everything but [`GraphStrokeError::Tessellation`] is detected before any
/// geometry is produced.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GraphStrokeError {
    #[error("Line width must be a positive number, got {0}")]
    InvalidLineWidth(f32),
    #[error("Maximum join angle is not a number: {0}")]
    InvalidJoinAngle(f32),
    #[error("Position of vertex {vertex:?} is not a finite number")]
    InvalidPosition { vertex: VertexId },
    #[error("Edge {edge:?} refers to vertex {vertex:?} but the graph only has {num_vertices} vertices")]
    VertexOutOfRange {
        edge: EdgeId,
        vertex: VertexId,
        num_vertices: usize,
    },
    #[error("Edge {edge:?} has a length of zero")]
    DegenerateEdge { edge: EdgeId },
    #[error("Merge tessellation failed: {0}")]
    Tessellation(#[from] lyon_tessellation::TessellationError),
}
