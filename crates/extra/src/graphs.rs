//! Small graphs exercising the interesting cases of graph stroking.

/// Vertex positions and edges of a graph, as plain arrays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphData {
    pub vertices: &'static [[f32; 2]],
    pub edges: &'static [[u32; 2]],
}

/// A single horizontal edge.
pub const SEGMENT: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0]],
    edges: &[[0, 1]],
};

/// Two edges meeting at a right angle at vertex 1.
pub const RIGHT_ANGLE: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
    edges: &[[0, 1], [1, 2]],
};

/// Two collinear edges going through vertex 1.
pub const STRAIGHT: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]],
    edges: &[[0, 1], [1, 2]],
};

/// Three edges leaving vertex 0 within a quarter turn, leaving a
/// three-quarter turn gap between the first and the last one.
pub const FAN: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
    edges: &[[0, 1], [0, 2], [0, 3]],
};

/// Two long edges leaving vertex 0 with a very narrow angle between them.
/// With a line width of 2 their strokes overlap over most of their length.
pub const NARROW_WEDGE: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0], [10.0, 0.5]],
    edges: &[[0, 1], [0, 2]],
};

/// A closed triangle.
pub const TRIANGLE: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [20.0, 0.0], [10.0, 17.0]],
    edges: &[[0, 1], [1, 2], [2, 0]],
};

/// Two edges far away from each other.
pub const DISJOINT: GraphData = GraphData {
    vertices: &[[0.0, 0.0], [10.0, 0.0], [0.0, 100.0], [10.0, 100.0]],
    edges: &[[0, 1], [2, 3]],
};

/// A square grid of `n` by `n` vertices spaced by `spacing`, with an edge
/// between each pair of horizontal and vertical neighbors.
pub fn grid(n: u32, spacing: f32) -> (Vec<[f32; 2]>, Vec<[u32; 2]>) {
    let mut vertices = Vec::with_capacity((n * n) as usize);
    let mut edges = Vec::new();
    for y in 0..n {
        for x in 0..n {
            let idx = y * n + x;
            vertices.push([x as f32 * spacing, y as f32 * spacing]);
            if x + 1 < n {
                edges.push([idx, idx + 1]);
            }
            if y + 1 < n {
                edges.push([idx, idx + n]);
            }
        }
    }

    (vertices, edges)
}

#[test]
fn grid_size() {
    let (vertices, edges) = grid(3, 1.0);
    assert_eq!(vertices.len(), 9);
    assert_eq!(edges.len(), 12);
    assert_eq!(vertices[5], [2.0, 1.0]);

    let (vertices, edges) = grid(1, 1.0);
    assert_eq!(vertices.len(), 1);
    assert!(edges.is_empty());
}

#[test]
fn sample_graphs_are_well_formed() {
    for data in &[
        SEGMENT,
        RIGHT_ANGLE,
        STRAIGHT,
        FAN,
        NARROW_WEDGE,
        TRIANGLE,
        DISJOINT,
    ] {
        for edge in data.edges {
            assert!((edge[0] as usize) < data.vertices.len());
            assert!((edge[1] as usize) < data.vertices.len());
            assert_ne!(data.vertices[edge[0] as usize], data.vertices[edge[1] as usize]);
        }
    }
}
