use crate::geometry_builder::*;
use crate::math::*;
use crate::{
    EdgeId, FillUnionTessellator, Graph, GraphStrokeError, GraphStrokeOptions,
    GraphStrokeResult, GraphStrokeTessellator, StrokeContours, UnionTessellator, VertexId,
};

use graph_stroke_extra::graphs::{self, GraphData};

use core::f32::consts::PI;

fn graph(data: GraphData) -> Graph {
    Graph::from_slices(data.vertices, data.edges)
}

fn contours(data: GraphData, options: &GraphStrokeOptions) -> StrokeContours {
    StrokeContours::build(&graph(data), options).unwrap()
}

fn tessellate(graph: &Graph, options: &GraphStrokeOptions) -> Result<Vec<Vec<Point>>, GraphStrokeError> {
    let mut output = PolygonBuffers::new();
    let mut tess = GraphStrokeTessellator::new();
    tess.tessellate(graph, options, &mut output)?;
    Ok(output.polygons)
}

fn assert_polygon_eq(actual: &[Point], expected: &[Point]) {
    let matches = actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(a, b)| (*a - *b).square_length() < 1e-6);
    assert!(matches, "expected {:?}, got {:?}", expected, actual);
}

fn polygon_area(polygon: &[Point]) -> f32 {
    let mut area = 0.0;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[(i + 1) % polygon.len()];
        area += a.to_vector().cross(b.to_vector());
    }
    area * 0.5
}

#[test]
fn single_edge() {
    let polygons = tessellate(&graph(graphs::SEGMENT), &GraphStrokeOptions::line_width(2.0)).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_polygon_eq(
        &polygons[0],
        &[
            point(0.0, -1.0),
            point(10.0, -1.0),
            point(10.0, 1.0),
            point(0.0, 1.0),
        ],
    );

    let polygons = tessellate(&graph(graphs::SEGMENT), &GraphStrokeOptions::line_width(4.0)).unwrap();
    assert_polygon_eq(
        &polygons[0],
        &[
            point(0.0, -2.0),
            point(10.0, -2.0),
            point(10.0, 2.0),
            point(0.0, 2.0),
        ],
    );
}

#[test]
fn reversed_single_edge() {
    let graph = Graph::from_slices(&[[0.0, 0.0], [10.0, 0.0]], &[[1, 0]]);
    let polygons = tessellate(&graph, &GraphStrokeOptions::line_width(2.0)).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_polygon_eq(
        &polygons[0],
        &[
            point(10.0, 1.0),
            point(0.0, 1.0),
            point(0.0, -1.0),
            point(10.0, -1.0),
        ],
    );
}

#[test]
fn right_angle_without_miter() {
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = contours(graphs::RIGHT_ANGLE, &options);

    assert_eq!(contours.num_overlap_candidates(), 0);
    assert_eq!(contours.num_groups(), 2);
    assert!(!contours.is_merged(EdgeId(0)));
    assert!(!contours.is_merged(EdgeId(1)));

    assert_polygon_eq(
        contours.polygon(EdgeId(0)),
        &[
            point(0.0, -1.0),
            point(11.0, -1.0),
            point(9.0, 1.0),
            point(0.0, 1.0),
        ],
    );
    assert_polygon_eq(
        contours.polygon(EdgeId(1)),
        &[
            point(11.0, -1.0),
            point(11.0, 10.0),
            point(9.0, 10.0),
            point(9.0, 1.0),
        ],
    );

    // Both polygons are emitted as is, in edge order.
    let polygons = tessellate(&graph(graphs::RIGHT_ANGLE), &options).unwrap();
    assert_eq!(polygons.len(), 2);
    assert_polygon_eq(&polygons[0], contours.polygon(EdgeId(0)));
    assert_polygon_eq(&polygons[1], contours.polygon(EdgeId(1)));
}

#[test]
fn right_angle_with_miter() {
    let options = GraphStrokeOptions::line_width(2.0).with_max_join_angle(PI);
    let contours = contours(graphs::RIGHT_ANGLE, &options);

    // The miter point sits on the bisector of the three-quarter turn gap,
    // at half of the line width from the vertex.
    let vertex = point(10.0, 0.0);
    let bisector = (PI + 2.5 * PI) * 0.5;
    let miter = vertex + vector(bisector.cos(), bisector.sin());

    assert_polygon_eq(
        contours.polygon(EdgeId(0)),
        &[
            point(0.0, -1.0),
            point(10.0, -1.0),
            miter,
            point(9.0, 1.0),
            point(0.0, 1.0),
        ],
    );
    assert_polygon_eq(
        contours.polygon(EdgeId(1)),
        &[
            point(11.0, 0.0),
            point(11.0, 10.0),
            point(9.0, 10.0),
            point(9.0, 1.0),
            miter,
        ],
    );

    assert!(((miter - vertex).length() - 1.0).abs() < 1e-5);
    assert!(!contours.is_merged(EdgeId(0)));
    assert!(!contours.is_merged(EdgeId(1)));
}

#[test]
fn straight_through_vertex() {
    for options in &[
        GraphStrokeOptions::line_width(2.0),
        GraphStrokeOptions::line_width(2.0).with_max_join_angle(PI),
    ] {
        let contours = contours(graphs::STRAIGHT, options);
        assert_polygon_eq(
            contours.polygon(EdgeId(0)),
            &[
                point(0.0, -1.0),
                point(10.0, -1.0),
                point(10.0, 1.0),
                point(0.0, 1.0),
            ],
        );
        assert_polygon_eq(
            contours.polygon(EdgeId(1)),
            &[
                point(10.0, -1.0),
                point(20.0, -1.0),
                point(20.0, 1.0),
                point(10.0, 1.0),
            ],
        );
        assert_eq!(contours.num_groups(), 2);
    }
}

#[test]
fn fan_keeps_center_vertex() {
    let options = GraphStrokeOptions::line_width(2.0).with_max_join_angle(PI);
    let contours = contours(graphs::FAN, &options);

    let center = point(0.0, 0.0);
    let miter = point(-0.5f32.sqrt(), -0.5f32.sqrt());
    let contains = |edge: u32, p: Point| {
        contours
            .polygon(EdgeId(edge))
            .iter()
            .any(|q| (*q - p).square_length() < 1e-6)
    };

    // With three edges the center is part of every outline.
    for edge in 0..3 {
        assert!(contains(edge, center));
    }

    // Only the edges around the large gap get the miter point.
    assert!(contains(0, miter));
    assert!(!contains(1, miter));
    assert!(contains(2, miter));

    assert_eq!(contours.num_groups(), 3);
    assert_eq!(contours.num_overlap_candidates(), 0);
}

#[test]
fn overlapping_edges_are_merged() {
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = contours(graphs::NARROW_WEDGE, &options);

    assert_eq!(contours.num_overlap_candidates(), 1);
    assert!(contours.is_merged(EdgeId(0)));
    assert!(contours.is_merged(EdgeId(1)));
    assert_eq!(contours.group(EdgeId(0)), contours.group(EdgeId(1)));
    assert_eq!(contours.num_groups(), 1);

    // The union is emitted as triangles instead of the edge polygons.
    let polygons = tessellate(&graph(graphs::NARROW_WEDGE), &options).unwrap();
    assert!(polygons.len() >= 2);
    for polygon in &polygons {
        assert_eq!(polygon.len(), 3);
    }

    let area: f32 = polygons.iter().map(|p| polygon_area(p).abs()).sum();
    assert!(area > 20.0, "area: {}", area);
}

#[test]
fn overlap_propagates_to_neighbors() {
    // The narrow wedge, plus an edge hanging from the end of its first branch
    // and an unrelated edge far away.
    let graph = Graph::from_slices(
        &[
            [0.0, 0.0],
            [10.0, 0.0],
            [10.0, 0.5],
            [10.0, -5.0],
            [0.0, 100.0],
            [10.0, 100.0],
        ],
        &[[0, 1], [0, 2], [1, 3], [4, 5]],
    );
    let contours = StrokeContours::build(&graph, &GraphStrokeOptions::line_width(2.0)).unwrap();

    let group = contours.group(EdgeId(0));
    assert_eq!(contours.group(EdgeId(1)), group);
    assert_eq!(contours.group(EdgeId(2)), group);
    assert_ne!(contours.group(EdgeId(3)), group);
    assert!(!contours.is_merged(EdgeId(3)));
    assert_eq!(contours.num_groups(), 2);
}

#[test]
fn disjoint_edges_are_not_merged() {
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = contours(graphs::DISJOINT, &options);

    assert_ne!(contours.group(EdgeId(0)), contours.group(EdgeId(1)));
    assert!(!contours.is_merged(EdgeId(0)));
    assert!(!contours.is_merged(EdgeId(1)));

    let polygons = tessellate(&graph(graphs::DISJOINT), &options).unwrap();
    assert_eq!(polygons.len(), 2);
}

#[test]
fn closed_triangle() {
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = contours(graphs::TRIANGLE, &options);

    assert_eq!(contours.num_groups(), 3);
    for edge in 0..3 {
        let polygon = contours.polygon(EdgeId(edge));
        assert_eq!(polygon.len(), 4);
        assert!(polygon_area(polygon) > 0.0);
    }
}

#[test]
fn grid_without_overlaps() {
    let (vertices, edges) = graphs::grid(4, 10.0);
    let graph = Graph::from_slices(&vertices, &edges);
    let options = GraphStrokeOptions::line_width(2.0);

    let contours = StrokeContours::build(&graph, &options).unwrap();
    assert_eq!(contours.num_overlap_candidates(), 0);
    assert_eq!(contours.num_groups(), edges.len());

    let polygons = tessellate(&graph, &options).unwrap();
    assert_eq!(polygons.len(), 24);
}

#[test]
fn deterministic_output() {
    let (vertices, edges) = graphs::grid(5, 3.0);
    let inputs = [
        Graph::from_slices(&vertices, &edges),
        graph(graphs::NARROW_WEDGE),
        graph(graphs::TRIANGLE),
        graph(graphs::FAN),
    ];

    let options = GraphStrokeOptions::line_width(2.5).with_max_join_angle(PI);
    for graph in &inputs {
        let first = tessellate(graph, &options).unwrap();
        let second = tessellate(graph, &options).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn singletons_before_merged_groups() {
    let graph = Graph::from_slices(
        &[[0.0, 0.0], [10.0, 0.0], [10.0, 0.5], [0.0, 100.0], [10.0, 100.0]],
        &[[0, 1], [0, 2], [3, 4]],
    );
    let polygons = tessellate(&graph, &GraphStrokeOptions::line_width(2.0)).unwrap();

    assert_polygon_eq(
        &polygons[0],
        &[
            point(0.0, 99.0),
            point(10.0, 99.0),
            point(10.0, 101.0),
            point(0.0, 101.0),
        ],
    );
    assert!(polygons.len() > 1);
    for polygon in &polygons[1..] {
        assert_eq!(polygon.len(), 3);
    }
}

#[test]
fn empty_graph() {
    let polygons = tessellate(&Graph::new(), &GraphStrokeOptions::DEFAULT).unwrap();
    assert!(polygons.is_empty());

    // Isolated vertices produce nothing.
    let graph = Graph::from_slices(&[[0.0, 0.0], [1.0, 1.0]], &[]);
    let polygons = tessellate(&graph, &GraphStrokeOptions::DEFAULT).unwrap();
    assert!(polygons.is_empty());
}

#[test]
fn invalid_input() {
    let mut output = NoOutput::new();
    let mut tess = GraphStrokeTessellator::new();

    let broken = Graph::from_slices(&[[0.0, 0.0], [1.0, 0.0]], &[[0, 1], [0, 7]]);
    assert_eq!(
        tess.tessellate(&broken, &GraphStrokeOptions::DEFAULT, &mut output),
        Err(GraphStrokeError::VertexOutOfRange {
            edge: EdgeId(1),
            vertex: VertexId(7),
            num_vertices: 2,
        })
    );

    let segment = graph(graphs::SEGMENT);
    assert_eq!(
        tess.tessellate(&segment, &GraphStrokeOptions::line_width(-1.0), &mut output),
        Err(GraphStrokeError::InvalidLineWidth(-1.0))
    );

    assert_eq!(output.num_polygons, 0);
}

/// Records what the tessellator asks to merge.
struct RecordingMerger {
    groups: Vec<usize>,
}

impl UnionTessellator for RecordingMerger {
    fn tessellate_union(
        &mut self,
        polygons: &[&[Point]],
        _options: &GraphStrokeOptions,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        self.groups.push(polygons.len());
        for polygon in polygons {
            output.add_polygon(polygon);
        }
        Ok(())
    }
}

#[test]
fn custom_merger() {
    let mut merger = RecordingMerger { groups: Vec::new() };
    let mut output = PolygonBuffers::new();
    let mut tess = GraphStrokeTessellator::new();

    tess.tessellate_with(
        &graph(graphs::NARROW_WEDGE),
        &GraphStrokeOptions::line_width(2.0),
        &mut merger,
        &mut output,
    )
    .unwrap();

    assert_eq!(merger.groups, vec![2]);
    assert_eq!(output.polygons.len(), 2);

    merger.groups.clear();
    output.clear();
    tess.tessellate_with(
        &graph(graphs::RIGHT_ANGLE),
        &GraphStrokeOptions::line_width(2.0),
        &mut merger,
        &mut output,
    )
    .unwrap();

    assert!(merger.groups.is_empty());
    assert_eq!(output.polygons.len(), 2);
}

struct FailingMerger;

impl UnionTessellator for FailingMerger {
    fn tessellate_union(
        &mut self,
        _polygons: &[&[Point]],
        _options: &GraphStrokeOptions,
        _output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        Err(lyon_tessellation::TessellationError::GeometryBuilder(
            lyon_tessellation::GeometryBuilderError::TooManyVertices,
        )
        .into())
    }
}

#[derive(Default)]
struct Events {
    began: bool,
    ended: bool,
    aborted: bool,
}

impl PolygonBuilder for Events {
    fn begin_geometry(&mut self) {
        self.began = true;
    }
    fn end_geometry(&mut self) {
        self.ended = true;
    }
    fn add_polygon(&mut self, _polygon: &[Point]) {}
    fn abort_geometry(&mut self) {
        self.aborted = true;
    }
}

#[test]
fn merge_errors_are_surfaced() {
    let mut output = Events::default();
    let mut tess = GraphStrokeTessellator::new();

    let result = tess.tessellate_with(
        &graph(graphs::NARROW_WEDGE),
        &GraphStrokeOptions::line_width(2.0),
        &mut FailingMerger,
        &mut output,
    );

    assert_eq!(
        result,
        Err(GraphStrokeError::Tessellation(
            lyon_tessellation::TessellationError::GeometryBuilder(
                lyon_tessellation::GeometryBuilderError::TooManyVertices
            )
        ))
    );
    assert!(output.began);
    assert!(output.aborted);
    assert!(!output.ended);

    // Without merge groups the failing service is never called.
    let mut output = Events::default();
    tess.tessellate_with(
        &graph(graphs::SEGMENT),
        &GraphStrokeOptions::line_width(2.0),
        &mut FailingMerger,
        &mut output,
    )
    .unwrap();
    assert!(output.ended);
}

#[test]
fn default_merger_is_reusable() {
    let mut merger = FillUnionTessellator::new();
    let mut tess = GraphStrokeTessellator::new();
    tess.set_logging(true);

    let options = GraphStrokeOptions::line_width(2.0);
    let mut first = PolygonBuffers::new();
    let mut second = PolygonBuffers::new();
    tess.tessellate_with(&graph(graphs::NARROW_WEDGE), &options, &mut merger, &mut first)
        .unwrap();
    tess.tessellate_with(&graph(graphs::NARROW_WEDGE), &options, &mut merger, &mut second)
        .unwrap();

    assert_eq!(first, second);
}

fn emitted_area(polygons: &[Vec<Point>]) -> f32 {
    polygons.iter().map(|p| polygon_area(p).abs()).sum()
}

#[test]
fn duplicate_edges_are_merged() {
    let graph = Graph::from_slices(&[[0.0, 0.0], [10.0, 0.0]], &[[0, 1], [0, 1]]);
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = StrokeContours::build(&graph, &options).unwrap();

    assert!(contours.num_overlap_candidates() > 0);
    assert!(contours.is_merged(EdgeId(0)));
    assert_eq!(contours.group(EdgeId(0)), contours.group(EdgeId(1)));

    // Each edge keeps its full outline.
    for edge in 0..2 {
        let area = polygon_area(contours.polygon(EdgeId(edge)));
        assert!((area - 20.0).abs() < 1e-3, "area: {}", area);
    }

    let polygons = tessellate(&graph, &options).unwrap();
    for polygon in &polygons {
        assert_eq!(polygon.len(), 3);
    }
    let area = emitted_area(&polygons);
    assert!((area - 20.0).abs() < 1e-2, "area: {}", area);
}

#[test]
fn collinear_edges_are_merged() {
    let graph = Graph::from_slices(&[[0.0, 0.0], [10.0, 0.0], [5.0, 0.0]], &[[0, 1], [0, 2]]);
    let options = GraphStrokeOptions::line_width(2.0);
    let contours = StrokeContours::build(&graph, &options).unwrap();

    assert!(contours.is_merged(EdgeId(0)));
    assert_eq!(contours.group(EdgeId(0)), contours.group(EdgeId(1)));
    assert!((polygon_area(contours.polygon(EdgeId(0))) - 20.0).abs() < 1e-3);
    assert!((polygon_area(contours.polygon(EdgeId(1))) - 10.0).abs() < 1e-3);

    // The short stroke is covered by the long one.
    let area = emitted_area(&tessellate(&graph, &options).unwrap());
    assert!((area - 20.0).abs() < 1e-2, "area: {}", area);
}

#[test]
fn crossing_sides_merge_neighbors() {
    // A short bar between two legs. The inner corners of the bar's lower
    // side pass each other, and the legs overlap below the bar.
    let graph = Graph::from_slices(
        &[[0.0, 0.0], [1.5, 0.0], [0.0, -5.0], [1.5, -5.0]],
        &[[0, 1], [0, 2], [1, 3]],
    );
    let contours = StrokeContours::build(&graph, &GraphStrokeOptions::line_width(2.0)).unwrap();

    assert_eq!(contours.num_overlap_candidates(), 0);
    assert_eq!(contours.group(EdgeId(1)), contours.group(EdgeId(2)));
    assert!(contours.is_merged(EdgeId(1)));
    assert!(!contours.is_merged(EdgeId(0)));

    // The two lower corners are replaced with the point where the mitered
    // sides cross.
    assert_polygon_eq(
        contours.polygon(EdgeId(0)),
        &[point(0.75, -0.75), point(2.5, 1.0), point(-1.0, 1.0)],
    );
}

#[test]
fn logging_does_not_change_output() {
    let options = GraphStrokeOptions::line_width(2.0);
    let graph = graph(graphs::NARROW_WEDGE);

    let mut quiet = GraphStrokeTessellator::new();
    let mut verbose = GraphStrokeTessellator::new();
    verbose.set_logging(true);

    let mut first = PolygonBuffers::new();
    let mut second = PolygonBuffers::new();
    quiet.tessellate(&graph, &options, &mut first).unwrap();
    verbose.tessellate(&graph, &options, &mut second).unwrap();

    assert!(!second.is_empty());
    assert_eq!(first, second);
}
