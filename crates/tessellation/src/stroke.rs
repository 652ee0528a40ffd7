use crate::contour::EdgePolygon;
use crate::error::{GraphStrokeError, GraphStrokeResult};
use crate::geometry_builder::PolygonBuilder;
use crate::graph::{EdgeId, Graph};
use crate::join::{JoinRecord, OverlapCandidate, VertexData};
use crate::math::Point;
use crate::merge::{FillUnionTessellator, UnionTessellator};
use crate::union_find::UnionFind;
use crate::GraphStrokeOptions;

/// Stroke tessellator for graphs.
///
/// Each edge of the graph is turned into a closed polygon. Edges whose
/// strokes overlap are merged, and the union of each merged group is
/// tessellated with a [`UnionTessellator`].
///
/// # Examples
///
/// ```
/// use graph_stroke_tessellation::{Graph, GraphStrokeOptions, GraphStrokeTessellator, PolygonBuffers};
///
/// let graph = Graph::from_slices(
///     &[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
///     &[[0, 1], [1, 2]],
/// );
///
/// let mut output = PolygonBuffers::new();
/// let mut tessellator = GraphStrokeTessellator::new();
/// tessellator.tessellate(
///     &graph,
///     &GraphStrokeOptions::line_width(2.0),
///     &mut output,
/// ).unwrap();
///
/// // One polygon per edge.
/// assert_eq!(output.polygons.len(), 2);
/// ```
pub struct GraphStrokeTessellator {
    merger: FillUnionTessellator,
    log: bool,
}

impl Default for GraphStrokeTessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStrokeTessellator {
    pub fn new() -> Self {
        let log = std::env::var("GRAPH_STROKE_FORCE_LOGGING").is_ok();
        let mut merger = FillUnionTessellator::new();
        merger.set_logging(log);

        GraphStrokeTessellator { merger, log }
    }

    /// Enable/disable some verbose logging during the tessellation, for
    /// debugging purposes.
    ///
    /// This also applies to the fill tessellator that resolves merge groups.
    pub fn set_logging(&mut self, is_enabled: bool) {
        let forced = std::env::var("GRAPH_STROKE_FORCE_LOGGING").is_ok();
        self.log = is_enabled || forced;
        self.merger.set_logging(self.log);
    }

    /// Compute the tessellation of a graph.
    pub fn tessellate(
        &mut self,
        graph: &Graph,
        options: &GraphStrokeOptions,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        let contours = StrokeContours::build_impl(graph, options, self.log)?;
        contours.emit(options, &mut self.merger, output)
    }

    /// Compute the tessellation of a graph, resolving merged groups with
    /// a custom service.
    pub fn tessellate_with(
        &mut self,
        graph: &Graph,
        options: &GraphStrokeOptions,
        merger: &mut dyn UnionTessellator,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        let contours = StrokeContours::build_impl(graph, options, self.log)?;
        contours.emit(options, merger, output)
    }
}

/// The polygons of each edge of a graph, and how they must be merged.
///
/// Built by the first phases of the tessellator. Inspecting it is mostly
/// useful to know which edges end up in a merged group.
#[derive(Clone, Debug)]
pub struct StrokeContours {
    polygons: Vec<EdgePolygon>,
    /// The representative edge of each edge's group.
    groups: Vec<EdgeId>,
    /// Number of edges per group, indexed by representative.
    group_sizes: Vec<u32>,
    num_overlaps: usize,
    log: bool,
}

impl StrokeContours {
    /// Computes the edge polygons and merge groups of a graph.
    pub fn build(graph: &Graph, options: &GraphStrokeOptions) -> Result<Self, GraphStrokeError> {
        Self::build_impl(graph, options, false)
    }

    fn build_impl(
        graph: &Graph,
        options: &GraphStrokeOptions,
        log: bool,
    ) -> Result<Self, GraphStrokeError> {
        options.validate()?;
        graph.validate()?;

        let mut builder = ContourBuilder::new(graph, options, log);
        stroke_log!(
            builder,
            "stroking {} vertices and {} edges, line width {}",
            graph.num_vertices(),
            graph.num_edges(),
            options.line_width
        );

        builder.collect_half_edges();
        builder.build_joins();
        builder.assemble_polygons();
        builder.propagate_overlaps();

        Ok(builder.finish())
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.polygons.len()
    }

    /// The closed outline of an edge's stroke, before any merge.
    #[inline]
    pub fn polygon(&self, edge: EdgeId) -> &[Point] {
        &self.polygons[edge.to_usize()]
    }

    /// The representative edge of the group that contains `edge`.
    #[inline]
    pub fn group(&self, edge: EdgeId) -> EdgeId {
        self.groups[edge.to_usize()]
    }

    /// Returns true if the edge shares its group with other edges.
    #[inline]
    pub fn is_merged(&self, edge: EdgeId) -> bool {
        self.group_sizes[self.group(edge).to_usize()] > 1
    }

    pub fn num_groups(&self) -> usize {
        self.group_sizes.iter().filter(|&&size| size > 0).count()
    }

    /// Number of joins that could not be resolved locally.
    pub fn num_overlap_candidates(&self) -> usize {
        self.num_overlaps
    }

    /// Sends the polygons to the output.
    ///
    /// Polygons of edges that are alone in their group are emitted directly, in
    /// edge order. Each merged group is then handed to `merger`, in the order
    /// of its representative edge.
    pub fn emit(
        &self,
        options: &GraphStrokeOptions,
        merger: &mut dyn UnionTessellator,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        output.begin_geometry();

        let mut merged: Vec<Vec<&[Point]>> = vec![Vec::new(); self.polygons.len()];
        for (idx, polygon) in self.polygons.iter().enumerate() {
            let group = self.groups[idx].to_usize();
            if self.group_sizes[group] == 1 {
                output.add_polygon(polygon);
            } else {
                merged[group].push(polygon.as_slice());
            }
        }

        for (group, polygons) in merged.iter().enumerate() {
            if polygons.is_empty() {
                continue;
            }

            stroke_log!(self, "merging {} polygons into group e{}", polygons.len(), group);

            if let Err(e) = merger.tessellate_union(polygons, options, output) {
                stroke_log!(self, "Merge failed with error: {}.", e);
                output.abort_geometry();

                return Err(e);
            }
        }

        output.end_geometry();

        Ok(())
    }
}

/// State shared by the contour building phases.
pub(crate) struct ContourBuilder<'l> {
    pub graph: &'l Graph,
    pub half_width: f32,
    pub max_join_angle: f32,
    pub vertices: Vec<VertexData>,
    /// Per edge, the join at its first and at its second endpoint.
    pub joins: Vec<[JoinRecord; 2]>,
    pub polygons: Vec<EdgePolygon>,
    pub sets: UnionFind,
    pub candidates: Vec<OverlapCandidate>,
    pub log: bool,
}

impl<'l> ContourBuilder<'l> {
    fn new(graph: &'l Graph, options: &GraphStrokeOptions, log: bool) -> Self {
        ContourBuilder {
            graph,
            half_width: options.line_width * 0.5,
            max_join_angle: options.effective_join_angle(),
            vertices: graph
                .vertices()
                .iter()
                .map(|&position| VertexData {
                    position,
                    half_edges: Vec::new(),
                })
                .collect(),
            joins: graph
                .edges()
                .iter()
                .enumerate()
                .map(|(idx, &[from, to])| {
                    let edge = EdgeId::from_usize(idx);
                    [
                        JoinRecord::new(edge, graph.position(from)),
                        JoinRecord::new(edge, graph.position(to)),
                    ]
                })
                .collect(),
            polygons: Vec::new(),
            sets: UnionFind::new(graph.num_edges()),
            candidates: Vec::new(),
            log,
        }
    }

    pub(crate) fn force_union(&mut self, a: EdgeId, b: EdgeId) {
        if self.sets.union(a, b) {
            stroke_log!(self, "merge {:?} and {:?}", a, b);
        }
    }

    fn finish(mut self) -> StrokeContours {
        let num_edges = self.sets.len();
        let mut groups = Vec::with_capacity(num_edges);
        let mut group_sizes = vec![0; num_edges];
        for idx in 0..num_edges {
            let group = self.sets.find(EdgeId::from_usize(idx));
            group_sizes[group.to_usize()] += 1;
            groups.push(group);
        }

        for (idx, &size) in group_sizes.iter().enumerate() {
            debug_assert!(size <= 1 || self.sets.has_members(EdgeId::from_usize(idx)));
        }

        StrokeContours {
            polygons: self.polygons,
            groups,
            group_sizes,
            num_overlaps: self.candidates.len(),
            log: self.log,
        }
    }
}
