//! Corners between consecutive edges around each vertex.

use crate::geom::{ray_intersection, OrientedRect, RayIntersection};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::math::{vector, Point, Vector};
use crate::stroke::ContourBuilder;

use core::cmp::Ordering;
use core::f32::consts::PI;

/// An edge as seen from one of its endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct HalfEdge {
    pub to: VertexId,
    /// Angle of `direction` in `[-π, π]`.
    pub angle: f32,
    pub direction: Vector,
    /// Left normal of `direction`, scaled to half of the line width.
    pub normal: Vector,
    pub edge: EdgeId,
}

#[derive(Clone, Debug)]
pub(crate) struct VertexData {
    pub position: Point,
    /// Sorted by angle once all edges are collected.
    pub half_edges: Vec<HalfEdge>,
}

/// The outline of an edge's stroke around one of its endpoints.
///
/// Seen from the endpoint, `first` is on the left side of the edge and `last`
/// on the right side. `first_owner` and `last_owner` are the neighbor edges
/// that share these corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct JoinRecord {
    pub first: Point,
    pub last: Point,
    pub first_owner: EdgeId,
    pub last_owner: EdgeId,
    pub miter_first: Option<Point>,
    pub miter_last: Option<Point>,
    pub skip_middle_first: bool,
    pub skip_middle_last: bool,
}

impl JoinRecord {
    pub fn new(edge: EdgeId, position: Point) -> Self {
        JoinRecord {
            first: position,
            last: position,
            first_owner: edge,
            last_owner: edge,
            miter_first: None,
            miter_last: None,
            skip_middle_first: false,
            skip_middle_last: false,
        }
    }

    /// The endpoint itself is not needed in the outline when both of its sides
    /// are straight.
    #[inline]
    pub fn skips_middle(&self) -> bool {
        self.skip_middle_first && self.skip_middle_last
    }
}

/// Two consecutive edges around a vertex whose stroke sides don't meet in
/// front of the vertex, meaning the strokes overlap each other.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct OverlapCandidate {
    pub edges: [EdgeId; 2],
    /// Where to start looking for other edges covering the overlap.
    pub seeds: [VertexId; 3],
    /// The region between each edge's side and its center line, up to the
    /// point where the sides cross.
    pub rects: [OrientedRect<f32>; 2],
}

/// Index of the join record of `edge` at `vertex`.
#[inline]
pub(crate) fn join_slot(graph: &Graph, edge: EdgeId, vertex: VertexId) -> usize {
    if graph.endpoints(edge)[0] == vertex {
        0
    } else {
        1
    }
}

fn opposite_angle(angle: f32) -> f32 {
    if angle <= 0.0 {
        angle + PI
    } else {
        angle - PI
    }
}

impl<'l> ContourBuilder<'l> {
    /// Registers each edge at both of its endpoints and sorts them by angle.
    pub(crate) fn collect_half_edges(&mut self) {
        let graph = self.graph;
        for (idx, &[from, to]) in graph.edges().iter().enumerate() {
            let edge = EdgeId::from_usize(idx);
            let direction = graph.position(to) - graph.position(from);
            let angle = direction.y.atan2(direction.x);
            let normal = vector(-direction.y, direction.x) * (self.half_width / direction.length());

            self.vertices[from.to_usize()].half_edges.push(HalfEdge {
                to,
                angle,
                direction,
                normal,
                edge,
            });
            self.vertices[to.to_usize()].half_edges.push(HalfEdge {
                to: from,
                angle: opposite_angle(angle),
                direction: -direction,
                normal: -normal,
                edge,
            });
        }

        for vertex in &mut self.vertices {
            vertex
                .half_edges
                .sort_by(|a, b| a.angle.partial_cmp(&b.angle).unwrap_or(Ordering::Equal));
        }
    }

    pub(crate) fn build_joins(&mut self) {
        for idx in 0..self.vertices.len() {
            self.build_vertex_joins(VertexId::from_usize(idx));
        }
    }

    fn build_vertex_joins(&mut self, vertex: VertexId) {
        let graph = self.graph;
        let half_width = self.half_width;
        let max_join_angle = self.max_join_angle;
        let data = &self.vertices[vertex.to_usize()];
        let position = data.position;
        let half_edges = &data.half_edges;
        let n = half_edges.len();

        if n == 0 {
            return;
        }

        if n == 1 {
            // Butt cap.
            let half_edge = &half_edges[0];
            let slot = join_slot(graph, half_edge.edge, vertex);
            let join = &mut self.joins[half_edge.edge.to_usize()][slot];
            join.first = position + half_edge.normal;
            join.last = position - half_edge.normal;
            join.first_owner = half_edge.edge;
            join.last_owner = half_edge.edge;
            join.skip_middle_first = true;
            join.skip_middle_last = true;
            return;
        }

        for (i, edge) in half_edges.iter().enumerate() {
            let wraps = i == n - 1;
            let next = &half_edges[if wraps { 0 } else { i + 1 }];
            let edge_slot = join_slot(graph, edge.edge, vertex);
            let next_slot = join_slot(graph, next.edge, vertex);

            self.joins[edge.edge.to_usize()][edge_slot].first_owner = next.edge;
            self.joins[next.edge.to_usize()][next_slot].last_owner = edge.edge;

            // The left side of this edge against the right side of the next one.
            let p1 = position + edge.normal;
            let p2 = p1 + edge.direction;
            let p3 = position - next.normal;
            let p4 = p3 + next.direction;

            let same_direction = edge.direction.cross(next.direction) == 0.0
                && edge.direction.dot(next.direction) > 0.0;

            let (first, last) = if same_direction {
                // Duplicate or collinear edges. The shorter stroke lies inside
                // the longer one.
                self.candidates.push(OverlapCandidate {
                    edges: [edge.edge, next.edge],
                    seeds: [vertex, edge.to, next.to],
                    rects: [
                        OrientedRect::from_segment(position, graph.position(edge.to), edge.normal),
                        OrientedRect::from_segment(position, graph.position(next.to), next.normal),
                    ],
                });

                (p1, p3)
            } else {
                match ray_intersection(p1, p2, p3, p4) {
                    RayIntersection::Corner(corner) => {
                        let next_angle = if wraps { next.angle + 2.0 * PI } else { next.angle };
                        let corners = if next_angle - edge.angle > max_join_angle {
                            let miter = position + (corner - position).normalize() * half_width;
                            self.joins[edge.edge.to_usize()][edge_slot].miter_first = Some(miter);
                            self.joins[next.edge.to_usize()][next_slot].miter_last = Some(miter);
                            (p1, p3)
                        } else {
                            (corner, corner)
                        };

                        if n == 2 {
                            self.joins[edge.edge.to_usize()][edge_slot].skip_middle_first = true;
                            self.joins[next.edge.to_usize()][next_slot].skip_middle_last = true;
                        }

                        corners
                    }
                    RayIntersection::Overlap(intersection) => {
                        let q1 = intersection - edge.normal;
                        let q3 = intersection + next.normal;
                        self.candidates.push(OverlapCandidate {
                            edges: [edge.edge, next.edge],
                            seeds: [vertex, edge.to, next.to],
                            rects: [
                                OrientedRect::new([p1, intersection, q1, position]),
                                OrientedRect::new([p3, intersection, q3, position]),
                            ],
                        });

                        (p1, p3)
                    }
                }
            };

            self.joins[edge.edge.to_usize()][edge_slot].first = first;
            self.joins[next.edge.to_usize()][next_slot].last = last;
        }
    }
}
