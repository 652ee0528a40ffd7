//! Assembly of the closed outline of each edge.

use crate::geom::{inner_product, line_intersection};
use crate::graph::EdgeId;
use crate::math::Point;
use crate::stroke::ContourBuilder;

use arrayvec::ArrayVec;

/// Two points per side at each endpoint plus two miter points and the
/// endpoint itself.
pub(crate) const MAX_EDGE_POLYGON_POINTS: usize = 10;

pub(crate) type EdgePolygon = ArrayVec<Point, MAX_EDGE_POLYGON_POINTS>;

impl<'l> ContourBuilder<'l> {
    pub(crate) fn assemble_polygons(&mut self) {
        self.polygons.reserve(self.graph.num_edges());
        for idx in 0..self.graph.num_edges() {
            let polygon = self.assemble_polygon(EdgeId::from_usize(idx));
            self.polygons.push(polygon);
        }
    }

    /// Walks the right side from `from` to `to`, around the `to` endpoint, then
    /// the left side back to `from` and around it.
    fn assemble_polygon(&mut self, edge: EdgeId) -> EdgePolygon {
        let [from, to] = self.graph.endpoints(edge);
        let from_position = self.graph.position(from);
        let to_position = self.graph.position(to);
        let [start, end] = self.joins[edge.to_usize()];

        let mut polygon = EdgePolygon::new();

        if inner_product(start.last, end.first, from_position, to_position) < 0.0 {
            // The corners overlap along the right side.
            self.force_union(start.last_owner, end.first_owner);
            let crossing = line_intersection(
                start.miter_last.unwrap_or(from_position),
                start.last,
                end.first,
                end.miter_first.unwrap_or(to_position),
            );
            push_crossing(&mut polygon, crossing, start.last, end.first);
        } else {
            polygon.push(start.last);
            polygon.push(end.first);
        }

        if let Some(miter) = end.miter_first {
            polygon.push(miter);
        }
        if !end.skips_middle() {
            polygon.push(to_position);
        }
        if let Some(miter) = end.miter_last {
            polygon.push(miter);
        }

        if inner_product(start.first, end.last, from_position, to_position) < 0.0 {
            // Same on the left side.
            self.force_union(start.first_owner, end.last_owner);
            let crossing = line_intersection(
                start.first,
                start.miter_first.unwrap_or(from_position),
                end.miter_last.unwrap_or(to_position),
                end.last,
            );
            push_crossing(&mut polygon, crossing, end.last, start.first);
        } else {
            polygon.push(end.last);
            polygon.push(start.first);
        }

        if let Some(miter) = start.miter_first {
            polygon.push(miter);
        }
        if !start.skips_middle() {
            polygon.push(from_position);
        }
        if let Some(miter) = start.miter_last {
            polygon.push(miter);
        }

        polygon
    }
}

fn push_crossing(polygon: &mut EdgePolygon, crossing: Option<Point>, a: Point, b: Point) {
    match crossing {
        Some(point) => polygon.push(point),
        None => {
            polygon.push(a);
            polygon.push(b);
        }
    }
}

#[test]
fn crossing_point_or_both_ends() {
    use crate::math::point;

    let a = point(0.0, -1.0);
    let b = point(2.0, -1.0);

    let mut polygon = EdgePolygon::new();
    push_crossing(&mut polygon, Some(point(1.0, -0.5)), a, b);
    assert_eq!(polygon.as_slice(), &[point(1.0, -0.5)]);

    // Parallel sides keep both corners.
    let mut polygon = EdgePolygon::new();
    push_crossing(&mut polygon, None, a, b);
    assert_eq!(polygon.as_slice(), &[a, b]);
}
