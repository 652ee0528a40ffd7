//! Resolution of merged groups of polygons.

use crate::error::GraphStrokeResult;
use crate::geometry_builder::PolygonBuilder;
use crate::math::Point;
use crate::GraphStrokeOptions;

use lyon_tessellation::path::Path;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

/// A service turning a set of possibly overlapping polygons into the
/// geometry of their union.
///
/// The input polygons are closed loops that may overlap each other or
/// intersect themselves. Implementations are expected to resolve the outer
/// boundary of the union under a non-zero (or positive) winding rule and
/// decompose it into primitives, calling `output` once per primitive.
///
/// Calls are made synchronously, one group at a time.
pub trait UnionTessellator {
    fn tessellate_union(
        &mut self,
        polygons: &[&[Point]],
        options: &GraphStrokeOptions,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult;
}

/// A [`UnionTessellator`] implemented on top of
/// [lyon_tessellation](https://docs.rs/lyon_tessellation/)'s `FillTessellator`.
///
/// The fill tessellator resolves intersections between the input polygons and
/// produces triangles covering their union in a single pass. Each triangle is
/// emitted as a three point polygon.
pub struct FillUnionTessellator {
    fill: FillTessellator,
    buffers: VertexBuffers<Point, u32>,
}

impl Default for FillUnionTessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl FillUnionTessellator {
    pub fn new() -> Self {
        FillUnionTessellator {
            fill: FillTessellator::new(),
            buffers: VertexBuffers::new(),
        }
    }

    /// Enable/disable the verbose logging of the underlying fill tessellator.
    pub fn set_logging(&mut self, is_enabled: bool) {
        self.fill.set_logging(is_enabled);
    }
}

impl UnionTessellator for FillUnionTessellator {
    fn tessellate_union(
        &mut self,
        polygons: &[&[Point]],
        options: &GraphStrokeOptions,
        output: &mut dyn PolygonBuilder,
    ) -> GraphStrokeResult {
        let mut builder = Path::builder();
        for polygon in polygons {
            let mut points = polygon.iter();
            let first = match points.next() {
                Some(first) => *first,
                None => continue,
            };
            builder.begin(first);
            for point in points {
                builder.line_to(*point);
            }
            builder.end(true);
        }
        let path = builder.build();

        self.buffers.vertices.clear();
        self.buffers.indices.clear();

        // Edge polygons are wound the same way, so the non-zero rule covers
        // their union. Self-intersecting polygons from crossing sides may
        // wind negatively in places, which a positive rule would drop and
        // this one keeps.
        let fill_options = FillOptions::tolerance(options.tolerance).with_fill_rule(FillRule::NonZero);
        self.fill.tessellate_path(
            &path,
            &fill_options,
            &mut BuffersBuilder::new(&mut self.buffers, |vertex: FillVertex| vertex.position()),
        )?;

        let vertices = &self.buffers.vertices;
        for triangle in self.buffers.indices.chunks_exact(3) {
            output.add_polygon(&[
                vertices[triangle[0] as usize],
                vertices[triangle[1] as usize],
                vertices[triangle[2] as usize],
            ]);
        }

        Ok(())
    }
}

#[cfg(test)]
fn triangle_area(polygon: &[Point]) -> f32 {
    assert_eq!(polygon.len(), 3);
    ((polygon[1] - polygon[0]).cross(polygon[2] - polygon[0]) * 0.5).abs()
}

#[test]
fn union_of_overlapping_squares() {
    use crate::geometry_builder::PolygonBuffers;
    use crate::math::point;

    let a = [
        point(0.0, 0.0),
        point(2.0, 0.0),
        point(2.0, 2.0),
        point(0.0, 2.0),
    ];
    let b = [
        point(1.0, 1.0),
        point(3.0, 1.0),
        point(3.0, 3.0),
        point(1.0, 3.0),
    ];

    let mut output = PolygonBuffers::new();
    let mut tess = FillUnionTessellator::new();
    let polygons: [&[Point]; 2] = [&a, &b];
    tess.tessellate_union(&polygons, &GraphStrokeOptions::DEFAULT, &mut output)
        .unwrap();

    assert!(!output.is_empty());
    let area: f32 = output.polygons.iter().map(|p| triangle_area(p)).sum();
    assert!((area - 7.0).abs() < 1e-3, "area: {}", area);
}

#[test]
fn union_ignores_empty_polygons() {
    use crate::geometry_builder::NoOutput;

    let mut output = NoOutput::new();
    let mut tess = FillUnionTessellator::new();
    let polygons: [&[Point]; 2] = [&[], &[]];
    tess.tessellate_union(&polygons, &GraphStrokeOptions::DEFAULT, &mut output)
        .unwrap();

    assert_eq!(output.num_polygons, 0);
}
