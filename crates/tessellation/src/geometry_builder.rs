//! Interfaces that receive the polygons generated by the tessellator.
//!
//! ## Overview
//!
//! The graph stroke tessellator does not decide how its output is stored. Each
//! polygon it produces is handed to a [`PolygonBuilder`] as a slice of points
//! forming a closed loop: the last point implicitly connects back to the first
//! one. The slice is only valid for the duration of the call, so builders that
//! need to keep the polygons around have to copy them.
//!
//! This module provides:
//!
//! * The trait [`PolygonBuilder`], which the tessellator interfaces with.
//! * The struct [`PolygonBuffers`], which stores every polygon in a `Vec`.
//! * The struct [`NoOutput`], which discards everything.
//!
//! Closures taking a `&[Point]` also implement [`PolygonBuilder`].
//!
//! ## Examples
//!
//! ```
//! use graph_stroke_tessellation::{Graph, GraphStrokeOptions, GraphStrokeTessellator};
//! use graph_stroke_tessellation::math::Point;
//!
//! let graph = Graph::from_slices(&[[0.0, 0.0], [10.0, 0.0]], &[[0, 1]]);
//!
//! let mut num_points = 0;
//! let mut output = |polygon: &[Point]| { num_points += polygon.len(); };
//!
//! let mut tessellator = GraphStrokeTessellator::new();
//! tessellator.tessellate(&graph, &GraphStrokeOptions::line_width(2.0), &mut output).unwrap();
//!
//! assert_eq!(num_points, 4);
//! ```

use crate::math::Point;

/// An interface receiving the polygons produced by the tessellator.
pub trait PolygonBuilder {
    /// Called at the beginning of a generation.
    ///
    /// end_geometry must be called before begin_geometry is called again.
    fn begin_geometry(&mut self) {}

    /// Called at the end of a generation.
    fn end_geometry(&mut self) {}

    /// Receives a closed polygon.
    fn add_polygon(&mut self, polygon: &[Point]);

    /// abort_geometry is called instead of end_geometry if an error occurred while producing
    /// the geometry and we won't be able to finish.
    ///
    /// Some polygons may already have been added at this point.
    fn abort_geometry(&mut self) {}
}

impl<F> PolygonBuilder for F
where
    F: FnMut(&[Point]),
{
    fn add_polygon(&mut self, polygon: &[Point]) {
        self(polygon)
    }
}

/// Collects every generated polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonBuffers {
    pub polygons: Vec<Vec<Point>>,
}

impl PolygonBuffers {
    pub fn new() -> Self {
        PolygonBuffers {
            polygons: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }
}

impl PolygonBuilder for PolygonBuffers {
    fn add_polygon(&mut self, polygon: &[Point]) {
        self.polygons.push(polygon.to_vec());
    }
}

/// A geometry builder that does not output any geometry.
///
/// Mostly useful for testing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoOutput {
    pub num_polygons: usize,
}

impl NoOutput {
    pub fn new() -> Self {
        NoOutput { num_polygons: 0 }
    }
}

impl PolygonBuilder for NoOutput {
    fn add_polygon(&mut self, _polygon: &[Point]) {
        self.num_polygons += 1;
    }
}

#[test]
fn buffers_copy_polygons() {
    use crate::math::point;

    let mut buffers = PolygonBuffers::new();
    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];
    buffers.add_polygon(&square);
    buffers.add_polygon(&square[..3]);

    assert_eq!(buffers.len(), 2);
    assert_eq!(buffers.polygons[0], square.to_vec());
    assert_eq!(buffers.polygons[1].len(), 3);

    buffers.clear();
    assert!(buffers.is_empty());
}
