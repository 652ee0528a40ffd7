#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Tessellation of graph strokes.
//!
//! This crate is reexported in [graph_stroke](https://docs.rs/graph_stroke/).
//!
//! ## Overview
//!
//! A [`Graph`] is a set of vertices with 2D positions and straight edges
//! connecting pairs of vertices. Stroking it with a given line width produces
//! one filled polygon per edge, with the corners at shared vertices joined so
//! that neighboring edges meet without gaps.
//!
//! The most interesting types and traits of this crate are:
//!
//! * [`GraphStrokeTessellator`] - Runs the whole pipeline and forwards the
//!   resulting polygons to an output.
//! * [`StrokeContours`] - The intermediate per-edge polygons along with the
//!   groups of edges that have to be merged.
//! * [`PolygonBuilder`](geometry_builder/trait.PolygonBuilder.html) - The
//!   output interface. Each call receives one closed polygon.
//! * [`UnionTessellator`] - The service that resolves groups of overlapping
//!   polygons. [`FillUnionTessellator`] implements it with
//!   [lyon_tessellation](https://docs.rs/lyon_tessellation/)'s fill tessellator.
//!
//! ## The pipeline
//!
//! 1. For each vertex, the incident edges are sorted by angle and the corner
//!    between each pair of consecutive edges is computed. Corners that can't
//!    be built from a forward intersection of the two stroke sides mean the
//!    two strokes overlap near the vertex and are recorded as overlap
//!    candidates.
//! 2. Each edge gets a closed polygon built from the corners at both of its
//!    endpoints. When the two sides of a stroke cross each other, the
//!    neighboring edges owning those corners are put in the same merge group.
//! 3. Starting from each overlap candidate, nearby edges are tested for
//!    collision against the overlapping region and merged into its group.
//! 4. Edges that are alone in their group are emitted as is. Other groups are
//!    sent to the [`UnionTessellator`], which emits the union as triangles.
//!
//! ## Logging
//!
//! [`GraphStrokeTessellator::set_logging`] enables debug output through the
//! [log](https://docs.rs/log/) facade. Setting the `GRAPH_STROKE_FORCE_LOGGING`
//! environment variable enables it for every tessellator.

pub use graph_stroke_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

macro_rules! stroke_log {
    ($obj:expr, $fmt:expr) => (
        if $obj.log {
            log::debug!($fmt);
        }
    );
    ($obj:expr, $fmt:expr, $($arg:tt)*) => (
        if $obj.log {
            log::debug!($fmt, $($arg)*);
        }
    );
}

mod contour;
mod error;
pub mod geometry_builder;
mod graph;
mod join;
mod merge;
mod overlap;
mod stroke;
mod task_list;
mod union_find;

#[cfg(test)]
mod stroke_tests;

pub mod math {
    //! f32 versions of the geometry types, compatible with lyon's.

    pub use crate::geom::{point, vector};

    /// Alias for `euclid::default::Point2D<f32>`.
    pub type Point = crate::geom::Point<f32>;

    /// Alias for `euclid::default::Vector2D<f32>`.
    pub type Vector = crate::geom::Vector<f32>;
}

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::geometry_builder::{NoOutput, PolygonBuffers, PolygonBuilder};

#[doc(inline)]
pub use crate::graph::{EdgeId, Graph, VertexId};

#[doc(inline)]
pub use crate::merge::{FillUnionTessellator, UnionTessellator};

#[doc(inline)]
pub use crate::stroke::{GraphStrokeTessellator, StrokeContours};

use core::f32::consts::PI;

/// Parameters for the graph stroke tessellator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct GraphStrokeOptions {
    /// Width of the stroke along each edge.
    ///
    /// Must be strictly positive.
    /// Default value: `GraphStrokeOptions::DEFAULT_LINE_WIDTH`.
    pub line_width: f32,

    /// Angle in radians above which the gap between two consecutive edges
    /// at a vertex gets an extra miter point instead of a single corner.
    ///
    /// Values below π are raised to π. With `None`, no miter point is ever
    /// added.
    /// Default value: `None`.
    pub max_join_angle: Option<f32>,

    /// Maximum allowed distance to the path when the merge groups are
    /// tessellated.
    ///
    /// Default value: `GraphStrokeOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f32,
}

impl GraphStrokeOptions {
    pub const DEFAULT_LINE_WIDTH: f32 = 1.0;
    pub const DEFAULT_TOLERANCE: f32 = 0.1;
    /// The smallest join angle threshold, a straight angle.
    pub const MINIMUM_JOIN_ANGLE: f32 = PI;

    pub const DEFAULT: Self = GraphStrokeOptions {
        line_width: Self::DEFAULT_LINE_WIDTH,
        max_join_angle: None,
        tolerance: Self::DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn line_width(width: f32) -> Self {
        Self::DEFAULT.with_line_width(width)
    }

    #[inline]
    pub const fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    #[inline]
    pub const fn with_max_join_angle(mut self, angle: f32) -> Self {
        self.max_join_angle = Some(angle);
        self
    }

    #[inline]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The join angle threshold actually used by the tessellator.
    pub fn effective_join_angle(&self) -> f32 {
        match self.max_join_angle {
            Some(angle) => angle.max(Self::MINIMUM_JOIN_ANGLE),
            None => 2.0 * PI,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GraphStrokeError> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(GraphStrokeError::InvalidLineWidth(self.line_width));
        }
        if let Some(angle) = self.max_join_angle {
            if angle.is_nan() {
                return Err(GraphStrokeError::InvalidJoinAngle(angle));
            }
        }

        Ok(())
    }
}

impl Default for GraphStrokeOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn join_angle_threshold() {
    assert_eq!(GraphStrokeOptions::DEFAULT.effective_join_angle(), 2.0 * PI);
    assert_eq!(
        GraphStrokeOptions::DEFAULT
            .with_max_join_angle(1.0)
            .effective_join_angle(),
        PI
    );
    assert_eq!(
        GraphStrokeOptions::DEFAULT
            .with_max_join_angle(4.0)
            .effective_join_angle(),
        4.0
    );
}

#[test]
fn invalid_options() {
    assert_eq!(
        GraphStrokeOptions::line_width(-2.0).validate(),
        Err(GraphStrokeError::InvalidLineWidth(-2.0))
    );
    assert!(GraphStrokeOptions::line_width(0.0).validate().is_err());
    assert!(GraphStrokeOptions::line_width(f32::NAN).validate().is_err());
    assert!(GraphStrokeOptions::line_width(2.0)
        .with_max_join_angle(f32::NAN)
        .validate()
        .is_err());
    assert!(GraphStrokeOptions::line_width(2.0).validate().is_ok());
}
