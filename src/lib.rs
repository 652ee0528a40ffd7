#![deny(bare_trait_objects)]

//! Stroking of 2D graphs.
//!
//! A graph here is a set of positioned vertices connected by straight edges,
//! like a road map or a node diagram. Stroking it with a line width produces
//! filled polygons covering every edge, with clean corners where edges meet
//! and without double coverage where the strokes of neighboring edges
//! overlap.
//!
//! # Crates
//!
//! This meta-crate (`graph_stroke`) reexports the following sub-crates for convenience:
//!
//! * **graph_stroke_tessellation** - The stroke tessellator and its output interfaces.
//! * **graph_stroke_geom** - Line, ray and oriented rectangle math on top of euclid.
//! * **graph_stroke_extra** - Sample graphs for testing, behind the `extra` feature flag.
//!
//! Each `graph_stroke_<name>` crate is reexported as a `<name>` module in `graph_stroke`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use graph_stroke::math::point;
//! use graph_stroke::tessellation::{
//!     Graph, GraphStrokeOptions, GraphStrokeTessellator, PolygonBuffers,
//! };
//!
//! // A small junction with three branches.
//! let mut graph = Graph::new();
//! let center = graph.add_vertex(point(0.0, 0.0));
//! for &(x, y) in &[(10.0, 0.0), (0.0, 10.0), (-8.0, -6.0)] {
//!     let end = graph.add_vertex(point(x, y));
//!     graph.add_edge(center, end);
//! }
//!
//! let mut output = PolygonBuffers::new();
//! let mut tessellator = GraphStrokeTessellator::new();
//! tessellator
//!     .tessellate(
//!         &graph,
//!         &GraphStrokeOptions::line_width(2.0).with_max_join_angle(3.5),
//!         &mut output,
//!     )
//!     .unwrap();
//!
//! // None of the branches overlap, so each edge gets its own polygon.
//! assert_eq!(output.polygons.len(), 3);
//! ```

pub extern crate graph_stroke_tessellation;

#[cfg(feature = "extra")]
pub extern crate graph_stroke_extra;

pub use graph_stroke_tessellation as tessellation;
pub use tessellation::geom;

#[cfg(feature = "extra")]
pub use graph_stroke_extra as extra;

pub use tessellation::math;
