#![deny(bare_trait_objects)]

//! Optional utilities for the graph_stroke crates.
//!
//! The graphs are given as plain arrays so that they can be loaded by any
//! graph representation, for example with `Graph::from_slices`.

pub mod graphs;

pub use graphs::GraphData;
