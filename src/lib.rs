//! FirstFit coloring of random triangle-free graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error type of the crate
pub mod error;

/// run configuration (sizes, probabilities, seeds, scan orders)
pub mod config;

/// coloring instance base trait, colorings and checker
pub mod color;

/// simple undirected graphs
pub mod graph;

/// read/write DIMACS formats
pub mod dimacs;

/// random graph generation
pub mod generator;

/// triangle elimination
pub mod triangles;

/// FirstFit greedy coloring
pub mod firstfit;

/// DSATUR greedy coloring (baseline)
pub mod dsatur;

/// competitive ratio and Monte-Carlo evaluation
pub mod evaluator;

/// helper and utility methods for executables
pub mod util;

pub use color::{Coloring, ColoringInstance, VertexId};
pub use error::{ColorError, Result};
pub use evaluator::{average_colors_used, competitive_ratio};
pub use firstfit::greedy_coloring;
pub use generator::generate_graph;
pub use graph::Graph;
pub use triangles::eliminate_triangles;
