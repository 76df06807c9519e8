//! SSSP Compare - Single-Source Shortest Path engines with a comparison API
//!
//! This library implements three interchangeable shortest-path engines over
//! weighted directed graphs with string node identifiers:
//!
//! - [`BellmanFord`]: classic label-correcting full-edge-list relaxation with
//!   negative-cycle detection (negative weights allowed),
//! - [`Dijkstra`]: greedy frontier expansion over a lazy-deletion min-heap
//!   (negative edges are skipped),
//! - [`Tsinghua`]: recursive pivot-based frontier clustering approximating
//!   O(m log^(2/3) n) behavior (negative weights rejected).
//!
//! All three share one input contract (graph + source + optional target) and
//! one output contract ([`ShortestPathResult`]); [`algorithm::compare`] runs
//! them side by side. The `web` module serves the engines over HTTP.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    bellman_ford::BellmanFord, compare::ComparisonResult, dijkstra::Dijkstra, tsinghua::Tsinghua,
    Metrics, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{EdgeSpec, GraphIndex, GraphSpec, NodeSpec};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("source node `{0}` not found in node list")]
    InvalidSource(String),

    #[error("negative edge weight {0} is not supported by this algorithm")]
    NegativeWeightUnsupported(f64),

    #[error("missing required field: {0}")]
    MalformedInput(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
