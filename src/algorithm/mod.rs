pub mod bellman_ford;
pub mod compare;
pub mod dijkstra;
pub mod traits;
pub mod tsinghua;

pub use traits::{reconstruct_path, Metrics, ShortestPathAlgorithm, ShortestPathResult};
