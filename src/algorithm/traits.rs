use log::warn;
use num_traits::{Float, Zero};
use serde::Serialize;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::{GraphIndex, GraphSpec};
use crate::Result;

/// Per-run performance counters.
///
/// `relaxations` is common to all engines; the optional counters are
/// populated only by the engine they belong to (`iterations` by the classic
/// engine, `heap_ops` by the priority engine, `pivot_selections` and
/// `recursive_partitions` by the partitioned frontier engine).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub relaxations: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heap_ops: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_selections: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive_partitions: Option<u64>,
}

/// Result of a shortest path engine execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to each node index; `W::infinity()` marks an
    /// unreachable node.
    pub dist: Vec<W>,

    /// Predecessor node index in the shortest path tree, per node index.
    pub parent: Vec<Option<usize>>,

    /// Reconstructed source-to-target path as original node identifiers.
    /// Empty when no target was resolved, the target is unreachable, or a
    /// negative cycle suppressed reconstruction.
    pub path: Vec<String>,

    /// The dense index assignment, exposed for introspection.
    pub id_to_index: HashMap<String, usize>,

    /// Per-run counters.
    pub metrics: Metrics,

    /// Set only by the classic engine when a negative-weight cycle reachable
    /// from the source exists; always `false` for the other engines.
    pub has_negative_cycle: bool,
}

/// Trait for shortest path engines sharing the input/output contract
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the engine
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `source_id` to all nodes of `graph`,
    /// reconstructing a path to `target_id` when one is supplied.
    fn run(
        &self,
        graph: &GraphSpec,
        source_id: &str,
        target_id: Option<&str>,
    ) -> Result<ShortestPathResult<W>>;
}

/// Walks the predecessor vector from the resolved target back toward the
/// source and returns the path as original node identifiers, source first.
///
/// Returns an empty path when no target was resolved, when the target is
/// unreachable (the walk ends somewhere other than the source), or when the
/// walk revisits an index. The latter indicates a cycle in the predecessor
/// structure, which cannot occur absent a negative cycle but is defended
/// against rather than looping.
pub fn reconstruct_path<W>(index: &GraphIndex<W>, parent: &[Option<usize>]) -> Vec<String>
where
    W: Float + Zero + Debug + Copy,
{
    let target = match index.target {
        Some(target) => target,
        None => return Vec::new(),
    };

    let mut path = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(target);
    let mut root = target;

    while let Some(node) = current {
        if !visited.insert(node) {
            warn!("cycle in predecessor structure at node index {}", node);
            return Vec::new();
        }
        path.push(index.ids[node].clone());
        root = node;
        current = parent[node];
    }

    // A walk that does not terminate at the source means the target was
    // never reached; there is no path to report.
    if root != index.source {
        return Vec::new();
    }

    path.reverse();
    path
}
