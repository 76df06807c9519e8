use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{reconstruct_path, Metrics, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{GraphIndex, GraphSpec};
use crate::Result;

/// Greedy shortest path over a lazy-deletion min-heap.
///
/// Assumes non-negative weights; an offending negative edge is skipped
/// rather than failing the run, so the result never traverses one. When a
/// target is resolved the search terminates as soon as the target is
/// finalized, leaving unvisited nodes at infinity.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new engine instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(
        &self,
        graph: &GraphSpec,
        source_id: &str,
        target_id: Option<&str>,
    ) -> Result<ShortestPathResult<W>> {
        let index = GraphIndex::build(graph, source_id, target_id)?;
        let n = index.node_count();
        let adjacency = index.adjacency();

        let mut dist = vec![W::infinity(); n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        dist[index.source] = W::zero();

        let mut heap = MinHeap::new();
        heap.push(index.source, W::zero());

        let mut relaxations = 0u64;
        let mut heap_ops = 0u64;

        while let Some((u, _key)) = heap.pop() {
            heap_ops += 1;

            // Stale duplicate for an already finalized node.
            if visited[u] {
                continue;
            }
            visited[u] = true;

            if index.target == Some(u) {
                break;
            }

            for &(v, w) in &adjacency[u] {
                if w < W::zero() {
                    continue;
                }
                let candidate = dist[u] + w;
                if candidate < dist[v] {
                    dist[v] = candidate;
                    parent[v] = Some(u);
                    heap.push(v, candidate);
                    heap_ops += 1;
                    relaxations += 1;
                }
            }
        }

        debug!(
            "dijkstra: {} nodes, {} edges, {} relaxations, {} heap operations",
            n,
            index.edges.len(),
            relaxations,
            heap_ops
        );

        let path = reconstruct_path(&index, &parent);

        Ok(ShortestPathResult {
            dist,
            parent,
            path,
            id_to_index: index.id_to_index,
            metrics: Metrics {
                relaxations,
                heap_ops: Some(heap_ops),
                ..Metrics::default()
            },
            has_negative_cycle: false,
        })
    }
}
