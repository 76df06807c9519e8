use log::debug;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{reconstruct_path, Metrics, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{GraphIndex, GraphSpec};
use crate::Result;

/// Classic label-correcting shortest path over the complete edge list.
///
/// Runs up to `n - 1` full passes, stopping early once a pass produces no
/// update; `iterations` in the metrics reports the exact number of passes
/// consumed. Negative weights are allowed. A final scan detects
/// negative-weight cycles reachable from the source; when one exists the
/// distances are not well-defined and path reconstruction is suppressed.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new engine instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W> ShortestPathAlgorithm<W> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn run(
        &self,
        graph: &GraphSpec,
        source_id: &str,
        target_id: Option<&str>,
    ) -> Result<ShortestPathResult<W>> {
        let index = GraphIndex::build(graph, source_id, target_id)?;
        let n = index.node_count();

        let mut dist = vec![W::infinity(); n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        dist[index.source] = W::zero();

        let mut relaxations = 0u64;
        let mut iterations = 0u64;

        // Relax every edge up to |V|-1 times. Once a full pass leaves every
        // distance untouched no later pass can improve one either.
        for _ in 1..n {
            iterations += 1;
            let mut updated = false;

            for edge in &index.edges {
                if dist[edge.u].is_finite() {
                    let candidate = dist[edge.u] + edge.w;
                    if candidate < dist[edge.v] {
                        dist[edge.v] = candidate;
                        parent[edge.v] = Some(edge.u);
                        relaxations += 1;
                        updated = true;
                    }
                }
            }

            if !updated {
                break;
            }
        }

        // One more scan: any edge still relaxable means a negative-weight
        // cycle is reachable from the source.
        let mut has_negative_cycle = false;
        for edge in &index.edges {
            if dist[edge.u].is_finite() && dist[edge.u] + edge.w < dist[edge.v] {
                has_negative_cycle = true;
                break;
            }
        }

        debug!(
            "bellman-ford: {} nodes, {} edges, {} passes, {} relaxations, negative cycle: {}",
            n,
            index.edges.len(),
            iterations,
            relaxations,
            has_negative_cycle
        );

        let path = if has_negative_cycle {
            Vec::new()
        } else {
            reconstruct_path(&index, &parent)
        };

        Ok(ShortestPathResult {
            dist,
            parent,
            path,
            id_to_index: index.id_to_index,
            metrics: Metrics {
                relaxations,
                iterations: Some(iterations),
                ..Metrics::default()
            },
            has_negative_cycle,
        })
    }
}
