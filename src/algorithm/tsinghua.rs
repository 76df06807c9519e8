use log::debug;
use num_traits::{Float, ToPrimitive, Zero};
use std::fmt::Debug;

use crate::algorithm::{reconstruct_path, Metrics, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{GraphIndex, GraphSpec};
use crate::{Error, Result};

/// Recursive pivot-based frontier clustering, after the Duan et al. (2025)
/// O(m log^(2/3) n) construction.
///
/// Instead of a priority queue spanning the whole graph, each frontier is
/// partitioned around `max(1, floor(|frontier|^(2/3)))` sampled pivots and
/// the clusters are expanded in ascending order of their minimum member
/// distance. That ordering approximates greedy expansion without a total
/// order over all frontier distances; it is a sampled heuristic, not a
/// provably optimal order, and may produce suboptimal distances on
/// adversarial graph shapes. That behavior is part of the engine's contract
/// and is locked in by tests.
///
/// Weights must be non-negative; a negative edge fails the whole run.
#[derive(Debug, Default)]
pub struct Tsinghua;

impl Tsinghua {
    /// Creates a new engine instance
    pub fn new() -> Self {
        Tsinghua
    }
}

impl<W> ShortestPathAlgorithm<W> for Tsinghua
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Tsinghua"
    }

    fn run(
        &self,
        graph: &GraphSpec,
        source_id: &str,
        target_id: Option<&str>,
    ) -> Result<ShortestPathResult<W>> {
        let index: GraphIndex<W> = GraphIndex::build(graph, source_id, target_id)?;

        // Hard precondition, unlike the priority engine's silent skip.
        if let Some(edge) = index.edges.iter().find(|edge| edge.w < W::zero()) {
            return Err(Error::NegativeWeightUnsupported(
                edge.w.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let n = index.node_count();
        let mut state = PartitionRun {
            adjacency: index.adjacency(),
            dist: vec![W::infinity(); n],
            parent: vec![None; n],
            processed: vec![false; n],
            max_depth: n,
            relaxations: 0,
            pivot_selections: 0,
            recursive_partitions: 0,
        };
        state.dist[index.source] = W::zero();
        state.process_frontier(&[index.source], 0)?;

        debug!(
            "tsinghua: {} nodes, {} edges, {} relaxations, {} pivot selections, {} partitions",
            n,
            index.edges.len(),
            state.relaxations,
            state.pivot_selections,
            state.recursive_partitions
        );

        let path = reconstruct_path(&index, &state.parent);

        Ok(ShortestPathResult {
            dist: state.dist,
            parent: state.parent,
            path,
            id_to_index: index.id_to_index,
            metrics: Metrics {
                relaxations: state.relaxations,
                pivot_selections: Some(state.pivot_selections),
                recursive_partitions: Some(state.recursive_partitions),
                ..Metrics::default()
            },
            has_negative_cycle: false,
        })
    }
}

/// A cluster of frontier nodes assigned to one pivot.
struct Cluster<W> {
    nodes: Vec<usize>,
    min_dist: W,
}

/// Working state for one partitioned-frontier run.
struct PartitionRun<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    adjacency: Vec<Vec<(usize, W)>>,
    dist: Vec<W>,
    parent: Vec<Option<usize>>,
    processed: Vec<bool>,
    max_depth: usize,
    relaxations: u64,
    pivot_selections: u64,
    recursive_partitions: u64,
}

impl<W> PartitionRun<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn process_frontier(&mut self, frontier: &[usize], depth: usize) -> Result<()> {
        self.recursive_partitions += 1;

        if frontier.is_empty() {
            return Ok(());
        }

        // Every recursion is preceded by at least one newly finalized node,
        // so depth is bounded by the node count; exceeding it means the
        // partition recursion stopped shrinking.
        if depth > self.max_depth {
            return Err(Error::Internal(
                "frontier partition recursion exceeded the graph size".to_string(),
            ));
        }

        if frontier.len() == 1 {
            let u = frontier[0];
            if self.processed[u] {
                return Ok(());
            }
            self.processed[u] = true;

            let mut next = Vec::new();
            self.relax_from(u, &mut next);
            if !next.is_empty() {
                self.process_frontier(&next, depth + 1)?;
            }
            return Ok(());
        }

        let pivots = self.select_pivots(frontier);
        self.pivot_selections += 1;

        let mut clusters = self.cluster_around_pivots(frontier, &pivots);
        clusters.sort_by_key(|cluster| cluster.min_dist);

        // Depth-first over clusters in distance order: finish a cluster and
        // the wave it spawned before the next cluster starts.
        for cluster in clusters {
            let mut next = Vec::new();
            for &u in &cluster.nodes {
                if self.processed[u] {
                    continue;
                }
                self.processed[u] = true;
                self.relax_from(u, &mut next);
            }
            if !next.is_empty() {
                self.process_frontier(&next, depth + 1)?;
            }
        }

        Ok(())
    }

    /// Relaxes every outgoing edge of `u`, queueing each newly improved,
    /// not-yet-finalized neighbor into the next frontier.
    fn relax_from(&mut self, u: usize, next: &mut Vec<usize>) {
        for &(v, w) in &self.adjacency[u] {
            let candidate = self.dist[u] + w;
            if candidate < self.dist[v] {
                self.dist[v] = candidate;
                self.parent[v] = Some(u);
                self.relaxations += 1;
                if !self.processed[v] {
                    next.push(v);
                }
            }
        }
    }

    /// Evenly-spaced distance samples over the finite-distance frontier.
    ///
    /// Nodes still at infinity are not pivot-eligible. When the finite
    /// frontier is no larger than the pivot budget, every finite node is a
    /// pivot.
    fn select_pivots(&self, frontier: &[usize]) -> Vec<usize> {
        let pivot_count = ((frontier.len() as f64).powf(2.0 / 3.0).floor() as usize).max(1);

        let mut sorted: Vec<usize> = frontier
            .iter()
            .copied()
            .filter(|&u| self.dist[u].is_finite())
            .collect();
        sorted.sort_by_key(|&u| self.dist[u]);

        if sorted.len() <= pivot_count {
            return sorted;
        }

        let stride = sorted.len() as f64 / pivot_count as f64;
        (0..pivot_count)
            .map(|i| sorted[(i as f64 * stride).floor() as usize])
            .collect()
    }

    /// Assigns each finite-distance frontier node to the pivot with the
    /// closest absolute distance value, earliest-indexed pivot winning ties.
    /// Infinite-distance nodes are dropped from the round; they are not
    /// reachable yet. Empty clusters are discarded.
    fn cluster_around_pivots(&self, frontier: &[usize], pivots: &[usize]) -> Vec<Cluster<W>> {
        if pivots.is_empty() {
            return Vec::new();
        }

        let mut clusters: Vec<Cluster<W>> = pivots
            .iter()
            .map(|&pivot| Cluster {
                nodes: Vec::new(),
                min_dist: self.dist[pivot],
            })
            .collect();

        for &u in frontier {
            if !self.dist[u].is_finite() {
                continue;
            }

            let mut best = 0;
            let mut best_gap = (self.dist[u] - self.dist[pivots[0]]).abs();
            for (i, &pivot) in pivots.iter().enumerate().skip(1) {
                let gap = (self.dist[u] - self.dist[pivot]).abs();
                if gap < best_gap {
                    best_gap = gap;
                    best = i;
                }
            }

            clusters[best].nodes.push(u);
            if self.dist[u] < clusters[best].min_dist {
                clusters[best].min_dist = self.dist[u];
            }
        }

        clusters.retain(|cluster| !cluster.nodes.is_empty());
        clusters
    }
}
