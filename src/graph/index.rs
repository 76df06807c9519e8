use log::debug;
use num_traits::{Float, NumCast, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::model::GraphSpec;
use crate::{Error, Result};

/// An edge rewritten in terms of dense node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub u: usize,
    pub v: usize,
    pub w: W,
}

/// Dense index mapping over a per-request graph.
///
/// Node identifiers are assigned zero-based indices in node-list order. Edges
/// whose source or target identifier is absent from the node list are dropped
/// here rather than rejected; callers wanting strict validation must check
/// before building the index. The same policy applies to an edge whose weight
/// cannot be represented in `W`.
#[derive(Debug, Clone)]
pub struct GraphIndex<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Node identifier -> dense index, exposed back to the caller.
    pub id_to_index: HashMap<String, usize>,

    /// Dense index -> node identifier, in node-list order.
    pub ids: Vec<String>,

    /// The surviving edges, in edge-list order.
    pub edges: Vec<IndexedEdge<W>>,

    /// Resolved source index.
    pub source: usize,

    /// Resolved target index; `None` when no target was supplied or the
    /// supplied identifier is absent from the node list.
    pub target: Option<usize>,
}

impl<W> GraphIndex<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the index for one computation.
    ///
    /// Fails with [`Error::InvalidSource`] when `source_id` does not appear
    /// in the node list. An unresolvable `target_id` is not an error: the
    /// distances are still wanted for every node, only path reconstruction
    /// is skipped.
    pub fn build(graph: &GraphSpec, source_id: &str, target_id: Option<&str>) -> Result<Self> {
        let mut id_to_index = HashMap::with_capacity(graph.nodes.len());
        let mut ids = Vec::with_capacity(graph.nodes.len());
        for (i, node) in graph.nodes.iter().enumerate() {
            id_to_index.insert(node.id.clone(), i);
            ids.push(node.id.clone());
        }

        let source = *id_to_index
            .get(source_id)
            .ok_or_else(|| Error::InvalidSource(source_id.to_string()))?;
        let target = target_id.and_then(|id| id_to_index.get(id).copied());

        let mut edges = Vec::with_capacity(graph.edges.len());
        let mut dropped = 0usize;
        for edge in &graph.edges {
            let (u, v) = match (id_to_index.get(&edge.source), id_to_index.get(&edge.target)) {
                (Some(&u), Some(&v)) => (u, v),
                _ => {
                    dropped += 1;
                    continue;
                }
            };
            let w = match <W as NumCast>::from(edge.weight) {
                Some(w) => w,
                None => {
                    dropped += 1;
                    continue;
                }
            };
            edges.push(IndexedEdge { u, v, w });
        }

        if dropped > 0 {
            debug!(
                "graph index dropped {} of {} edges with unresolvable endpoints or weights",
                dropped,
                graph.edges.len()
            );
        }

        Ok(GraphIndex {
            id_to_index,
            ids,
            edges,
            source,
            target,
        })
    }

    /// Number of nodes in the indexed graph.
    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    /// Per-node outgoing-edge lists, for the frontier-based engines.
    pub fn adjacency(&self) -> Vec<Vec<(usize, W)>> {
        let mut adjacency = vec![Vec::new(); self.node_count()];
        for edge in &self.edges {
            adjacency[edge.u].push((edge.v, edge.w));
        }
        adjacency
    }
}
