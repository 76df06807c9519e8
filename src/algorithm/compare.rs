use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::tsinghua::Tsinghua;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::GraphSpec;
use crate::Result;

/// All three engines' results for one input, keyed by engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub dijkstra: ShortestPathResult<W>,
    pub bellman_ford: ShortestPathResult<W>,
    pub tsinghua: ShortestPathResult<W>,
}

/// Runs every engine against identical input.
///
/// Does not short-circuit around a failing engine: the partitioned engine
/// rejecting a negative weight fails the comparison as a whole. Callers
/// needing partial results must invoke the engines individually.
pub fn run_all<W>(
    graph: &GraphSpec,
    source_id: &str,
    target_id: Option<&str>,
) -> Result<ComparisonResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    let dijkstra = Dijkstra::new().run(graph, source_id, target_id)?;
    let bellman_ford = BellmanFord::new().run(graph, source_id, target_id)?;
    let tsinghua = Tsinghua::new().run(graph, source_id, target_id)?;

    Ok(ComparisonResult {
        dijkstra,
        bellman_ford,
        tsinghua,
    })
}
