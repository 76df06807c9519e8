use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithm::{Metrics, ShortestPathResult};
use crate::graph::{EdgeSpec, GraphSpec, NodeSpec};
use crate::web::Weight;
use crate::{Error, Result};

/// One shortest-path computation request.
///
/// Every field is optional at the wire level so that a missing one can be
/// rejected with a message naming it, before any engine runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    pub nodes: Option<Vec<NodeSpec>>,
    pub edges: Option<Vec<EdgeSpec>>,
    pub source_id: Option<String>,
    pub target_id: Option<String>,
}

impl ComputeRequest {
    /// Validates required fields and splits the request into engine input.
    pub fn into_parts(self) -> Result<(GraphSpec, String, Option<String>)> {
        let nodes = self.nodes.ok_or(Error::MalformedInput("nodes"))?;
        let edges = self.edges.ok_or(Error::MalformedInput("edges"))?;
        let source_id = self.source_id.ok_or(Error::MalformedInput("sourceId"))?;
        Ok((GraphSpec { nodes, edges }, source_id, self.target_id))
    }
}

/// One engine's result on the wire.
///
/// Distances are rendered as `null` for unreachable nodes, since JSON has no
/// infinity. `hasNegativeCycle` is present only on the classic engine's
/// response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResponse {
    pub algorithm: String,
    pub dist: Vec<Option<f64>>,
    pub parent: Vec<Option<usize>>,
    pub path: Vec<String>,
    pub id_to_index: HashMap<String, usize>,
    pub metrics: Metrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_negative_cycle: Option<bool>,
}

impl AlgorithmResponse {
    pub fn from_result(
        algorithm: &str,
        result: ShortestPathResult<Weight>,
        reports_negative_cycle: bool,
    ) -> Self {
        let has_negative_cycle = reports_negative_cycle.then_some(result.has_negative_cycle);
        AlgorithmResponse {
            algorithm: algorithm.to_string(),
            dist: result
                .dist
                .into_iter()
                .map(|d| {
                    let d = d.into_inner();
                    d.is_finite().then_some(d)
                })
                .collect(),
            parent: result.parent,
            path: result.path,
            id_to_index: result.id_to_index,
            metrics: result.metrics,
            has_negative_cycle,
        }
    }
}

/// All three engines' results keyed by fixed engine labels.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub dijkstra: AlgorithmResponse,
    pub bellman_ford: AlgorithmResponse,
    pub tsinghua: AlgorithmResponse,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
