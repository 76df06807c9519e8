use serde::{Deserialize, Serialize};

/// A node as supplied by the caller.
///
/// The identifier is opaque and must be unique within a request. Display
/// coordinates are carried through for callers that render the graph; the
/// engines never read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>) -> Self {
        NodeSpec {
            id: id.into(),
            x: None,
            y: None,
        }
    }
}

/// A directed edge between two node identifiers.
///
/// Multiple edges between the same ordered pair may coexist; each is relaxed
/// independently and never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: f64) -> Self {
        EdgeSpec {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// A complete per-request graph, immutable during computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}
