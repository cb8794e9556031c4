use pathstep_core::{Graph, Result};
use serde::{Deserialize, Serialize};

/// Graph construction input as read from a JSON file.
///
/// ```json
/// {
///   "nodes": [{"id": "1", "label": "A"}, {"id": "2", "label": "B"}],
///   "edges": [{"id": "e1", "source": "1", "target": "2", "weight": 7}]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub nodes: Vec<NodeInput>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInput {
    pub id: String,
    /// Defaults to the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInput {
    pub id: String,
    #[serde(alias = "endpointA", alias = "endpoint_a")]
    pub source: String,
    #[serde(alias = "endpointB", alias = "endpoint_b")]
    pub target: String,
    pub weight: f64,
}

impl GraphInput {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Builds the graph through the validating mutation API; the first bad
    /// node or edge aborts the build.
    pub fn into_graph(self) -> Result<Graph> {
        let mut graph = Graph::new();

        for node in self.nodes {
            let label = node.label.unwrap_or_else(|| node.id.clone());
            graph.add_node(node.id, label)?;
        }
        for edge in self.edges {
            graph.add_edge(edge.id, edge.source, edge.target, edge.weight)?;
        }

        Ok(graph)
    }
}
