use pathstep_core::{Distance, DistanceTable, Graph, StepRecorder};
use serde::Serialize;

use crate::search::{SearchRequest, SearchResult};

#[derive(Serialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub distances: DistanceTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<StepRecorder>,
    pub stats: JsonStats,
}

#[derive(Serialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
pub struct JsonResult {
    pub found: bool,
    pub distance: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonNode>>,
    pub path_edge_ids: Vec<String>,
}

#[derive(Serialize)]
pub struct JsonNode {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_from_previous: Option<f64>,
}

#[derive(Serialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_visited: usize,
    pub steps_recorded: usize,
}

/// Steps are included when the caller asked for a replay (`--steps` or
/// `--step`).
pub fn create_json_output(
    result: &SearchResult,
    request: &SearchRequest,
    graph: &Graph,
) -> JsonOutput {
    let outcome = &result.outcome;
    let args = &request.search_args;

    let json_path = outcome.is_reachable().then(|| {
        outcome
            .path()
            .iter()
            .enumerate()
            .map(|(index, node_id)| JsonNode {
                id: node_id.clone(),
                label: graph
                    .node(node_id)
                    .map(|node| node.label.clone())
                    .unwrap_or_else(|| node_id.clone()),
                weight_from_previous: index
                    .checked_sub(1)
                    .and_then(|edge_index| outcome.path_edge_ids().get(edge_index))
                    .and_then(|edge_id| graph.edge(edge_id))
                    .map(|edge| edge.weight),
            })
            .collect()
    });

    JsonOutput {
        query: JsonQuery {
            from: request.start_label.clone(),
            to: request.end_label.clone(),
        },
        result: JsonResult {
            found: outcome.is_reachable(),
            distance: outcome.distance_to_end(),
            path: json_path,
            path_edge_ids: outcome.path_edge_ids().to_vec(),
        },
        distances: outcome.distances().clone(),
        steps: (args.steps || args.step.is_some()).then(|| outcome.steps().clone()),
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_visited: outcome.nodes_visited(),
            steps_recorded: outcome.steps().count(),
        },
    }
}

pub fn render_json_output(json_output: &JsonOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(json_output)
}

pub fn print_json_output(json_output: &JsonOutput) -> serde_json::Result<()> {
    println!("{}", render_json_output(json_output)?);
    Ok(())
}
