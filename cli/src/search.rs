use pathstep_core::{Graph, Node, ShortestPath, StepSnapshot, find_shortest_path_observed};
use std::time::Instant;
use tracing::debug;

use crate::args::Args;

pub struct SearchRequest {
    pub start_id: String,
    pub end_id: String,
    pub start_label: String,
    pub end_label: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: ShortestPath,
    pub search_duration: f64,
}

/// Resolves `--from`/`--to` against the graph. Without them the search runs
/// from the first node to the last one.
pub fn create_search_request(args: Args, graph: &Graph) -> Result<SearchRequest, String> {
    let start = resolve_node(args.from.as_deref(), graph.first_node(), graph)?;
    let end = resolve_node(args.to.as_deref(), graph.last_node(), graph)?;

    Ok(SearchRequest {
        start_id: start.id.clone(),
        end_id: end.id.clone(),
        start_label: start.label.clone(),
        end_label: end.label.clone(),
        search_args: args,
    })
}

fn resolve_node<'g>(
    query: Option<&str>,
    fallback: Option<&'g Node>,
    graph: &'g Graph,
) -> Result<&'g Node, String> {
    match query {
        Some(query) => graph
            .find_node(query)
            .map_err(|_| format!("Node '{}' not found in graph", query)),
        None => fallback.ok_or_else(|| "Graph has no nodes. Add at least one node first".to_string()),
    }
}

pub fn execute_search(
    request: &SearchRequest,
    graph: &Graph,
) -> pathstep_core::Result<SearchResult> {
    let search_timer = Instant::now();

    let outcome = find_shortest_path_observed(
        graph,
        &request.start_id,
        &request.end_id,
        &mut |index: usize, step: &StepSnapshot| {
            debug!(index, current = step.current().unwrap_or("-"), "step recorded");
        },
    )?;

    Ok(SearchResult {
        outcome,
        search_duration: search_timer.elapsed().as_secs_f64(),
    })
}
