use super::distances::{Distance, DistanceTable};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::steps::StepRecorder;
use serde::Serialize;
use tracing::warn;

/// Outcome of one path engine run. An empty `path` means the end node could
/// not be reached; that is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub(crate) path: Vec<String>,
    pub(crate) path_edge_ids: Vec<String>,
    pub(crate) distance: Distance,
    pub(crate) distances: DistanceTable,
    pub(crate) steps: StepRecorder,
    pub(crate) nodes_visited: usize,
}

impl ShortestPath {
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn path_edge_ids(&self) -> &[String] {
        &self.path_edge_ids
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn steps(&self) -> &StepRecorder {
        &self.steps
    }

    pub fn distance_to_end(&self) -> Distance {
        self.distance
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Nodes popped and finalized before the run stopped.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.path.iter().any(|id| id == node_id)
    }

    pub fn contains_edge(&self, edge_id: &str) -> bool {
        self.path_edge_ids.iter().any(|id| id == edge_id)
    }
}

/// Walks predecessors back from `end`. Returns node positions in forward
/// order, or nothing when `end` was never reached.
pub fn reconstruct_path(
    predecessors: &[Option<usize>],
    distances: &[Distance],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    if !distances[end].is_reachable() {
        return Ok(Vec::new());
    }

    let mut path = vec![end];
    let mut current_node = end;

    while let Some(parent_node) = predecessors[current_node] {
        path.push(parent_node);
        current_node = parent_node;
    }

    if current_node != start {
        warn!(start, end, terminal = current_node, "predecessor chain does not reach start");
        return Err(Error::InvariantViolation(format!(
            "predecessor chain from node #{end} ends at node #{current_node}, not the start"
        )));
    }

    path.reverse();
    Ok(path)
}

/// Edge ids joining each consecutive pair of `path`. Parallel edges resolve to
/// the lightest one, first in insertion order on ties.
pub fn path_edge_ids(graph: &Graph, path: &[String]) -> Result<Vec<String>> {
    path.windows(2)
        .map(|pair| {
            graph
                .edges()
                .iter()
                .filter(|edge| edge.connects(&pair[0], &pair[1]))
                .min_by(|a, b| a.weight.total_cmp(&b.weight))
                .map(|edge| edge.id.clone())
                .ok_or_else(|| {
                    warn!(from = %pair[0], to = %pair[1], "no edge for consecutive path nodes");
                    Error::InvariantViolation(format!(
                        "no edge joins '{}' and '{}' on the reconstructed path",
                        pair[0], pair[1]
                    ))
                })
        })
        .collect()
}
