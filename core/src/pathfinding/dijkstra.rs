use super::distances::{Distance, DistanceTable};
use super::utils::{ShortestPath, path_edge_ids, reconstruct_path};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::priority_queue::MinHeap;
use crate::steps::{StepObserver, StepRecorder, StepSnapshot};
use tracing::{debug, trace, warn};

struct DijkstraState<'g, 'o, O: ?Sized> {
    graph: &'g Graph,
    heap: MinHeap<usize>,
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    nodes_visited: usize,
    steps: StepRecorder,
    observer: &'o mut O,
}

impl<'g, 'o, O: StepObserver + ?Sized> DijkstraState<'g, 'o, O> {
    fn new(graph: &'g Graph, start: usize, observer: &'o mut O) -> Self {
        let node_count = graph.node_count();
        let mut distances = vec![Distance::Unreachable; node_count];
        distances[start] = Distance::Finite(0.0);

        let mut state = Self {
            graph,
            heap: MinHeap::with_capacity(node_count),
            distances,
            predecessors: vec![None; node_count],
            visited: vec![false; node_count],
            nodes_visited: 0,
            steps: StepRecorder::default(),
            observer,
        };

        state.record_step(None);
        state.heap.push(start, 0.0);
        state
    }

    fn record_step(&mut self, current: Option<usize>) {
        let snapshot = StepSnapshot::capture(self.graph, &self.distances, current);
        self.observer.on_step(self.steps.count(), &snapshot);
        self.steps.record(snapshot);
    }

    fn visit_neighbor(
        &mut self,
        neighbor: usize,
        current: usize,
        weight: f64,
        current_distance: f64,
    ) -> Result<()> {
        let new_distance = current_distance + weight;

        if !new_distance.is_finite() {
            let node_id = &self.graph.nodes()[neighbor].id;
            warn!(node = %node_id, via = %self.graph.nodes()[current].id, "distance overflow");
            return Err(Error::DistanceOverflow(node_id.clone()));
        }

        if !Distance::Finite(new_distance).is_shorter_than(self.distances[neighbor]) {
            return Ok(());
        }

        trace!(
            node = %self.graph.nodes()[neighbor].id,
            via = %self.graph.nodes()[current].id,
            distance = new_distance,
            "relaxed"
        );
        self.distances[neighbor] = Distance::Finite(new_distance);
        self.predecessors[neighbor] = Some(current);
        self.heap.push(neighbor, new_distance);
        Ok(())
    }

    fn finish(self, start: usize, end: usize) -> Result<ShortestPath> {
        let graph = self.graph;
        let path: Vec<String> = reconstruct_path(&self.predecessors, &self.distances, start, end)?
            .into_iter()
            .map(|position| graph.nodes()[position].id.clone())
            .collect();
        let path_edge_ids = path_edge_ids(graph, &path)?;

        debug!(
            reachable = !path.is_empty(),
            distance = %self.distances[end],
            visited = self.nodes_visited,
            steps = self.steps.count(),
            "dijkstra finished"
        );

        Ok(ShortestPath {
            path,
            path_edge_ids,
            distance: self.distances[end],
            distances: DistanceTable::from_positions(graph, &self.distances),
            steps: self.steps,
            nodes_visited: self.nodes_visited,
        })
    }
}

/// Runs Dijkstra from `start` and stops as soon as `end` is popped.
///
/// Only distances on or before the shortest path to `end` are final; nodes
/// beyond it may still read as unreachable. A running total that exceeds
/// `f64::MAX` aborts the run with [`Error::DistanceOverflow`].
pub fn find_shortest_path(graph: &Graph, start: &str, end: &str) -> Result<ShortestPath> {
    find_shortest_path_observed(graph, start, end, &mut |_: usize, _: &StepSnapshot| {})
}

/// Same as [`find_shortest_path`], calling `observer` once per recorded step.
pub fn find_shortest_path_observed<O>(
    graph: &Graph,
    start: &str,
    end: &str,
    observer: &mut O,
) -> Result<ShortestPath>
where
    O: StepObserver + ?Sized,
{
    let start_position = graph
        .position_of(start)
        .ok_or_else(|| Error::UnknownNode(start.to_string()))?;
    let end_position = graph
        .position_of(end)
        .ok_or_else(|| Error::UnknownNode(end.to_string()))?;

    debug!(
        start,
        end,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "running dijkstra"
    );

    let mut dijkstra_state = DijkstraState::new(graph, start_position, observer);

    while let Some(entry) = dijkstra_state.heap.pop() {
        let current_node = entry.item;
        let current_distance = entry.priority;

        if dijkstra_state.visited[current_node] {
            trace!(node = %graph.nodes()[current_node].id, distance = current_distance, "skipped stale entry");
            continue;
        }

        if current_node == end_position {
            break;
        }

        dijkstra_state.visited[current_node] = true;
        dijkstra_state.nodes_visited += 1;

        for (neighbor, weight) in graph.neighbor_positions(current_node) {
            dijkstra_state.visit_neighbor(neighbor, current_node, weight, current_distance)?;
        }

        dijkstra_state.record_step(Some(current_node));
    }

    dijkstra_state.finish(start_position, end_position)
}
