use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::pathfinding::Distance;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepEntry {
    pub node_id: String,
    pub label: String,
    pub distance: Distance,
}

/// The distance table at one point of a run, in graph enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSnapshot {
    current: Option<String>,
    entries: Vec<StepEntry>,
}

impl StepSnapshot {
    pub(crate) fn capture(graph: &Graph, distances: &[Distance], current: Option<usize>) -> Self {
        let entries = graph
            .nodes()
            .iter()
            .zip(distances)
            .map(|(node, &distance)| StepEntry {
                node_id: node.id.clone(),
                label: node.label.clone(),
                distance,
            })
            .collect();

        Self {
            current: current.map(|position| graph.nodes()[position].id.clone()),
            entries,
        }
    }

    /// Node whose relaxation pass produced this snapshot; `None` for the
    /// snapshot taken before any node was processed.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn entries(&self) -> &[StepEntry] {
        &self.entries
    }

    pub fn distance_of(&self, node_id: &str) -> Option<Distance> {
        self.entries
            .iter()
            .find(|entry| entry.node_id == node_id)
            .map(|entry| entry.distance)
    }
}

/// Snapshots recorded during one path engine run. Read-only once the run
/// returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepRecorder {
    snapshots: Vec<StepSnapshot>,
}

impl StepRecorder {
    pub(crate) fn record(&mut self, snapshot: StepSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&StepSnapshot> {
        self.snapshots.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.snapshots.len(),
        })
    }

    pub fn last(&self) -> Option<&StepSnapshot> {
        self.snapshots.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepSnapshot> {
        self.snapshots.iter()
    }
}

/// Receives each snapshot as the engine records it.
pub trait StepObserver {
    fn on_step(&mut self, index: usize, step: &StepSnapshot);
}

impl<F> StepObserver for F
where
    F: FnMut(usize, &StepSnapshot),
{
    fn on_step(&mut self, index: usize, step: &StepSnapshot) {
        self(index, step)
    }
}
