use crate::graph::Graph;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Accumulated path weight, or `Unreachable` which orders after every
/// finite value. Serializes as a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Distance {
    Finite(f64),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    pub fn is_shorter_than(self, other: Distance) -> bool {
        self.partial_cmp(&other) == Some(Ordering::Less)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Unreachable) => Some(Ordering::Less),
            (Distance::Unreachable, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Unreachable, Distance::Unreachable) => Some(Ordering::Equal),
        }
    }
}

impl From<Option<f64>> for Distance {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl From<Distance> for Option<f64> {
    fn from(distance: Distance) -> Self {
        distance.value()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{value}"),
            Distance::Unreachable => f.write_str("∞"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceEntry {
    pub node_id: String,
    pub distance: Distance,
}

/// Final distances of one run, keyed by node id and kept in graph
/// enumeration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    entries: Vec<DistanceEntry>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl DistanceTable {
    pub(crate) fn from_positions(graph: &Graph, distances: &[Distance]) -> Self {
        let entries: Vec<DistanceEntry> = graph
            .nodes()
            .iter()
            .zip(distances)
            .map(|(node, &distance)| DistanceEntry {
                node_id: node.id.clone(),
                distance,
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.node_id.clone(), position))
            .collect();

        Self { entries, index }
    }

    pub fn get(&self, node_id: &str) -> Option<Distance> {
        self.index
            .get(node_id)
            .map(|&position| self.entries[position].distance)
    }

    pub fn entries(&self) -> &[DistanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
