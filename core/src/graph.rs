use crate::error::{Error, Result};
use crate::string_normalization::clean_str;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
}

/// Undirected weighted edge. The weight is finite and non-negative for every
/// edge owned by a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub endpoint_a: String,
    pub endpoint_b: String,
    pub weight: f64,
}

impl Edge {
    pub fn touches(&self, node_id: &str) -> bool {
        self.endpoint_a == node_id || self.endpoint_b == node_id
    }

    /// True when the edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.endpoint_a == a && self.endpoint_b == b)
            || (self.endpoint_a == b && self.endpoint_b == a)
    }

    pub fn other_endpoint(&self, node_id: &str) -> Option<&str> {
        if self.endpoint_a == node_id {
            Some(&self.endpoint_b)
        } else if self.endpoint_b == node_id {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }
}

/// One step away from a node: the node on the other side, the edge used and
/// its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub node_id: &'a str,
    pub edge_id: &'a str,
    pub weight: f64,
}

/// Nodes and undirected weighted edges, enumerated in insertion order.
///
/// Every mutation is validated up front: edges always reference existing
/// nodes and always carry a finite, non-negative weight.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    node_index: FxHashMap<String, usize>,
    edges: Vec<Edge>,
    letters_used: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<&Node> {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }

        let position = self.nodes.len();
        self.node_index.insert(id.clone(), position);
        self.nodes.push(Node {
            id,
            label: label.into(),
        });
        Ok(&self.nodes[position])
    }

    /// Creates the next node labelled `A` through `Z`, with the lowest free
    /// numeric id starting from the node count plus one.
    pub fn add_lettered_node(&mut self) -> Result<&Node> {
        let letter = ALPHABET
            .get(self.letters_used)
            .ok_or(Error::AlphabetExhausted)?;

        let mut candidate = self.nodes.len() + 1;
        while self.node_index.contains_key(&candidate.to_string()) {
            candidate += 1;
        }

        self.letters_used += 1;
        self.add_node(candidate.to_string(), (*letter as char).to_string())
    }

    pub fn set_label(&mut self, id: &str, label: impl Into<String>) -> Result<()> {
        let position = self.require_node(id)?;
        self.nodes[position].label = label.into();
        Ok(())
    }

    /// Removes a node together with every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<Node> {
        let position = self.require_node(id)?;
        let removed = self.nodes.remove(position);
        self.edges.retain(|edge| !edge.touches(&removed.id));
        self.rebuild_index();
        Ok(removed)
    }

    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        endpoint_a: impl Into<String>,
        endpoint_b: impl Into<String>,
        weight: f64,
    ) -> Result<&Edge> {
        let id = id.into();
        let endpoint_a = endpoint_a.into();
        let endpoint_b = endpoint_b.into();

        if self.edge_position(&id).is_some() {
            return Err(Error::DuplicateEdge(id));
        }
        self.require_node(&endpoint_a)?;
        self.require_node(&endpoint_b)?;
        let weight = validate_weight(weight)?;

        self.edges.push(Edge {
            id,
            endpoint_a,
            endpoint_b,
            weight,
        });
        Ok(&self.edges[self.edges.len() - 1])
    }

    pub fn set_weight(&mut self, edge_id: &str, weight: f64) -> Result<()> {
        let position = self.require_edge(edge_id)?;
        self.edges[position].weight = validate_weight(weight)?;
        Ok(())
    }

    /// Moves an edge onto new endpoints, keeping its id and weight.
    pub fn reconnect_edge(
        &mut self,
        edge_id: &str,
        endpoint_a: &str,
        endpoint_b: &str,
    ) -> Result<()> {
        let position = self.require_edge(edge_id)?;
        self.require_node(endpoint_a)?;
        self.require_node(endpoint_b)?;

        let edge = &mut self.edges[position];
        edge.endpoint_a = endpoint_a.to_string();
        edge.endpoint_b = endpoint_b.to_string();
        Ok(())
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Result<Edge> {
        let position = self.require_edge(edge_id)?;
        Ok(self.edges.remove(position))
    }

    /// Every edge touching `node_id`, in edge insertion order.
    ///
    /// The iterator is a pure function of the current graph; calling again
    /// starts over.
    pub fn neighbors<'a>(
        &'a self,
        node_id: &'a str,
    ) -> Result<impl Iterator<Item = Neighbor<'a>> + 'a> {
        self.require_node(node_id)?;

        Ok(self.edges.iter().filter_map(move |edge| {
            edge.other_endpoint(node_id).map(|other| Neighbor {
                node_id: other,
                edge_id: &edge.id,
                weight: edge.weight,
            })
        }))
    }

    /// Index-based view of [`Graph::neighbors`] used by the path engine.
    pub(crate) fn neighbor_positions(
        &self,
        position: usize,
    ) -> impl Iterator<Item = (usize, f64)> + '_ {
        let node_id = self.nodes[position].id.as_str();
        self.edges.iter().filter_map(move |edge| {
            edge.other_endpoint(node_id)
                .and_then(|other| self.node_index.get(other))
                .map(|&other_position| (other_position, edge.weight))
        })
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.position_of(id).map(|position| &self.nodes[position])
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_position(id).map(|position| &self.edges[position])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn first_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Looks a node up by exact id, then by normalized label.
    pub fn find_node(&self, query: &str) -> Result<&Node> {
        if let Some(node) = self.node(query) {
            return Ok(node);
        }

        let clean_query = clean_str(query);
        self.nodes
            .iter()
            .find(|node| clean_str(&node.label) == clean_query)
            .ok_or_else(|| Error::UnknownNode(query.to_string()))
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    fn require_node(&self, id: &str) -> Result<usize> {
        self.position_of(id)
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    fn edge_position(&self, id: &str) -> Option<usize> {
        self.edges.iter().position(|edge| edge.id == id)
    }

    fn require_edge(&self, id: &str) -> Result<usize> {
        self.edge_position(id)
            .ok_or_else(|| Error::UnknownEdge(id.to_string()))
    }

    fn rebuild_index(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();
    }
}

fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(weight)
    } else {
        Err(Error::InvalidWeight(weight))
    }
}
