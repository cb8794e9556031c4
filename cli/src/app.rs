use pathstep_core::Graph;
use std::{error::Error, fs, path::PathBuf};
use tracing::debug;

use crate::graph_input::GraphInput;

pub const GRAPH_PATH_ENV: &str = "PATHSTEP_GRAPH";

pub struct PathStepApp {
    pub graph_path: PathBuf,
}

impl PathStepApp {
    pub fn new(graph_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let graph_path = match graph_path {
            Some(path) => path,
            None => std::env::var(GRAPH_PATH_ENV).map(PathBuf::from).map_err(|_| {
                format!("No graph file given. Pass a path or set {}", GRAPH_PATH_ENV)
            })?,
        };

        if !graph_path.exists() {
            return Err(format!("Graph file does not exist: {:?}", graph_path).into());
        }

        Ok(Self { graph_path })
    }

    pub fn load_graph(&self) -> Result<Graph, Box<dyn Error>> {
        let text = fs::read_to_string(&self.graph_path)?;
        let input = GraphInput::from_json(&text)
            .map_err(|error| format!("Invalid graph file {:?}: {}", self.graph_path, error))?;
        let graph = input.into_graph()?;

        debug!(
            path = %self.graph_path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }
}
