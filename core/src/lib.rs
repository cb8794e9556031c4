pub mod error;
pub mod graph;
pub mod pathfinding;
pub mod priority_queue;
pub mod shared_graph;
pub mod steps;
pub mod string_normalization;

// Re-export commonly used items
pub use error::{Error, Result};
pub use graph::{Edge, Graph, Neighbor, Node};
pub use pathfinding::{
    Distance, DistanceEntry, DistanceTable, ShortestPath, find_shortest_path,
    find_shortest_path_observed,
};
pub use priority_queue::{MinHeap, QueueEntry};
pub use shared_graph::SharedGraph;
pub use steps::{StepEntry, StepObserver, StepRecorder, StepSnapshot};
