pub mod dijkstra;
pub mod distances;
pub mod utils;

// Re-export the public functions
pub use dijkstra::{find_shortest_path, find_shortest_path_observed};
pub use distances::{Distance, DistanceEntry, DistanceTable};
pub use utils::ShortestPath;
