pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod graph_input;
pub mod json_output;
pub mod logging;
pub mod playback;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::PathStepApp;
pub use args::Args;
pub use graph_input::{EdgeInput, GraphInput, NodeInput};
pub use playback::{Playback, PlaybackConfig};
pub use search::{SearchRequest, SearchResult, create_search_request, execute_search};
pub use utils::format_number;
