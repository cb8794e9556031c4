use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "pathstep")]
#[command(about = "Step through Dijkstra's shortest path algorithm on a small weighted graph")]
pub struct Args {
    /// Graph file with `nodes` and `edges` (defaults to $PATHSTEP_GRAPH)
    pub graph: Option<PathBuf>,

    /// Start node id or label (default: first node in the file)
    #[arg(short, long, value_name = "NODE")]
    pub from: Option<String>,

    /// End node id or label (default: last node in the file)
    #[arg(short, long, value_name = "NODE")]
    pub to: Option<String>,

    /// Replay every recorded step
    #[arg(short, long)]
    pub steps: bool,

    /// Show a single recorded step, clamped to the recorded range
    #[arg(long, value_name = "INDEX", conflicts_with = "steps")]
    pub step: Option<usize>,

    /// Pause between replayed steps
    #[arg(short = 'd', long, value_name = "MS", default_value = "0")]
    pub step_delay_ms: u64,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}
