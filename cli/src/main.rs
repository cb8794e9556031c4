use clap::Parser;
use pathstep::colors::ColorScheme;
use pathstep::display::{display_search_info, display_search_results, display_step};
use pathstep::json_output::{create_json_output, print_json_output};
use pathstep::logging::init_logging;
use pathstep::playback::replay;
use pathstep::*;
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color && !args.json);

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = PathStepApp::new(args.graph.clone())?;
    let graph = app.load_graph()?;
    let request = create_search_request(args, &graph)?;
    let display_options = &request.search_args;

    if display_options.verbose && !display_options.json {
        display_search_info(&request, &graph, colors);
    }

    let result = execute_search(&request, &graph)?;

    if display_options.json {
        print_json_output(&create_json_output(&result, &request, &graph))?;
        return Ok(());
    }

    present_steps(&result, &PlaybackConfig::from(display_options), colors);
    display_search_results(&result, &request, &graph, colors);
    Ok(())
}

fn present_steps(result: &SearchResult, config: &PlaybackConfig, colors: &ColorScheme) {
    let steps = result.outcome.steps();

    if config.replay_all {
        replay(steps, config, |index, step| {
            display_step(index, steps.count(), step, colors)
        });
    } else if let Some(requested) = config.focus_step {
        let mut playback = Playback::new(steps);
        let index = playback.seek(requested);
        if let Some(step) = playback.current() {
            display_step(index, playback.len(), step, colors);
        }
    }
}
