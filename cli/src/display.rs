use pathstep_core::{Distance, Graph, StepSnapshot};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, graph: &Graph, colors: &ColorScheme) {
    println!(
        "🧭 Finding shortest path from {} to {}",
        colors.node_label(&format!("\"{}\"", request.start_label)),
        colors.node_label(&format!("\"{}\"", request.end_label))
    );
    println!(
        "⚙️  Graph has {} nodes and {} edges",
        colors.number(&graph.node_count().to_string()),
        colors.number(&graph.edge_count().to_string())
    );
    println!("🔍 Searching...");
}

/// Renders one snapshot as a distance table with the current node marked.
pub fn display_step(index: usize, count: usize, step: &StepSnapshot, colors: &ColorScheme) {
    let header = format!("Step {}/{}", index + 1, count);
    match step.current() {
        Some(current) => println!(
            "\n{} · relaxed neighbors of {}",
            colors.step_number(&header),
            colors.current_node(current)
        ),
        None => println!("\n{} · initial distances", colors.step_number(&header)),
    }

    let label_width = step
        .entries()
        .iter()
        .map(|entry| entry.label.chars().count())
        .max()
        .unwrap_or(0);

    for entry in step.entries() {
        let padded_label = format!("{:width$}", entry.label, width = label_width);
        let is_current = step.current() == Some(entry.node_id.as_str());

        let label = if is_current {
            colors.current_node(&padded_label)
        } else {
            colors.node_label(&padded_label)
        };
        let distance = format_distance(entry.distance, colors);
        let marker = if is_current { " ◀" } else { "" };

        println!("  {}  {}{}", label, distance, marker);
    }
}

pub fn display_search_results(
    result: &SearchResult,
    request: &SearchRequest,
    graph: &Graph,
    colors: &ColorScheme,
) {
    let display_options = &request.search_args;
    let outcome = &result.outcome;

    if display_options.verbose {
        println!("\n---\n");
    } else {
        println!();
    }

    if !outcome.is_reachable() {
        println!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.node_label(&format!("\"{}\"", request.start_label)),
            colors.node_label(&format!("\"{}\"", request.end_label))
        );
    } else {
        display_successful_path(result, graph, display_options.quiet, colors);
    }

    if display_options.verbose {
        display_search_statistics(
            outcome.nodes_visited(),
            outcome.steps().count(),
            result.search_duration,
            colors,
        );
    }
}

fn display_successful_path(
    result: &SearchResult,
    graph: &Graph,
    quiet: bool,
    colors: &ColorScheme,
) {
    let outcome = &result.outcome;
    let path_flow = outcome
        .path()
        .iter()
        .map(|node_id| colors.node_label(&label_of(graph, node_id)).to_string())
        .collect::<Vec<_>>()
        .join(" → ");
    println!("{}", path_flow);

    if quiet {
        return;
    }

    println!(
        "\n{} Total distance {} over {} edges:\n",
        colors.success("✅"),
        colors.number(&outcome.distance_to_end().to_string()),
        colors.number(&outcome.path_edge_ids().len().to_string())
    );

    for (step_index, node_id) in outcome.path().iter().enumerate() {
        let step_number = format!("{}.", step_index + 1);
        let mut formatted_line = format!(
            "{:3} {}",
            colors.step_number(&step_number),
            colors.node_label(&label_of(graph, node_id))
        );

        if let Some(edge) = step_index
            .checked_sub(1)
            .and_then(|edge_index| outcome.path_edge_ids().get(edge_index))
            .and_then(|edge_id| graph.edge(edge_id))
        {
            formatted_line.push_str(&format!(
                " via {} [{}]",
                colors.edge_id(&edge.id),
                colors.number(&edge.weight.to_string())
            ));
        }

        if let Some(distance) = outcome.distances().get(node_id) {
            formatted_line.push_str(&format!(" = {}", format_distance(distance, colors)));
        }

        println!("{}", formatted_line);
    }
}

fn display_search_statistics(
    nodes_visited: usize,
    steps_recorded: usize,
    search_duration: f64,
    colors: &ColorScheme,
) {
    println!("\n---\n");
    println!(
        "{} Visited {} nodes, recorded {} steps in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_visited)),
        colors.number(&format_number(steps_recorded)),
        colors.number(&format!("{:.3}", search_duration))
    );
}

fn format_distance(distance: Distance, colors: &ColorScheme) -> String {
    match distance {
        Distance::Finite(_) => colors.number(&distance.to_string()).to_string(),
        Distance::Unreachable => colors.unreachable(&distance.to_string()).to_string(),
    }
}

fn label_of(graph: &Graph, node_id: &str) -> String {
    graph
        .node(node_id)
        .map(|node| node.label.clone())
        .unwrap_or_else(|| node_id.to_string())
}
