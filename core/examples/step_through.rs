use pathstep_core::{Graph, StepSnapshot, find_shortest_path_observed};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::new();
    for _ in 0..4 {
        graph.add_lettered_node()?;
    }
    graph.add_edge("ab", "1", "2", 1.0)?;
    graph.add_edge("bc", "2", "3", 2.0)?;
    graph.add_edge("ac", "1", "3", 4.0)?;
    graph.add_edge("cd", "3", "4", 1.0)?;

    let result = find_shortest_path_observed(&graph, "1", "4", &mut |index: usize, step: &StepSnapshot| {
        let row = step
            .entries()
            .iter()
            .map(|entry| format!("{}={}", entry.label, entry.distance))
            .collect::<Vec<_>>()
            .join("  ");
        println!("step {index}: {row}");
    })?;

    println!("path: {}", result.path().join(" → "));
    println!("distance: {}", result.distance_to_end());
    Ok(())
}
