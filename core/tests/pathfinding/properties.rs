use crate::common::{path_weight, six_node_graph};
use pathstep_core::{Distance, Graph, find_shortest_path};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn random_graph(rng: &mut StdRng, node_count: usize) -> Graph {
    let mut graph = Graph::new();
    for index in 0..node_count {
        graph.add_node(format!("n{index}"), format!("N{index}")).unwrap();
    }

    let mut edge_number = 0;
    for a in 0..node_count {
        for b in a..node_count {
            if rng.random_bool(0.35) {
                // integral weights keep every sum exact
                let weight = rng.random_range(0..10) as f64;
                graph
                    .add_edge(format!("e{edge_number}"), format!("n{a}"), format!("n{b}"), weight)
                    .unwrap();
                edge_number += 1;
            }
        }
    }

    graph
}

/// Minimum weight over every simple path, found by exhaustive search.
fn brute_force_distance(graph: &Graph, start: &str, end: &str) -> Option<f64> {
    fn explore<'a>(
        graph: &'a Graph,
        current: &'a str,
        end: &str,
        on_path: &mut Vec<&'a str>,
        weight_so_far: f64,
        best: &mut Option<f64>,
    ) {
        if current == end {
            *best = Some(best.map_or(weight_so_far, |b: f64| b.min(weight_so_far)));
            return;
        }
        for neighbor in graph.neighbors(current).unwrap() {
            if on_path.contains(&neighbor.node_id) {
                continue;
            }
            on_path.push(neighbor.node_id);
            explore(graph, neighbor.node_id, end, on_path, weight_so_far + neighbor.weight, best);
            on_path.pop();
        }
    }

    let mut best = None;
    let mut on_path = vec![start];
    explore(graph, start, end, &mut on_path, 0.0, &mut best);
    best
}

#[test]
fn test_distances_match_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..40 {
        let node_count = rng.random_range(2..7);
        let graph = random_graph(&mut rng, node_count);

        for start in graph.nodes() {
            for end in graph.nodes() {
                let result = find_shortest_path(&graph, &start.id, &end.id).unwrap();
                let expected = brute_force_distance(&graph, &start.id, &end.id);

                assert_eq!(
                    result.distance_to_end().value(),
                    expected,
                    "{} -> {} in {:?}",
                    start.id,
                    end.id,
                    graph.edges()
                );
            }
        }
    }
}

#[test]
fn test_path_weight_matches_distance() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..40 {
        let node_count = rng.random_range(2..8);
        let graph = random_graph(&mut rng, node_count);
        let start = graph.first_node().unwrap().id.clone();
        let end = graph.last_node().unwrap().id.clone();

        let result = find_shortest_path(&graph, &start, &end).unwrap();

        assert_eq!(result.path().is_empty(), !result.distance_to_end().is_reachable());
        if let Distance::Finite(distance) = result.distance_to_end() {
            assert_eq!(path_weight(&graph, result.path_edge_ids()), distance);
            assert_eq!(result.path().first(), Some(&start));
            assert_eq!(result.path().last(), Some(&end));
            assert_eq!(result.path_edge_ids().len(), result.path().len() - 1);
        }
    }
}

#[test]
fn test_step_count_is_one_plus_nodes_visited() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..40 {
        let node_count = rng.random_range(1..8);
        let graph = random_graph(&mut rng, node_count);
        let start = graph.first_node().unwrap().id.clone();
        let end = graph.last_node().unwrap().id.clone();

        let result = find_shortest_path(&graph, &start, &end).unwrap();

        assert_eq!(result.steps().count(), 1 + result.nodes_visited());
    }
}

#[test]
fn test_distances_never_increase_between_steps() {
    let graph = six_node_graph();
    let result = find_shortest_path(&graph, "A", "F").unwrap();

    let steps: Vec<_> = result.steps().iter().collect();
    for pair in steps.windows(2) {
        for (before, after) in pair[0].entries().iter().zip(pair[1].entries()) {
            assert_eq!(before.node_id, after.node_id);
            assert!(!before.distance.is_shorter_than(after.distance));
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = six_node_graph();

    let first = find_shortest_path(&graph, "A", "F").unwrap();
    let second = find_shortest_path(&graph, "A", "F").unwrap();

    assert_eq!(first.path(), second.path());
    assert_eq!(first.distances(), second.distances());
    assert_eq!(first.steps(), second.steps());
    assert_eq!(first, second);
}
