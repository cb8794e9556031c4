use crate::common::six_node_graph;
use pathstep_core::{Distance, Error, find_shortest_path};
use rstest::rstest;

#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
fn test_at_returns_recorded_step(#[case] index: usize) {
    let graph = six_node_graph();
    let result = find_shortest_path(&graph, "A", "F").unwrap();

    let step = result.steps().at(index).unwrap();

    assert_eq!(step.entries().len(), graph.node_count());
}

#[rstest]
#[case(6)]
#[case(100)]
#[case(usize::MAX)]
fn test_at_out_of_range(#[case] index: usize) {
    let graph = six_node_graph();
    let result = find_shortest_path(&graph, "A", "F").unwrap();

    let error = result.steps().at(index).unwrap_err();

    assert_eq!(error, Error::IndexOutOfRange { index, count: 6 });
}

#[test]
fn test_initial_step_has_only_start_at_zero() {
    let graph = six_node_graph();
    let result = find_shortest_path(&graph, "D", "A").unwrap();

    let initial = result.steps().at(0).unwrap();

    assert_eq!(initial.current(), None);
    for entry in initial.entries() {
        let expected = if entry.node_id == "D" {
            Distance::Finite(0.0)
        } else {
            Distance::Unreachable
        };
        assert_eq!(entry.distance, expected, "node {}", entry.node_id);
    }
}

#[test]
fn test_steps_survive_later_graph_mutation() {
    let mut graph = six_node_graph();
    let result = find_shortest_path(&graph, "A", "F").unwrap();
    let recorded = result.steps().clone();

    graph.set_label("A", "Renamed").unwrap();
    graph.set_weight("ab", 1.0).unwrap();

    assert_eq!(result.steps(), &recorded);
    assert_eq!(result.steps().at(0).unwrap().entries()[0].label, "A");
    assert_eq!(result.steps().last().unwrap().distance_of("F"), Some(Distance::Finite(21.0)));
}

#[test]
fn test_step_iteration_matches_indexing() {
    let graph = six_node_graph();
    let result = find_shortest_path(&graph, "A", "F").unwrap();

    for (index, step) in result.steps().iter().enumerate() {
        assert_eq!(step, result.steps().at(index).unwrap());
    }
    assert!(!result.steps().is_empty());
}
