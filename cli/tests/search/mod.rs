use crate::fixtures::{SIX_NODE_GRAPH, default_args};
use pathstep::{GraphInput, create_search_request, execute_search};
use pathstep_core::{Distance, Graph};

fn six_node_graph() -> Graph {
    GraphInput::from_json(SIX_NODE_GRAPH).unwrap().into_graph().unwrap()
}

#[test]
fn test_defaults_to_first_and_last_node() {
    let graph = six_node_graph();

    let request = create_search_request(default_args(), &graph).unwrap();

    assert_eq!(request.start_id, "1");
    assert_eq!(request.end_id, "6");
    assert_eq!(request.start_label, "A");
    assert_eq!(request.end_label, "F");
}

#[test]
fn test_resolves_nodes_by_label_or_id() {
    let graph = six_node_graph();
    let mut args = default_args();
    args.from = Some("d".to_string());
    args.to = Some("2".to_string());

    let request = create_search_request(args, &graph).unwrap();

    assert_eq!(request.start_id, "4");
    assert_eq!(request.end_id, "2");
}

#[test]
fn test_unknown_node_is_reported() {
    let graph = six_node_graph();
    let mut args = default_args();
    args.to = Some("Q".to_string());

    let error = create_search_request(args, &graph).err().unwrap();

    assert_eq!(error, "Node 'Q' not found in graph");
}

#[test]
fn test_empty_graph_is_reported() {
    let graph = Graph::new();

    let error = create_search_request(default_args(), &graph).err().unwrap();

    assert!(error.contains("no nodes"));
}

#[test]
fn test_execute_search_finds_golden_path() {
    let graph = six_node_graph();
    let request = create_search_request(default_args(), &graph).unwrap();

    let result = execute_search(&request, &graph).unwrap();

    assert_eq!(result.outcome.distance_to_end(), Distance::Finite(21.0));
    assert_eq!(result.outcome.path(), ["1", "2", "5", "4", "3", "6"]);
    assert!(result.search_duration >= 0.0);
}
