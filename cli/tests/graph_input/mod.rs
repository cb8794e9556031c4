use crate::fixtures::{SIX_NODE_GRAPH, write_graph_file};
use pathstep::{GraphInput, PathStepApp};
use pathstep_core::Error;
use std::path::PathBuf;

#[test]
fn test_parses_six_node_graph() {
    let input = GraphInput::from_json(SIX_NODE_GRAPH).unwrap();

    assert_eq!(input.nodes.len(), 6);
    assert_eq!(input.edges.len(), 9);

    let graph = input.into_graph().unwrap();
    assert_eq!(graph.node("1").unwrap().label, "A");
    assert_eq!(graph.edge("de").unwrap().weight, 2.0);
}

#[test]
fn test_label_defaults_to_id_and_endpoint_aliases() {
    let json = r#"{
        "nodes": [{"id": "x"}, {"id": "y", "label": "Why"}],
        "edges": [{"id": "e", "endpointA": "x", "endpointB": "y", "weight": 1.5}]
    }"#;

    let graph = GraphInput::from_json(json).unwrap().into_graph().unwrap();

    assert_eq!(graph.node("x").unwrap().label, "x");
    assert_eq!(graph.node("y").unwrap().label, "Why");
    assert!(graph.edge("e").unwrap().connects("x", "y"));
}

#[test]
fn test_negative_weight_is_refused_at_load() {
    let json = r#"{
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [{"id": "e", "source": "a", "target": "b", "weight": -2}]
    }"#;

    let result = GraphInput::from_json(json).unwrap().into_graph();

    assert_eq!(result.unwrap_err(), Error::InvalidWeight(-2.0));
}

#[test]
fn test_non_numeric_weight_is_a_parse_error() {
    let json = r#"{
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [{"id": "e", "source": "a", "target": "b", "weight": "seven"}]
    }"#;

    assert!(GraphInput::from_json(json).is_err());
}

#[test]
fn test_edge_to_unknown_node_is_refused() {
    let json = r#"{
        "nodes": [{"id": "a"}],
        "edges": [{"id": "e", "source": "a", "target": "ghost", "weight": 1}]
    }"#;

    let result = GraphInput::from_json(json).unwrap().into_graph();

    assert_eq!(result.unwrap_err(), Error::UnknownNode("ghost".to_string()));
}

#[test]
fn test_duplicate_node_is_refused() {
    let json = r#"{"nodes": [{"id": "a"}, {"id": "a"}]}"#;

    let result = GraphInput::from_json(json).unwrap().into_graph();

    assert_eq!(result.unwrap_err(), Error::DuplicateNode("a".to_string()));
}

#[test]
fn test_app_loads_graph_from_file() {
    let file = write_graph_file(SIX_NODE_GRAPH);

    let app = PathStepApp::new(Some(file.path().to_path_buf())).unwrap();
    let graph = app.load_graph().unwrap();

    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 9);
}

#[test]
fn test_app_rejects_missing_file() {
    let result = PathStepApp::new(Some(PathBuf::from("/definitely/not/here.json")));

    assert!(result.is_err());
}

#[test]
fn test_app_reports_malformed_json() {
    let file = write_graph_file("{ not json");

    let app = PathStepApp::new(Some(file.path().to_path_buf())).unwrap();
    let error = app.load_graph().unwrap_err();

    assert!(error.to_string().contains("Invalid graph file"));
}
