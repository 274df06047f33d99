//! Integration tests for the Parse phase: request JSON parsing and graph index building.
//! SYNC NOTE: Update fixtures here when the editor's block payloads change.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use mcda_compiler::config::SuccessPolicy;
use mcda_compiler::parse::{self, Block, BlockKind, Cell, Extension, GraphIndex};

#[test]
fn parse_example_request() {
    let json = include_str!("fixtures/two_matrices_request.json");
    let request = parse::parse_request(json).expect("Should parse successfully");
    assert_eq!(request.blocks.len(), 9);
    assert_eq!(request.connections.len(), 9);
    assert_eq!(request.options.success_policy, SuccessPolicy::LastMatrix);
    assert!(request.options.validate_weights);

    let Block::Matrix(first) = &request.blocks[0] else {
        panic!("first block should be a matrix");
    };
    assert_eq!(first.data.extension, Extension::Crisp);
    assert_eq!(first.data.matrix[0][0], Cell::Text("4".into()));

    let Block::Matrix(second) = &request.blocks[1] else {
        panic!("second block should be a matrix");
    };
    assert_eq!(second.data.extension, Extension::Fuzzy);
    assert_eq!(second.data.matrix[0][0], Cell::Triple(vec![1.0, 2.0, 3.0]));
}

#[test]
fn parse_round_trip() {
    let json = include_str!("fixtures/two_matrices_request.json");
    let request = parse::parse_request(json).expect("Should parse");
    let serialized = serde_json::to_string(&request).expect("Should serialize");
    let request2 = parse::parse_request(&serialized).expect("Should parse again");
    assert_eq!(request.blocks.len(), request2.blocks.len());
    assert_eq!(request.connections, request2.connections);
}

#[test]
fn parse_defaults_missing_options_and_data() {
    let json = r#"{
        "blocks": [{"type": "ranking", "id": 1, "name": "rank"}],
        "connections": []
    }"#;
    let request = parse::parse_request(json).expect("Should parse");
    assert_eq!(request.options.success_policy, SuccessPolicy::AllMatrices);
    assert_eq!(request.blocks[0].kind(), BlockKind::Ranking);
}

#[test]
fn parse_invalid_json_returns_error() {
    let result = parse::parse_request("not valid json");
    assert!(result.is_err());
    let errors = result.unwrap_err();
    assert!(errors[0].code == "P001");
}

#[test]
fn parse_unknown_block_type_returns_error() {
    let json = r#"{"blocks": [{"type": "chart", "id": 1, "name": "bar"}], "connections": []}"#;
    let errors = parse::parse_request(json).unwrap_err();
    assert_eq!(errors[0].code, "P001");
}

#[test]
fn build_graph_from_example() {
    let json = include_str!("fixtures/two_matrices_request.json");
    let request = parse::parse_request(json).expect("Should parse");
    let graph = GraphIndex::build(&request.blocks, &request.connections).expect("Should build graph");
    assert_eq!(graph.node_indices.len(), 9);
    assert_eq!(graph.find_blocks_by_type(BlockKind::Matrix).len(), 2);
    assert_eq!(graph.outgoing_count(1), 1);
    assert_eq!(graph.incoming_count(6), 2);
    assert!(graph.has_connection(5, 7));
    assert!(!graph.has_connection(7, 5));
}

#[test]
fn graph_returns_neighbors_in_connection_order() {
    let blocks = vec![
        sample_matrix(1),
        derived_weights(2, "equal"),
        method(10, "TOPSIS"),
        method(11, "VIKOR"),
        method(12, "SPOTIS"),
    ];
    let connections = vec![conn(1, 2), conn(2, 12), conn(2, 10), conn(2, 11)];
    let graph = GraphIndex::build(&blocks, &connections).unwrap();
    let ids: Vec<i64> = graph.find_connections_from(2).iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![12, 10, 11]);
    let sources: Vec<i64> = graph.find_connections_to(2).iter().map(|b| b.id()).collect();
    assert_eq!(sources, vec![1]);
}

#[test]
fn graph_rejects_duplicate_ids() {
    let blocks = vec![sample_matrix(1), method(1, "TOPSIS")];
    let errors = GraphIndex::build(&blocks, &[]).err().expect("Should fail");
    assert_eq!(errors[0].code, "G001");
    assert_eq!(errors[0].block_id, Some(1));
}

#[test]
fn graph_rejects_non_integer_endpoints() {
    let blocks = vec![sample_matrix(1), derived_weights(2, "equal")];
    let connections = vec![parse::Connection::new("matrix-1", 2), conn(1, 2)];
    let errors = GraphIndex::build(&blocks, &connections).err().expect("Should fail");
    let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, vec!["G002"]);
    assert_eq!(
        errors[0].to_string(),
        "[Graph:G002] Connection endpoint 'matrix-1' is not a block id"
    );
}

#[test]
fn graph_skips_connections_to_unknown_blocks() {
    let blocks = vec![sample_matrix(1), derived_weights(2, "equal")];
    let connections = vec![conn(1, 2), conn(2, 99), conn(99, 1)];
    let graph = GraphIndex::build(&blocks, &connections).expect("Should build graph");
    assert_eq!(graph.graph.edge_count(), 1);
    assert_eq!(graph.outgoing_count(2), 0);
    assert_eq!(graph.incoming_count(1), 0);
    assert!(!graph.has_connection(2, 99));
}
