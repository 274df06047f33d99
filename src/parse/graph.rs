//! petgraph-based adjacency index over the editor's blocks and connections.
//!
//! Built once per compilation call. Neighbor queries return blocks in
//! connection-list order and keep duplicate connections. Connections to ids
//! that no block carries are dropped with a warning; no matrix chain can
//! reach them.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Block, BlockId, BlockKind, Connection};
use crate::error::CompilerError;

pub struct GraphIndex<'a> {
    pub graph: DiGraph<&'a Block, ()>,
    pub node_indices: HashMap<BlockId, NodeIndex>,
    blocks: &'a [Block],
}

impl<'a> GraphIndex<'a> {
    pub fn build(blocks: &'a [Block], connections: &[Connection]) -> Result<Self, Vec<CompilerError>> {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();
        let mut errors = Vec::new();

        // Add all blocks
        for block in blocks {
            let idx = graph.add_node(block);
            if node_indices.insert(block.id(), idx).is_some() {
                errors.push(CompilerError::graph(
                    "G001",
                    format!("Duplicate block id {}", block.id()),
                    Some(block.id()),
                ));
            }
        }

        // Add all connections
        for connection in connections {
            let source = resolve_endpoint(connection.source(), &node_indices, &mut errors);
            let target = resolve_endpoint(connection.target(), &node_indices, &mut errors);
            if let (Some(s), Some(t)) = (source, target) {
                graph.add_edge(s, t, ());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(GraphIndex {
            graph,
            node_indices,
            blocks,
        })
    }

    /// Blocks of one kind, in input order.
    pub fn find_blocks_by_type(&self, kind: BlockKind) -> Vec<&'a Block> {
        self.blocks.iter().filter(|b| b.kind() == kind).collect()
    }

    /// Targets of every connection whose source is `id`.
    pub fn find_connections_from(&self, id: BlockId) -> Vec<&'a Block> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Sources of every connection whose target is `id`.
    pub fn find_connections_to(&self, id: BlockId) -> Vec<&'a Block> {
        self.neighbors(id, Direction::Incoming)
    }

    pub fn targets_of(&self, id: BlockId, kind: BlockKind) -> Vec<&'a Block> {
        self.find_connections_from(id)
            .into_iter()
            .filter(|b| b.kind() == kind)
            .collect()
    }

    pub fn has_connection(&self, from: BlockId, to: BlockId) -> bool {
        match (self.node_indices.get(&from), self.node_indices.get(&to)) {
            (Some(&a), Some(&b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }

    pub fn outgoing_count(&self, id: BlockId) -> usize {
        self.find_connections_from(id).len()
    }

    pub fn incoming_count(&self, id: BlockId) -> usize {
        self.find_connections_to(id).len()
    }

    fn neighbors(&self, id: BlockId, direction: Direction) -> Vec<&'a Block> {
        let Some(&idx) = self.node_indices.get(&id) else {
            return vec![];
        };
        // petgraph walks adjacency lists newest-first; restore insertion order.
        let mut edges: Vec<(EdgeIndex, NodeIndex)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (e.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, n)| self.graph[n]).collect()
    }
}

fn resolve_endpoint(
    raw: &str,
    node_indices: &HashMap<BlockId, NodeIndex>,
    errors: &mut Vec<CompilerError>,
) -> Option<NodeIndex> {
    let Ok(id) = raw.trim().parse::<BlockId>() else {
        errors.push(CompilerError::graph(
            "G002",
            format!("Connection endpoint '{}' is not a block id", raw),
            None,
        ));
        return None;
    };
    match node_indices.get(&id) {
        Some(&idx) => Some(idx),
        None => {
            tracing::warn!(block_id = id, "connection references unknown block, skipped");
            None
        }
    }
}
