//! Parse phase: JSON → Rust types + graph index construction.

pub mod graph;
pub mod types;

pub use graph::GraphIndex;
pub use types::*;

use crate::catalog::MethodsCatalog;
use crate::error::CompilerError;

/// Deserialize a `{ blocks, connections, options? }` request.
pub fn parse_request(json: &str) -> Result<CalculationRequest, Vec<CompilerError>> {
    serde_json::from_str::<CalculationRequest>(json).map_err(|e| {
        vec![CompilerError::parse(
            "P001",
            format!("Failed to parse calculation request JSON: {}", e),
        )]
    })
}

/// Deserialize the methods catalog (a list of `{ key, data }` groups).
pub fn parse_catalog(json: &str) -> Result<MethodsCatalog, Vec<CompilerError>> {
    serde_json::from_str::<MethodsCatalog>(json).map_err(|e| {
        vec![CompilerError::parse(
            "P001",
            format!("Failed to parse methods catalog JSON: {}", e),
        )]
    })
}

/// Deserialize a single block.
pub fn parse_block(json: &str) -> Result<Block, Vec<CompilerError>> {
    serde_json::from_str::<Block>(json).map_err(|e| {
        vec![CompilerError::parse(
            "P001",
            format!("Failed to parse block JSON: {}", e),
        )]
    })
}
