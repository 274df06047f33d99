//! Calculation-body compiler for the MCDA pipeline editor.
//!
//! Takes the editor's block graph (matrices, weights, methods, rankings,
//! correlations and the connections between them), validates it matrix by
//! matrix and compiles it into the positional request body the numeric
//! backend consumes.
//!
//! Pipeline: parse → graph index → per-matrix validate → lower.

pub mod body;
pub mod catalog;
pub mod config;
pub mod error;
pub mod lower;
pub mod parse;
pub mod validate;
pub mod wasm;

use crate::body::CompileOutput;
use crate::catalog::MethodsCatalog;
use crate::config::CompileOptions;
use crate::error::CompilerError;
use crate::parse::{Block, Connection, GraphIndex};

/// Build the graph index and compile every matrix.
///
/// Hard errors (malformed graph) are returned as `Err`; per-matrix validation
/// failures are reported in `CompileOutput::outcomes`.
pub fn compile(
    blocks: &[Block],
    connections: &[Connection],
    catalog: &MethodsCatalog,
    options: &CompileOptions,
) -> Result<CompileOutput, Vec<CompilerError>> {
    let index = GraphIndex::build(blocks, connections)?;
    Ok(lower::compile_body(&index, catalog, options))
}

/// Full pipeline from the editor's JSON payloads.
pub fn compile_json(request_json: &str, catalog_json: &str) -> Result<CompileOutput, Vec<CompilerError>> {
    let request = parse::parse_request(request_json)?;
    let catalog = parse::parse_catalog(catalog_json)?;
    compile(
        &request.blocks,
        &request.connections,
        &catalog,
        &request.options,
    )
}
