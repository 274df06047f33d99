//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::body::CompileOutput;
use crate::error::CompilerError;
use crate::parse::Block;
use crate::validate::ValidationError;

/// Full pipeline: parse → graph index → validate → lower.
/// Returns a JSON object with either the compiled output (success) or `errors`.
#[wasm_bindgen]
pub fn compile_calculation_body(request_json: &str, catalog_json: &str) -> JsValue {
    let result = compile_calculation_body_inner(request_json, catalog_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn compile_calculation_body_inner(request_json: &str, catalog_json: &str) -> CompileResult {
    match crate::compile_json(request_json, catalog_json) {
        Ok(output) => CompileResult::Success(output),
        Err(errors) => CompileResult::Errors {
            errors: errors.into_iter().map(ErrorDto::from).collect(),
        },
    }
}

/// Validate a single matrix block JSON for inline editor feedback.
/// Returns a JSON array of every failed matrix-level rule.
#[wasm_bindgen]
pub fn validate_matrix_block(block_json: &str) -> JsValue {
    let result = validate_matrix_block_inner(block_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_matrix_block_inner(block_json: &str) -> Vec<ErrorDto> {
    let block = match crate::parse::parse_block(block_json) {
        Ok(b) => b,
        Err(errors) => return errors.into_iter().map(ErrorDto::from).collect(),
    };

    match &block {
        Block::Matrix(matrix) => crate::validate::collect_matrix_errors(matrix)
            .into_iter()
            .map(ErrorDto::from)
            .collect(),
        other => vec![ErrorDto::from(ValidationError::new(
            "M013",
            format!("Block {} is a {} block, not a matrix", other.id(), other.kind()),
            Some(other.id()),
        ))],
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
    block_id: Option<i64>,
}

impl From<CompilerError> for ErrorDto {
    fn from(e: CompilerError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
            block_id: e.block_id,
        }
    }
}

impl From<ValidationError> for ErrorDto {
    fn from(e: ValidationError) -> Self {
        ErrorDto::from(CompilerError::from(e))
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status")]
enum CompileResult {
    #[serde(rename = "success")]
    Success(CompileOutput),
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
