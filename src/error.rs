//! Unified compiler error type used across all phases.

use serde::Serialize;
use thiserror::Error;

use crate::parse::types::BlockId;
use crate::validate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Parse,
    Graph,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Graph => write!(f, "Graph"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("[{phase}:{code}] {message}{}", block_suffix(.block_id))]
pub struct CompilerError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub block_id: Option<BlockId>,
}

fn block_suffix(block_id: &Option<BlockId>) -> String {
    match block_id {
        Some(id) => format!(" (block '{}')", id),
        None => String::new(),
    }
}

impl From<ValidationError> for CompilerError {
    fn from(e: ValidationError) -> Self {
        CompilerError {
            code: e.code.to_string(),
            phase: Phase::Validate,
            message: e.message,
            block_id: e.block_id,
        }
    }
}

impl CompilerError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            block_id: None,
        }
    }

    pub fn graph(code: &str, message: impl Into<String>, block_id: Option<BlockId>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Graph,
            message: message.into(),
            block_id,
        }
    }
}
