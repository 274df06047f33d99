//! Output type definitions for the calculation body.
//!
//! The backend reads every list of `CalculationBody` by position: entry `i` of
//! each list describes the same source matrix.

use serde::{Deserialize, Serialize};

use crate::parse::types::{BlockId, Cell, Extension};
use crate::validate::ValidationError;

// =============================================================================
// TOP-LEVEL OUTPUT
// =============================================================================

/// Result of one compilation call.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOutput {
    pub calculate: bool,
    pub body: CalculationBody,
    /// Ids of every attempted matrix, in processing order.
    pub matrix_indexes: Vec<BlockId>,
    pub outcomes: Vec<MatrixOutcome>,
    /// Graph-wide failure that stopped compilation before any matrix ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixOutcome {
    pub matrix_id: BlockId,
    pub included: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBody {
    pub matrix: Vec<MatrixEntry>,
    pub extensions: Vec<Extension>,
    /// Criteria directions: `1` profit, `-1` cost.
    pub types: Vec<Vec<i32>>,
    pub method: Vec<Vec<WeightMethodPair>>,
    pub method_correlations: Vec<Vec<MethodCorrelation>>,
    pub method_rankings: Vec<Vec<MethodRanking>>,
    pub ranking_correlations: Vec<Vec<RankingCorrelation>>,
    pub params: Vec<Vec<MethodParams>>,
}

impl CalculationBody {
    /// Number of matrices compiled into the body.
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

// =============================================================================
// MATRIX
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatrixEntry {
    Crisp(Vec<Vec<f64>>),
    /// Fuzzy cells as entered: TFN strings or triples.
    Fuzzy(Vec<Vec<Cell>>),
    /// `[alternatives, criteria]` for the backend to generate.
    Random([u32; 2]),
}

// =============================================================================
// METHODS & PARAMETERS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMethodPair {
    pub method: String,
    pub weights: WeightsValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeightsValue {
    Numeric(Vec<f64>),
    Fuzzy(Vec<Cell>),
    /// Name of the weighting method the backend should run.
    Derived(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodParams {
    pub extension: Extension,
    pub method: String,
    pub additional: serde_json::Map<String, serde_json::Value>,
}

// =============================================================================
// DOWNSTREAM LINKS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCorrelation {
    pub correlation: String,
    pub data: Vec<MethodCorrelationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCorrelationRow {
    pub method: String,
    pub weights: String,
    pub correlation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRanking {
    pub data: Vec<MethodRankingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodRankingRow {
    pub method: String,
    pub weights: String,
    pub order: String,
    pub ranking: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCorrelation {
    pub correlation: String,
    pub data: Vec<RankingCorrelationRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCorrelationRow {
    pub method: String,
    pub weights: String,
    pub order: String,
    pub correlation: bool,
}
