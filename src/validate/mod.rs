//! Validation gate.
//!
//! Every predicate checks one concern against a block (or a block and its
//! resolved connections) and fails with a stable reason code. A failure
//! excludes the affected matrix only; compilation moves on to the next one.
//!
//! | code | rule |
//! |------|------|
//! | M001 | at least one matrix block exists |
//! | M002 | matrix has a connected weights block |
//! | M003 | matrix rows are rectangular (uploads: match criteria types) |
//! | M004 | matrix is not empty |
//! | M005 | crisp matrix has no all-zero row or column |
//! | M006 | crisp matrix has no constant column |
//! | M007 | fuzzy matrix has no zero component |
//! | M008 | fuzzy matrix cells are TFN triples |
//! | M009 | fuzzy matrix TFNs are ordered |
//! | M010 | random matrix dimensions |
//! | M011 | crisp matrix cells are numeric |
//! | M012 | matrix variant is known |
//! | M013 | block checked as a matrix is one |
//! | C001 | criteria type codes |
//! | C002 | criteria directions suit the connected methods |
//! | W001 | user weights are complete |
//! | W002 | crisp weights are positive numbers |
//! | W003 | fuzzy weights have no zero component |
//! | W004 | fuzzy weights are TFN triples |
//! | W005 | fuzzy weights TFNs are ordered |
//! | W006 | every weights block feeds a method |

pub mod criteria_rules;
pub mod matrix_rules;
pub mod structural;
pub mod weights_rules;

use serde::Serialize;

use crate::parse::types::{BlockId, MatrixBlock, WeightsBlock};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
    /// The block where the error was found, if applicable.
    pub block_id: Option<BlockId>,
}

impl ValidationError {
    pub fn new(code: &'static str, message: impl Into<String>, block_id: Option<BlockId>) -> Self {
        ValidationError {
            code,
            message: message.into(),
            block_id,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.block_id {
            Some(id) => write!(f, "[{}] {} (at block {})", self.code, self.message, id),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Check = Result<(), ValidationError>;

/// Run the data rules for one matrix block, stopping at the first failure.
pub fn validate_matrix(matrix: &MatrixBlock) -> Check {
    for rule in matrix_rules::rules_for(matrix) {
        rule(matrix)?;
    }
    criteria_rules::validate_criteria_types(matrix)
}

/// Run every data rule for one matrix block and collect all failures.
pub fn collect_matrix_errors(matrix: &MatrixBlock) -> Vec<ValidationError> {
    matrix_rules::rules_for(matrix)
        .into_iter()
        .filter_map(|rule| rule(matrix).err())
        .chain(criteria_rules::validate_criteria_types(matrix).err())
        .collect()
}

/// Run the user-entered weights rules, stopping at the first failure.
/// Weights computed by the backend have nothing to check.
pub fn validate_weights(weights: &WeightsBlock, criteria_count: usize) -> Check {
    for rule in weights_rules::rules_for(weights) {
        rule(weights, criteria_count)?;
    }
    Ok(())
}
