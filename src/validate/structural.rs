//! Connection-level rules (M001, M002, W006).

use super::{Check, ValidationError};
use crate::lower::resolve::WeightChain;
use crate::parse::types::{BlockId, MatrixBlock, WeightsBlock};

pub fn validate_matrix_input_data(matrices: &[&MatrixBlock]) -> Check {
    if matrices.is_empty() {
        return Err(ValidationError::new(
            "M001",
            "Pipeline must contain at least one matrix block",
            None,
        ));
    }
    Ok(())
}

pub fn validate_matrix_weights_connections(weights: &[&WeightsBlock], matrix_id: BlockId) -> Check {
    if weights.is_empty() {
        return Err(ValidationError::new(
            "M002",
            format!("Matrix {} is not connected to any weights block", matrix_id),
            Some(matrix_id),
        ));
    }
    Ok(())
}

pub fn validate_method_connection(chains: &[WeightChain<'_>], matrix_id: BlockId) -> Check {
    if chains.is_empty() {
        return Err(ValidationError::new(
            "W006",
            format!("Matrix {} has no weights connected to a method", matrix_id),
            Some(matrix_id),
        ));
    }
    match chains.iter().find(|chain| chain.methods.is_empty()) {
        Some(chain) => Err(ValidationError::new(
            "W006",
            format!(
                "Weights block {} is not connected to any method",
                chain.weights.id
            ),
            Some(chain.weights.id),
        )),
        None => Ok(()),
    }
}
