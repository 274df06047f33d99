//! User-entered weights rules (W001–W005).

use super::{Check, ValidationError};
use crate::parse::types::{Extension, Tfn, WeightsBlock};

pub type WeightsRule = fn(&WeightsBlock, usize) -> Check;

/// Rules that apply to `weights`, in evaluation order. Only `input` weights
/// carry values to check.
pub fn rules_for(weights: &WeightsBlock) -> Vec<WeightsRule> {
    if !weights.is_input() {
        return vec![];
    }
    let mut rules: Vec<WeightsRule> = vec![validate_user_input_weights];
    match weights.data.extension {
        Extension::Crisp => rules.push(validate_user_input_crisp_weights_values),
        Extension::Fuzzy => {
            rules.push(validate_user_input_fuzzy_weights_zeros);
            rules.push(validate_user_input_fuzzy_weights_tfn);
            rules.push(validate_user_input_fuzzy_weights_order);
        }
    }
    rules
}

fn fail(code: &'static str, weights: &WeightsBlock, message: String) -> Check {
    Err(ValidationError::new(code, message, Some(weights.id)))
}

pub fn validate_user_input_weights(weights: &WeightsBlock, criteria_count: usize) -> Check {
    let values = &weights.data.weights;
    if values.is_empty() {
        return fail("W001", weights, "Weights are empty".into());
    }
    if let Some(pos) = values.iter().position(|w| w.is_blank()) {
        return fail("W001", weights, format!("Weight {} is empty", pos + 1));
    }
    if criteria_count > 0 && values.len() != criteria_count {
        return fail(
            "W001",
            weights,
            format!(
                "Expected {} weights for {} criteria, found {}",
                criteria_count,
                criteria_count,
                values.len()
            ),
        );
    }
    Ok(())
}

pub fn validate_user_input_crisp_weights_values(weights: &WeightsBlock, _: usize) -> Check {
    let bad = weights
        .data
        .weights
        .iter()
        .position(|w| !w.as_number().is_some_and(|v| v > 0.0));
    match bad {
        Some(pos) => fail(
            "W002",
            weights,
            format!("Weight {} must be a positive number", pos + 1),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_fuzzy_weights_zeros(weights: &WeightsBlock, _: usize) -> Check {
    let zero = weights.data.weights.iter().position(|w| {
        w.components()
            .is_some_and(|parts| parts.iter().any(|v| *v == 0.0))
    });
    match zero {
        Some(pos) => fail("W003", weights, format!("Fuzzy weight {} contains zero", pos + 1)),
        None => Ok(()),
    }
}

pub fn validate_user_input_fuzzy_weights_tfn(weights: &WeightsBlock, _: usize) -> Check {
    match weights
        .data
        .weights
        .iter()
        .position(|w| Tfn::from_cell(w).is_none())
    {
        Some(pos) => fail(
            "W004",
            weights,
            format!("Fuzzy weight {} is not a triangular fuzzy number", pos + 1),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_fuzzy_weights_order(weights: &WeightsBlock, _: usize) -> Check {
    let unordered = weights
        .data
        .weights
        .iter()
        .position(|w| Tfn::from_cell(w).is_some_and(|tfn| !tfn.is_ordered()));
    match unordered {
        Some(pos) => fail(
            "W005",
            weights,
            format!("Fuzzy weight {} must satisfy a <= b <= c", pos + 1),
        ),
        None => Ok(()),
    }
}
