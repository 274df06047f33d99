//! Per-matrix data rules (M003–M012).

use super::{Check, ValidationError};
use crate::parse::types::{Cell, Extension, MatrixBlock, MatrixSource, Tfn};

pub type MatrixRule = fn(&MatrixBlock) -> Check;

/// Rules that apply to `matrix`, in evaluation order.
pub fn rules_for(matrix: &MatrixBlock) -> Vec<MatrixRule> {
    let mut rules: Vec<MatrixRule> = Vec::new();
    let source = matrix.source();
    match source {
        None => {
            rules.push(validate_matrix_variant);
            return rules;
        }
        Some(MatrixSource::Random) => {
            rules.push(validate_random_matrix);
            return rules;
        }
        Some(MatrixSource::File) => rules.push(validate_uploaded_matrix),
        Some(MatrixSource::Input) => {}
    }

    rules.push(validate_user_input_matrix_empty);
    // Uploaded matrices already had their shape checked.
    if source == Some(MatrixSource::Input) {
        rules.push(validate_matrix_rectangular);
    }
    match matrix.data.extension {
        Extension::Crisp => {
            rules.push(validate_user_input_crisp_matrix_numeric);
            rules.push(validate_user_input_crisp_matrix_zeros);
            rules.push(validate_user_input_crisp_matrix_same_values_in_column);
        }
        Extension::Fuzzy => {
            rules.push(validate_user_input_fuzzy_matrix_zeros);
            rules.push(validate_user_input_fuzzy_matrix_tfn);
            rules.push(validate_user_input_fuzzy_matrix_order);
        }
    }
    rules
}

fn fail(code: &'static str, matrix: &MatrixBlock, message: String) -> Check {
    Err(ValidationError::new(code, message, Some(matrix.id)))
}

/// Iterate cells with their 1-based (row, column) position.
fn positioned(matrix: &MatrixBlock) -> impl Iterator<Item = (usize, usize, &Cell)> {
    matrix.data.matrix.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .map(move |(c, cell)| (r + 1, c + 1, cell))
    })
}

fn crisp_values(matrix: &MatrixBlock) -> Vec<Vec<f64>> {
    matrix
        .data
        .matrix
        .iter()
        .map(|row| row.iter().map(|c| c.as_number().unwrap_or(f64::NAN)).collect())
        .collect()
}

pub fn validate_matrix_variant(matrix: &MatrixBlock) -> Check {
    fail(
        "M012",
        matrix,
        format!("Unsupported matrix variant '{}'", matrix.name),
    )
}

pub fn validate_uploaded_matrix(matrix: &MatrixBlock) -> Check {
    let rows = &matrix.data.matrix;
    let Some(first) = rows.first() else {
        return fail("M003", matrix, "Uploaded matrix has no rows".into());
    };
    validate_matrix_rectangular(matrix)?;
    let types = matrix.data.criteria_types.len();
    if first.len() != types {
        return fail(
            "M003",
            matrix,
            format!(
                "Uploaded matrix has {} criteria but {} criteria types",
                first.len(),
                types
            ),
        );
    }
    Ok(())
}

/// Every row has as many values as the first one.
pub fn validate_matrix_rectangular(matrix: &MatrixBlock) -> Check {
    let rows = &matrix.data.matrix;
    let Some(first) = rows.first() else {
        return Ok(());
    };
    match rows.iter().position(|row| row.len() != first.len()) {
        Some(pos) => fail(
            "M003",
            matrix,
            format!(
                "Matrix row {} has {} values, expected {}",
                pos + 1,
                rows[pos].len(),
                first.len()
            ),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_matrix_empty(matrix: &MatrixBlock) -> Check {
    let rows = &matrix.data.matrix;
    if rows.is_empty() || rows.iter().any(Vec::is_empty) {
        return fail("M004", matrix, "Matrix is empty".into());
    }
    if let Some((r, c, _)) = positioned(matrix).find(|(_, _, cell)| cell.is_blank()) {
        return fail(
            "M004",
            matrix,
            format!("Matrix cell at row {}, column {} is empty", r, c),
        );
    }
    Ok(())
}

pub fn validate_user_input_crisp_matrix_numeric(matrix: &MatrixBlock) -> Check {
    match positioned(matrix).find(|(_, _, cell)| cell.as_number().is_none()) {
        Some((r, c, _)) => fail(
            "M011",
            matrix,
            format!("Matrix cell at row {}, column {} is not a number", r, c),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_crisp_matrix_zeros(matrix: &MatrixBlock) -> Check {
    let values = crisp_values(matrix);
    if let Some(r) = values.iter().position(|row| row.iter().all(|v| *v == 0.0)) {
        return fail(
            "M005",
            matrix,
            format!("Matrix row {} contains only zeros", r + 1),
        );
    }
    let width = values.first().map(Vec::len).unwrap_or(0);
    for c in 0..width {
        if values.iter().all(|row| row.get(c).is_some_and(|v| *v == 0.0)) {
            return fail(
                "M005",
                matrix,
                format!("Matrix column {} contains only zeros", c + 1),
            );
        }
    }
    Ok(())
}

pub fn validate_user_input_crisp_matrix_same_values_in_column(matrix: &MatrixBlock) -> Check {
    let values = crisp_values(matrix);
    if values.len() < 2 {
        return Ok(());
    }
    let width = values[0].len();
    for c in 0..width {
        let first = values[0][c];
        if values.iter().all(|row| row.get(c) == Some(&first)) {
            return fail(
                "M006",
                matrix,
                format!("Matrix column {} has the same value in every row", c + 1),
            );
        }
    }
    Ok(())
}

pub fn validate_user_input_fuzzy_matrix_zeros(matrix: &MatrixBlock) -> Check {
    let zero = positioned(matrix).find(|(_, _, cell)| {
        cell.components()
            .is_some_and(|parts| parts.iter().any(|v| *v == 0.0))
    });
    match zero {
        Some((r, c, _)) => fail(
            "M007",
            matrix,
            format!("Fuzzy value at row {}, column {} contains zero", r, c),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_fuzzy_matrix_tfn(matrix: &MatrixBlock) -> Check {
    match positioned(matrix).find(|(_, _, cell)| Tfn::from_cell(cell).is_none()) {
        Some((r, c, _)) => fail(
            "M008",
            matrix,
            format!(
                "Fuzzy value at row {}, column {} is not a triangular fuzzy number",
                r, c
            ),
        ),
        None => Ok(()),
    }
}

pub fn validate_user_input_fuzzy_matrix_order(matrix: &MatrixBlock) -> Check {
    let unordered = positioned(matrix)
        .find(|(_, _, cell)| Tfn::from_cell(cell).is_some_and(|tfn| !tfn.is_ordered()));
    match unordered {
        Some((r, c, _)) => fail(
            "M009",
            matrix,
            format!(
                "Fuzzy value at row {}, column {} must satisfy a <= b <= c",
                r, c
            ),
        ),
        None => Ok(()),
    }
}

pub fn validate_random_matrix(matrix: &MatrixBlock) -> Check {
    match (matrix.data.alternatives, matrix.data.criteria) {
        (Some(a), Some(c)) if a > 0 && c > 0 => Ok(()),
        _ => fail(
            "M010",
            matrix,
            "Random matrix needs a positive number of alternatives and criteria".into(),
        ),
    }
}
