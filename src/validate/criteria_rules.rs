//! Criteria direction rules (C001–C002).

use super::{Check, ValidationError};
use crate::catalog::MethodsCatalog;
use crate::parse::types::MatrixBlock;

/// Allowed direction codes: profit and cost.
const CRITERIA_CODES: [i32; 2] = [1, -1];

/// Parse criteria types into direction codes. Invalid entries become `0`.
pub fn criteria_codes(matrix: &MatrixBlock) -> Vec<i32> {
    matrix
        .data
        .criteria_types
        .iter()
        .map(|t| match t.as_number() {
            Some(v) if v.fract() == 0.0 => v as i32,
            _ => 0,
        })
        .collect()
}

pub fn validate_criteria_types(matrix: &MatrixBlock) -> Check {
    let codes = criteria_codes(matrix);
    if codes.is_empty() {
        return Err(ValidationError::new(
            "C001",
            "Criteria types are missing",
            Some(matrix.id),
        ));
    }
    if let Some(pos) = codes.iter().position(|c| !CRITERIA_CODES.contains(c)) {
        return Err(ValidationError::new(
            "C001",
            format!("Criterion {} has an invalid type, expected 1 or -1", pos + 1),
            Some(matrix.id),
        ));
    }
    let expected = matrix.criteria_count();
    if codes.len() != expected {
        return Err(ValidationError::new(
            "C001",
            format!(
                "Matrix has {} criteria but {} criteria types",
                expected,
                codes.len()
            ),
            Some(matrix.id),
        ));
    }
    Ok(())
}

/// Methods flagged `requiresMixedCriteria` need at least one profit and one
/// cost criterion.
pub fn validate_same_criteria_types<'m>(
    methods: impl IntoIterator<Item = &'m str>,
    types: &[i32],
    catalog: &MethodsCatalog,
    matrix_id: i64,
) -> Check {
    let Some(first) = types.first() else {
        return Ok(());
    };
    if types.iter().any(|t| t != first) {
        return Ok(());
    }
    match methods
        .into_iter()
        .find(|m| catalog.requires_mixed_criteria(m))
    {
        Some(method) => Err(ValidationError::new(
            "C002",
            format!(
                "Method {} needs both profit and cost criteria, but all criteria have type {}",
                method, first
            ),
            Some(matrix_id),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, CatalogGroup};
    use crate::parse::types::{BlockBase, Cell, MatrixData};

    fn matrix(types: Vec<Cell>) -> MatrixBlock {
        BlockBase {
            id: 1,
            name: "input".into(),
            data: MatrixData {
                matrix: vec![vec![Cell::Number(1.0), Cell::Number(2.0)]],
                criteria_types: types,
                ..Default::default()
            },
        }
    }

    #[test]
    fn accepts_string_and_number_codes() {
        let m = matrix(vec![Cell::from("1"), Cell::Number(-1.0)]);
        assert!(validate_criteria_types(&m).is_ok());
        assert_eq!(criteria_codes(&m), vec![1, -1]);
    }

    #[test]
    fn rejects_unknown_codes_and_length_mismatch() {
        let bad = matrix(vec![Cell::from("1"), Cell::from("2")]);
        assert_eq!(validate_criteria_types(&bad).unwrap_err().code, "C001");

        let short = matrix(vec![Cell::from("1")]);
        let err = validate_criteria_types(&short).unwrap_err();
        assert!(err.message.contains("2 criteria but 1"), "{}", err.message);
    }

    #[test]
    fn mixed_criteria_methods_need_both_directions() {
        let catalog = MethodsCatalog::new(vec![CatalogGroup::new(
            "method",
            vec![CatalogEntry::named("VIKOR").mixed_criteria(), CatalogEntry::named("TOPSIS")],
        )]);

        assert!(validate_same_criteria_types(["TOPSIS"], &[1, 1], &catalog, 1).is_ok());
        assert!(validate_same_criteria_types(["VIKOR"], &[1, -1], &catalog, 1).is_ok());
        let err = validate_same_criteria_types(["TOPSIS", "vikor"], &[-1, -1], &catalog, 1)
            .unwrap_err();
        assert_eq!(err.code, "C002");
        assert!(err.message.contains("vikor"));
    }
}
