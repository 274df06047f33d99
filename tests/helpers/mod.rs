use mcda_compiler::catalog::{CatalogEntry, CatalogGroup, MethodsCatalog};
use mcda_compiler::parse::types::*;

// =============================================================================
// Block builders
// =============================================================================

pub fn crisp_matrix(id: BlockId, rows: &[&[f64]], types: &[i32]) -> Block {
    Block::Matrix(BlockBase {
        id,
        name: "input".into(),
        data: MatrixData {
            matrix: rows
                .iter()
                .map(|r| r.iter().map(|v| Cell::Number(*v)).collect())
                .collect(),
            criteria_types: types.iter().map(|t| Cell::Text(t.to_string())).collect(),
            extension: Extension::Crisp,
            alternatives: None,
            criteria: None,
        },
    })
}

/// Crisp matrix whose cells are typed as text, the way the editor stores them.
pub fn text_matrix(id: BlockId, rows: &[&[&str]], types: &[i32]) -> Block {
    Block::Matrix(BlockBase {
        id,
        name: "input".into(),
        data: MatrixData {
            matrix: rows
                .iter()
                .map(|r| r.iter().map(|v| Cell::from(*v)).collect())
                .collect(),
            criteria_types: types.iter().map(|t| Cell::Number(*t as f64)).collect(),
            extension: Extension::Crisp,
            alternatives: None,
            criteria: None,
        },
    })
}

pub fn fuzzy_matrix(id: BlockId, rows: Vec<Vec<Cell>>, types: &[i32]) -> Block {
    Block::Matrix(BlockBase {
        id,
        name: "input".into(),
        data: MatrixData {
            matrix: rows,
            criteria_types: types.iter().map(|t| Cell::Number(*t as f64)).collect(),
            extension: Extension::Fuzzy,
            alternatives: None,
            criteria: None,
        },
    })
}

pub fn random_matrix(id: BlockId, alternatives: u32, criteria: u32, types: &[i32]) -> Block {
    Block::Matrix(BlockBase {
        id,
        name: "random".into(),
        data: MatrixData {
            matrix: vec![],
            criteria_types: types.iter().map(|t| Cell::Number(*t as f64)).collect(),
            extension: Extension::Crisp,
            alternatives: Some(alternatives),
            criteria: Some(criteria),
        },
    })
}

/// A valid 3×3 crisp matrix with distinct, non-zero columns.
pub fn sample_matrix(id: BlockId) -> Block {
    crisp_matrix(
        id,
        &[&[1.0, 2.0, 3.0], &[4.0, 1.0, 2.0], &[3.0, 5.0, 1.0]],
        &[1, 1, -1],
    )
}

pub fn input_weights(id: BlockId, values: &[f64]) -> Block {
    Block::Weights(BlockBase {
        id,
        name: "input".into(),
        data: WeightsData {
            weights: values.iter().map(|v| Cell::Number(*v)).collect(),
            extension: Extension::Crisp,
        },
    })
}

pub fn fuzzy_weights(id: BlockId, values: &[&str]) -> Block {
    Block::Weights(BlockBase {
        id,
        name: "input".into(),
        data: WeightsData {
            weights: values.iter().map(|v| Cell::from(*v)).collect(),
            extension: Extension::Fuzzy,
        },
    })
}

pub fn derived_weights(id: BlockId, name: &str) -> Block {
    Block::Weights(BlockBase {
        id,
        name: name.into(),
        data: WeightsData::default(),
    })
}

pub fn method(id: BlockId, name: &str) -> Block {
    Block::Method(BlockBase {
        id,
        name: name.into(),
        data: MethodData::default(),
    })
}

pub fn ranking(id: BlockId, name: &str) -> Block {
    Block::Ranking(BlockBase {
        id,
        name: name.into(),
        data: RankingData::default(),
    })
}

pub fn correlation(id: BlockId, name: &str) -> Block {
    Block::Correlation(BlockBase {
        id,
        name: name.into(),
        data: CorrelationData::default(),
    })
}

pub fn conn(source: BlockId, target: BlockId) -> Connection {
    Connection::new(source, target)
}

// =============================================================================
// Catalog
// =============================================================================

/// TOPSIS/VIKOR/SPOTIS methods, a `spearman` correlation over rankings and a
/// `pearson` correlation over method preferences.
pub fn catalog() -> MethodsCatalog {
    MethodsCatalog::new(vec![
        CatalogGroup::new(
            "Method",
            vec![
                CatalogEntry::named("TOPSIS").with_order("desc"),
                CatalogEntry::named("VIKOR").with_order("asc").mixed_criteria(),
                CatalogEntry::named("SPOTIS").with_order("asc"),
            ],
        ),
        CatalogGroup::new(
            "Correlation",
            vec![
                CatalogEntry::named("spearman").with_inputs(&[BlockKind::Ranking]),
                CatalogEntry::named("pearson").with_inputs(&[BlockKind::Method]),
            ],
        ),
        CatalogGroup::new("Ranking", vec![CatalogEntry::named("rank")]),
    ])
}
