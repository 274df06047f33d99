//! Rust types mirroring the editor's block/connection state.
//!
//! These types are the serde target for the frontend pipeline JSON.
//! SYNC NOTE: Keep block `data` shapes aligned with the editor's block types.
//! When a block kind or payload changes, also review the validate/lower modules.

use serde::{Deserialize, Serialize};

use crate::config::CompileOptions;

pub type BlockId = i64;

// =============================================================================
// TOP-LEVEL REQUEST
// =============================================================================

/// One compilation request as sent by the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub blocks: Vec<Block>,
    pub connections: Vec<Connection>,
    #[serde(default)]
    pub options: CompileOptions,
}

/// Directed edge `(source, target)` between two stringified block ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection(pub String, pub String);

impl Connection {
    pub fn new(source: impl ToString, target: impl ToString) -> Self {
        Connection(source.to_string(), target.to_string())
    }

    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn target(&self) -> &str {
        &self.1
    }
}

// =============================================================================
// CELLS & FUZZY NUMBERS
// =============================================================================

/// Data representation mode of a matrix or weights block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    #[default]
    Crisp,
    Fuzzy,
}

impl Extension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Extension::Crisp => "crisp",
            Extension::Fuzzy => "fuzzy",
        }
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw table cell as typed into the editor or read from an uploaded file.
///
/// Crisp cells are numbers or numeric text. Fuzzy cells are either a
/// comma-joined TFN (`"1,2,3"`) or an explicit triple (`[1, 2, 3]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Triple(Vec<f64>),
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Triple(v) => v.is_empty(),
        }
    }

    /// Crisp numeric value. `None` for fuzzy or unparsable cells.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => n.is_finite().then_some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Cell::Triple(_) => None,
        }
    }

    /// Fuzzy components in written order, whatever their count.
    pub fn components(&self) -> Option<Vec<f64>> {
        match self {
            Cell::Number(n) => Some(vec![*n]),
            Cell::Text(s) => s
                .split(',')
                .map(|part| part.trim().parse::<f64>().ok())
                .collect(),
            Cell::Triple(v) => Some(v.clone()),
        }
    }

    /// True when the cell already holds a fuzzy representation.
    pub fn is_fuzzy_literal(&self) -> bool {
        match self {
            Cell::Text(s) => s.contains(','),
            Cell::Triple(_) => true,
            Cell::Number(_) => false,
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Triangular fuzzy number `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tfn {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Tfn {
    pub fn from_cell(cell: &Cell) -> Option<Tfn> {
        match cell.components()?.as_slice() {
            [a, b, c] => Some(Tfn { a: *a, b: *b, c: *c }),
            _ => None,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.a <= self.b && self.b <= self.c
    }
}

// =============================================================================
// BLOCK: tagged union over 5 block kinds
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Matrix,
    Weights,
    Method,
    Ranking,
    Correlation,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Matrix => "matrix",
            BlockKind::Weights => "weights",
            BlockKind::Method => "method",
            BlockKind::Ranking => "ranking",
            BlockKind::Correlation => "correlation",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Matrix(MatrixBlock),
    Weights(WeightsBlock),
    Method(MethodBlock),
    Ranking(RankingBlock),
    Correlation(CorrelationBlock),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de> + Default"))]
pub struct BlockBase<D> {
    pub id: BlockId,
    pub name: String,
    #[serde(default)]
    pub data: D,
}

pub type MatrixBlock = BlockBase<MatrixData>;
pub type WeightsBlock = BlockBase<WeightsData>;
pub type MethodBlock = BlockBase<MethodData>;
pub type RankingBlock = BlockBase<RankingData>;
pub type CorrelationBlock = BlockBase<CorrelationData>;

impl Block {
    pub fn id(&self) -> BlockId {
        match self {
            Block::Matrix(b) => b.id,
            Block::Weights(b) => b.id,
            Block::Method(b) => b.id,
            Block::Ranking(b) => b.id,
            Block::Correlation(b) => b.id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Matrix(_) => BlockKind::Matrix,
            Block::Weights(_) => BlockKind::Weights,
            Block::Method(_) => BlockKind::Method,
            Block::Ranking(_) => BlockKind::Ranking,
            Block::Correlation(_) => BlockKind::Correlation,
        }
    }

    pub fn as_matrix(&self) -> Option<&MatrixBlock> {
        match self {
            Block::Matrix(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_weights(&self) -> Option<&WeightsBlock> {
        match self {
            Block::Weights(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodBlock> {
        match self {
            Block::Method(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_ranking(&self) -> Option<&RankingBlock> {
        match self {
            Block::Ranking(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_correlation(&self) -> Option<&CorrelationBlock> {
        match self {
            Block::Correlation(b) => Some(b),
            _ => None,
        }
    }
}

// =============================================================================
// BLOCK PAYLOADS
// =============================================================================

/// Where a matrix block's values come from, decided by the block name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixSource {
    Input,
    File,
    Random,
}

impl MatrixSource {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "input" => Some(MatrixSource::Input),
            "file" => Some(MatrixSource::File),
            "random" => Some(MatrixSource::Random),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatrixData {
    pub matrix: Vec<Vec<Cell>>,
    pub criteria_types: Vec<Cell>,
    pub extension: Extension,
    /// Only used by `random` matrices.
    pub alternatives: Option<u32>,
    pub criteria: Option<u32>,
}

impl MatrixBlock {
    pub fn source(&self) -> Option<MatrixSource> {
        MatrixSource::from_name(&self.name)
    }

    /// Number of criteria (columns) this matrix describes.
    pub fn criteria_count(&self) -> usize {
        match self.source() {
            Some(MatrixSource::Random) => self.data.criteria.unwrap_or(0) as usize,
            _ => self.data.matrix.first().map(Vec::len).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsData {
    pub weights: Vec<Cell>,
    pub extension: Extension,
}

impl WeightsBlock {
    /// User-entered weights; every other variant is computed by the backend.
    pub fn is_input(&self) -> bool {
        self.name == "input"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodData {
    /// Single-key parameter fragments, e.g. `[{"v": 0.5}, {"p": 2}]`.
    pub additional: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingData {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationData {}
