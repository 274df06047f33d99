//! Connection resolver: matrix → weights → methods chains.

use crate::parse::graph::GraphIndex;
use crate::parse::types::{BlockKind, MatrixBlock, MethodBlock, WeightsBlock};

/// A weights block together with the methods it feeds, in connection order.
#[derive(Debug, Clone)]
pub struct WeightChain<'a> {
    pub weights: &'a WeightsBlock,
    pub methods: Vec<&'a MethodBlock>,
}

/// Weights blocks connected from `matrix`, in connection order (duplicates kept).
pub fn resolve_weights_for_matrix<'a>(
    index: &GraphIndex<'a>,
    matrix: &MatrixBlock,
) -> Vec<&'a WeightsBlock> {
    index
        .find_connections_from(matrix.id)
        .into_iter()
        .filter_map(|block| {
            let weights = block.as_weights();
            if weights.is_none() {
                tracing::warn!(
                    matrix_id = matrix.id,
                    target_id = block.id(),
                    target_kind = %block.kind(),
                    "ignoring matrix connection to a non-weights block"
                );
            }
            weights
        })
        .collect()
}

/// One chain per weights block, aligned by position with `weights`. A weights
/// block without outgoing method connections yields an empty method list.
pub fn resolve_methods_for_weights<'a>(
    index: &GraphIndex<'a>,
    weights: &[&'a WeightsBlock],
) -> Vec<WeightChain<'a>> {
    weights
        .iter()
        .map(|&w| WeightChain {
            weights: w,
            methods: index
                .targets_of(w.id, BlockKind::Method)
                .into_iter()
                .filter_map(|b| b.as_method())
                .collect(),
        })
        .collect()
}
