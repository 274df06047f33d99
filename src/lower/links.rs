//! Downstream link builders: method → correlation, method → ranking and
//! method → ranking → correlation.
//!
//! Each builder walks only the current matrix's weight chains, so links from
//! other matrices never leak into this matrix's records.

use super::resolve::WeightChain;
use crate::body::{
    MethodCorrelation, MethodCorrelationRow, MethodRanking, MethodRankingRow, RankingCorrelation,
    RankingCorrelationRow,
};
use crate::catalog::MethodsCatalog;
use crate::parse::graph::GraphIndex;
use crate::parse::types::{BlockKind, CorrelationBlock, MethodBlock, RankingBlock, WeightsBlock};

/// Ranking and correlation blocks of the whole graph, resolved once per call.
#[derive(Debug, Default)]
pub struct DownstreamBlocks<'a> {
    pub rankings: Vec<&'a RankingBlock>,
    /// Correlation blocks whose variant accepts method input.
    pub method_correlations: Vec<&'a CorrelationBlock>,
    /// Correlation blocks whose variant accepts ranking input.
    pub ranking_correlations: Vec<&'a CorrelationBlock>,
}

impl<'a> DownstreamBlocks<'a> {
    pub fn collect(index: &GraphIndex<'a>, catalog: &MethodsCatalog) -> Self {
        let rankings = index
            .find_blocks_by_type(BlockKind::Ranking)
            .into_iter()
            .filter_map(|b| b.as_ranking())
            .collect();
        let correlations: Vec<&'a CorrelationBlock> = index
            .find_blocks_by_type(BlockKind::Correlation)
            .into_iter()
            .filter_map(|b| b.as_correlation())
            .collect();

        DownstreamBlocks {
            rankings,
            method_correlations: accepting(&correlations, catalog, BlockKind::Method),
            ranking_correlations: accepting(&correlations, catalog, BlockKind::Ranking),
        }
    }
}

/// Correlation blocks the catalog declares as accepting `input`. Variants the
/// catalog does not describe are skipped.
fn accepting<'a>(
    correlations: &[&'a CorrelationBlock],
    catalog: &MethodsCatalog,
    input: BlockKind,
) -> Vec<&'a CorrelationBlock> {
    correlations
        .iter()
        .copied()
        .filter(|corr| {
            match catalog.accepts_input(BlockKind::Correlation, &corr.name, input) {
                Some(accepts) => accepts,
                None => {
                    tracing::warn!(
                        block_id = corr.id,
                        variant = %corr.name,
                        "correlation variant missing from methods catalog"
                    );
                    false
                }
            }
        })
        .collect()
}

fn pairs<'c, 'a>(
    chains: &'c [WeightChain<'a>],
) -> impl Iterator<Item = (&'a WeightsBlock, &'a MethodBlock)> + 'c {
    chains
        .iter()
        .flat_map(|chain| chain.methods.iter().map(move |m| (chain.weights, *m)))
}

fn order_of(catalog: &MethodsCatalog, method: &MethodBlock) -> String {
    catalog.method_order(&method.name).unwrap_or_default().to_string()
}

pub fn method_correlations(
    index: &GraphIndex<'_>,
    chains: &[WeightChain<'_>],
    correlations: &[&CorrelationBlock],
) -> Vec<MethodCorrelation> {
    correlations
        .iter()
        .map(|corr| MethodCorrelation {
            correlation: corr.name.clone(),
            data: pairs(chains)
                .map(|(weights, method)| MethodCorrelationRow {
                    method: method.name.clone(),
                    weights: weights.name.clone(),
                    correlation: index.has_connection(method.id, corr.id),
                })
                .collect(),
        })
        .collect()
}

/// Ranking groups with no rows are dropped.
pub fn method_rankings(
    index: &GraphIndex<'_>,
    chains: &[WeightChain<'_>],
    rankings: &[&RankingBlock],
    catalog: &MethodsCatalog,
) -> Vec<MethodRanking> {
    rankings
        .iter()
        .map(|rank| MethodRanking {
            data: pairs(chains)
                .map(|(weights, method)| {
                    let ranked = index.has_connection(method.id, rank.id);
                    MethodRankingRow {
                        method: method.name.clone(),
                        weights: weights.name.clone(),
                        order: if ranked {
                            order_of(catalog, method)
                        } else {
                            String::new()
                        },
                        ranking: ranked,
                    }
                })
                .collect(),
        })
        .filter(|group| !group.data.is_empty())
        .collect()
}

pub fn ranking_correlations(
    index: &GraphIndex<'_>,
    chains: &[WeightChain<'_>],
    rankings: &[&RankingBlock],
    correlations: &[&CorrelationBlock],
    catalog: &MethodsCatalog,
) -> Vec<RankingCorrelation> {
    correlations
        .iter()
        .map(|corr| {
            let mut data = Vec::new();
            for (weights, method) in pairs(chains) {
                for rank in rankings {
                    if !index.has_connection(method.id, rank.id) {
                        continue;
                    }
                    let linked = index.has_connection(rank.id, corr.id);
                    data.push(RankingCorrelationRow {
                        method: method.name.clone(),
                        weights: weights.name.clone(),
                        order: if linked {
                            order_of(catalog, method)
                        } else {
                            String::new()
                        },
                        correlation: linked,
                    });
                }
            }
            RankingCorrelation {
                correlation: corr.name.clone(),
                data,
            }
        })
        .collect()
}
