//! Lowering phase: block graph → CalculationBody.
//!
//! Drives one pass per matrix block. A matrix is appended to every list of the
//! body only after all of its checks passed, so list positions stay aligned.
//! SYNC NOTE: The body layout is read positionally by the backend's
//! `/api/v1/results` endpoint; keep list order and field names stable.

pub mod links;
pub mod params;
pub mod resolve;

use crate::body::*;
use crate::catalog::MethodsCatalog;
use crate::config::{CompileOptions, SuccessPolicy};
use crate::parse::graph::GraphIndex;
use crate::parse::types::{BlockKind, Extension, MatrixBlock, MatrixSource};
use crate::validate::{self, ValidationError, criteria_rules, structural};

use links::DownstreamBlocks;
use resolve::WeightChain;

/// Everything one matrix contributes to the body.
struct MatrixContribution {
    matrix: MatrixEntry,
    extension: Extension,
    types: Vec<i32>,
    method: Vec<WeightMethodPair>,
    params: Vec<MethodParams>,
    method_correlations: Vec<MethodCorrelation>,
    method_rankings: Vec<MethodRanking>,
    ranking_correlations: Vec<RankingCorrelation>,
}

/// Compile every matrix of the graph into a calculation body.
pub fn compile_body(
    index: &GraphIndex<'_>,
    catalog: &MethodsCatalog,
    options: &CompileOptions,
) -> CompileOutput {
    let mut output = CompileOutput::default();

    let matrices: Vec<&MatrixBlock> = index
        .find_blocks_by_type(BlockKind::Matrix)
        .into_iter()
        .filter_map(|b| b.as_matrix())
        .collect();
    if let Err(e) = structural::validate_matrix_input_data(&matrices) {
        tracing::info!(code = e.code, "nothing to compile: {}", e.message);
        output.error = Some(e);
        return output;
    }

    let downstream = DownstreamBlocks::collect(index, catalog);

    for matrix in matrices {
        output.matrix_indexes.push(matrix.id);
        let _span = tracing::debug_span!("matrix", matrix_id = matrix.id).entered();

        match compile_matrix(index, matrix, &downstream, catalog, options) {
            Ok(contribution) => {
                append(&mut output.body, contribution, &downstream);
                tracing::debug!("matrix included");
                output.outcomes.push(MatrixOutcome {
                    matrix_id: matrix.id,
                    included: true,
                    error: None,
                });
            }
            Err(e) => {
                tracing::info!(code = e.code, "matrix excluded: {}", e.message);
                output.outcomes.push(MatrixOutcome {
                    matrix_id: matrix.id,
                    included: false,
                    error: Some(e),
                });
            }
        }
    }

    output.calculate = match options.success_policy {
        SuccessPolicy::AllMatrices => output.outcomes.iter().all(|o| o.included),
        SuccessPolicy::LastMatrix => output.outcomes.last().is_some_and(|o| o.included),
    };
    output
}

fn compile_matrix(
    index: &GraphIndex<'_>,
    matrix: &MatrixBlock,
    downstream: &DownstreamBlocks<'_>,
    catalog: &MethodsCatalog,
    options: &CompileOptions,
) -> Result<MatrixContribution, ValidationError> {
    let weights = resolve::resolve_weights_for_matrix(index, matrix);
    structural::validate_matrix_weights_connections(&weights, matrix.id)?;

    validate::validate_matrix(matrix)?;

    if options.validate_weights {
        let criteria = matrix.criteria_count();
        for w in &weights {
            validate::validate_weights(w, criteria)?;
        }
    }

    let chains = resolve::resolve_methods_for_weights(index, &weights);
    structural::validate_method_connection(&chains, matrix.id)?;

    let types = criteria_rules::criteria_codes(matrix);
    criteria_rules::validate_same_criteria_types(
        method_names(&chains),
        &types,
        catalog,
        matrix.id,
    )?;

    let extension = matrix.data.extension;
    Ok(MatrixContribution {
        matrix: matrix_entry(matrix),
        extension,
        types,
        method: params::build_weight_method_pairs(&chains),
        params: params::build_method_parameters(&chains, extension),
        method_correlations: links::method_correlations(
            index,
            &chains,
            &downstream.method_correlations,
        ),
        method_rankings: links::method_rankings(index, &chains, &downstream.rankings, catalog),
        ranking_correlations: links::ranking_correlations(
            index,
            &chains,
            &downstream.rankings,
            &downstream.ranking_correlations,
            catalog,
        ),
    })
}

fn method_names<'c>(chains: &'c [WeightChain<'_>]) -> impl Iterator<Item = &'c str> {
    chains
        .iter()
        .flat_map(|chain| chain.methods.iter().map(|m| m.name.as_str()))
}

/// Crisp values are coerced to numbers; fuzzy cells keep their shape.
fn matrix_entry(matrix: &MatrixBlock) -> MatrixEntry {
    let data = &matrix.data;
    match (matrix.source(), data.extension) {
        (Some(MatrixSource::Random), _) => MatrixEntry::Random([
            data.alternatives.unwrap_or(0),
            data.criteria.unwrap_or(0),
        ]),
        (_, Extension::Crisp) => MatrixEntry::Crisp(
            data.matrix
                .iter()
                .map(|row| row.iter().map(|c| c.as_number().unwrap_or(f64::NAN)).collect())
                .collect(),
        ),
        (_, Extension::Fuzzy) => MatrixEntry::Fuzzy(data.matrix.clone()),
    }
}

/// Link lists only carry entries when the graph has blocks of that kind; when
/// they do, every included matrix gets one (possibly empty) entry.
fn append(body: &mut CalculationBody, c: MatrixContribution, downstream: &DownstreamBlocks<'_>) {
    body.matrix.push(c.matrix);
    body.extensions.push(c.extension);
    body.types.push(c.types);
    body.method.push(c.method);
    body.params.push(c.params);
    if !downstream.method_correlations.is_empty() {
        body.method_correlations.push(c.method_correlations);
    }
    if !downstream.rankings.is_empty() {
        body.method_rankings.push(c.method_rankings);
    }
    if !downstream.ranking_correlations.is_empty() {
        body.ranking_correlations.push(c.ranking_correlations);
    }
}
