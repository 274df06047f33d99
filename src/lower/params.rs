//! Method parameters and (weights, method) pairs for one matrix.

use serde_json::{Map, Value};

use super::resolve::WeightChain;
use crate::body::{MethodParams, WeightMethodPair, WeightsValue};
use crate::parse::types::{Extension, MethodBlock, WeightsBlock};

/// One parameter record per method, flattened over all chains.
pub fn build_method_parameters(chains: &[WeightChain<'_>], extension: Extension) -> Vec<MethodParams> {
    chains
        .iter()
        .flat_map(|chain| chain.methods.iter())
        .map(|method| MethodParams {
            extension,
            method: method.name.clone(),
            additional: merge_additional(method),
        })
        .collect()
}

/// Merge single-key fragments into one mapping; later keys win.
fn merge_additional(method: &MethodBlock) -> Map<String, Value> {
    method
        .data
        .additional
        .iter()
        .flat_map(|fragment| fragment.iter())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

pub fn build_weight_method_pairs(chains: &[WeightChain<'_>]) -> Vec<WeightMethodPair> {
    chains
        .iter()
        .flat_map(|chain| {
            let weights = weights_value(chain.weights);
            chain.methods.iter().map(move |method| WeightMethodPair {
                method: method.name.clone(),
                weights: weights.clone(),
            })
        })
        .collect()
}

/// Literal values for user weights, otherwise the name of the weighting
/// method the backend computes.
pub fn weights_value(weights: &WeightsBlock) -> WeightsValue {
    if !weights.is_input() {
        return WeightsValue::Derived(weights.name.clone());
    }
    let values = &weights.data.weights;
    if values.first().is_some_and(|w| w.is_fuzzy_literal()) {
        WeightsValue::Fuzzy(values.clone())
    } else {
        WeightsValue::Numeric(
            values
                .iter()
                .map(|w| w.as_number().unwrap_or(f64::NAN))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::types::{BlockBase, Cell, MethodData, WeightsData};
    use serde_json::json;

    fn weights(name: &str, values: Vec<Cell>) -> WeightsBlock {
        BlockBase {
            id: 2,
            name: name.into(),
            data: WeightsData {
                weights: values,
                extension: Extension::Crisp,
            },
        }
    }

    fn method(name: &str, additional: Value) -> MethodBlock {
        let additional = match additional {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::Object(m) => Some(m),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        };
        BlockBase {
            id: 3,
            name: name.into(),
            data: MethodData { additional },
        }
    }

    #[test]
    fn input_weights_become_numbers() {
        let w = weights("input", vec![Cell::from("0.2"), Cell::Number(0.8)]);
        assert_eq!(weights_value(&w), WeightsValue::Numeric(vec![0.2, 0.8]));
    }

    #[test]
    fn fuzzy_input_weights_stay_raw() {
        let w = weights("input", vec![Cell::from("0.1,0.2,0.3")]);
        assert_eq!(
            weights_value(&w),
            WeightsValue::Fuzzy(vec![Cell::from("0.1,0.2,0.3")])
        );
    }

    #[test]
    fn derived_weights_use_block_name() {
        let w = weights("entropy", vec![]);
        assert_eq!(weights_value(&w), WeightsValue::Derived("entropy".into()));
    }

    #[test]
    fn additional_fragments_merge() {
        let w = weights("equal", vec![]);
        let m1 = method("VIKOR", json!([{"v": 0.5}, {"p": 2}, {"v": 0.7}]));
        let m2 = method("TOPSIS", json!([]));
        let chains = vec![WeightChain {
            weights: &w,
            methods: vec![&m1, &m2],
        }];

        let params = build_method_parameters(&chains, Extension::Fuzzy);
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].extension, Extension::Fuzzy);
        assert_eq!(Value::Object(params[0].additional.clone()), json!({"v": 0.7, "p": 2}));
        assert!(params[1].additional.is_empty());

        let pairs = build_weight_method_pairs(&chains);
        let methods: Vec<&str> = pairs.iter().map(|p| p.method.as_str()).collect();
        assert_eq!(methods, vec!["VIKOR", "TOPSIS"]);
        assert!(pairs.iter().all(|p| p.weights == WeightsValue::Derived("equal".into())));
    }
}
