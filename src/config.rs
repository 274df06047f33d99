//! Compile options supplied alongside a calculation request.

use serde::{Deserialize, Serialize};

/// How the overall `calculate` flag is derived from per-matrix outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SuccessPolicy {
    /// Every attempted matrix was included (and there was at least one).
    #[default]
    AllMatrices,
    /// Only the last processed matrix decides.
    LastMatrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    pub success_policy: SuccessPolicy,
    /// Run the user-entered weights checks. Disabled for editor previews.
    pub validate_weights: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            success_policy: SuccessPolicy::AllMatrices,
            validate_weights: true,
        }
    }
}
