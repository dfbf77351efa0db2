use serde::{Deserialize, Serialize};

/// Tunables for switch evaluation.
///
/// The engine never reads disk or environment; the host passes this value at
/// construction and owns its persistence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum score margin (best remapped interpretation minus the token as
    /// typed) required to recommend a switch. Higher values favor precision:
    /// a missed correction is cheaper than mangling a legitimate word.
    #[serde(default = "default_switch_threshold")]
    pub switch_threshold: f64,

    /// Tokens with fewer code points than this never trigger a
    /// recommendation; short tokens carry too little signal.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            switch_threshold: default_switch_threshold(),
            min_token_len: default_min_token_len(),
        }
    }
}

const fn default_switch_threshold() -> f64 {
    0.25
}

const fn default_min_token_len() -> usize {
    4
}
