//! Wordlikeness scoring.
//!
//! Switch evaluation is polymorphic over the scoring capability: the built-in
//! scorer works from small per-script statistics and needs no external data,
//! while hosts can plug in anything that implements [`WordScorer`] (a
//! dictionary, a language model). The optional `lingua-scorer` feature ships
//! one such alternative backed by the `lingua` crate.

mod builtin;
#[cfg(feature = "lingua-scorer")]
mod lingua;

pub use builtin::BuiltinScorer;
#[cfg(feature = "lingua-scorer")]
pub use lingua::LinguaScorer;

use crate::layout::{LayoutId, Script};

/// Score at or above which an interpretation counts as a plausible word.
/// When two or more interpretations clear this bar the verdict is always
/// [`SwitchVerdict::Stay`]; ambiguity favors inaction.
pub(crate) const PLAUSIBLE_SCORE: f64 = 0.5;

/// Capability: score a code point sequence for wordlikeness in a given
/// script.
///
/// Scores live in `[0.0, 1.0]`; `0.0` means "not a word of that script" and
/// `1.0` a certain word. Implementations must be pure: identical inputs yield
/// identical scores, with no I/O and no hidden state.
pub trait WordScorer: Send + Sync {
    fn score(&self, token: &str, script: Script) -> f64;
}

/// Decision produced by switch evaluation. Computed fresh per call, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwitchVerdict {
    /// Keep the current layout.
    Stay,
    /// The token reads better under `to`. `confidence` is the winning score
    /// margin clipped to `[0.0, 1.0]`, left to the host's acceptance policy
    /// (auto-apply above one bar, merely suggest above a lower one).
    Switch { to: LayoutId, confidence: f64 },
}

impl SwitchVerdict {
    pub fn is_switch(&self) -> bool {
        matches!(self, Self::Switch { .. })
    }
}
