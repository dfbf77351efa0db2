use std::fmt;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::layout::{KeyPos, LayoutId};
use crate::layouts;
use crate::registry::{LayoutRegistry, LayoutTable};
use crate::remap::{RemapResult, remap_token};
use crate::score::{BuiltinScorer, PLAUSIBLE_SCORE, SwitchVerdict, WordScorer};

/// Facade over the layout registry, the positional remapper and the
/// plausibility heuristic.
///
/// Construction registers every table up front and is single threaded; all
/// entry points afterwards are pure reads over immutable data and safe to
/// call concurrently. Every result is returned by value and fully owned by
/// the caller; the engine keeps no handle to it.
pub struct Engine {
    registry: LayoutRegistry,
    scorer: Box<dyn WordScorer>,
    config: EngineConfig,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The scorer is an opaque capability; show the parts that identify
        // the engine's behavior.
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Why evaluation declined to recommend a switch. Trace-level diagnostics
/// only; the public verdict stays a plain [`SwitchVerdict::Stay`].
#[derive(Copy, Clone, Debug)]
enum StayReason {
    TooShort,
    NoLetters,
    Ambiguous,
    NoCandidate,
    NotBetterEnough,
}

impl StayReason {
    fn as_str(self) -> &'static str {
        match self {
            StayReason::TooShort => "too_short",
            StayReason::NoLetters => "no_letters",
            StayReason::Ambiguous => "ambiguous",
            StayReason::NoCandidate => "no_candidate",
            StayReason::NotBetterEnough => "not_better_enough",
        }
    }
}

fn stay(reason: StayReason) -> SwitchVerdict {
    tracing::trace!(reason = %reason.as_str(), "no switch");
    SwitchVerdict::Stay
}

impl Engine {
    /// Builds an engine over the given layout definitions with the built-in
    /// scorer.
    ///
    /// Fails with [`EngineError::DuplicateLayout`] when an id appears twice
    /// and [`EngineError::MalformedTable`] when a table is non-injective.
    pub fn new(
        definitions: &[(LayoutId, &[(KeyPos, char)])],
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        Self::with_scorer(definitions, config, Box::new(BuiltinScorer))
    }

    /// Same as [`Engine::new`] but with a host-supplied wordlikeness scorer.
    pub fn with_scorer(
        definitions: &[(LayoutId, &[(KeyPos, char)])],
        config: EngineConfig,
        scorer: Box<dyn WordScorer>,
    ) -> Result<Self, EngineError> {
        let mut registry = LayoutRegistry::new();
        for &(layout, pairs) in definitions {
            let table = LayoutTable::from_pairs(layout, pairs)?;
            registry.register(layout, table)?;
        }
        Ok(Self {
            registry,
            scorer,
            config,
        })
    }

    /// Engine over the built-in [`LayoutId::EN_US`] / [`LayoutId::RU_RU`]
    /// pair.
    pub fn builtin(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(
            &[
                (LayoutId::EN_US, layouts::EN_US),
                (LayoutId::RU_RU, layouts::RU_RU),
            ],
            config,
        )
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    /// Computes what `token`'s keystrokes would have produced under `to`.
    ///
    /// Both ids are validated before any per-character work; no partial
    /// result is ever returned. An empty token yields an empty result.
    pub fn remap(
        &self,
        token: &str,
        from: LayoutId,
        to: LayoutId,
    ) -> Result<RemapResult, EngineError> {
        let from_table = self.registry.lookup(from)?;
        let to_table = self.registry.lookup(to)?;
        Ok(remap_token(token, from_table, to_table))
    }

    /// Decides whether `token` was most likely typed under the wrong layout.
    ///
    /// The token is scored as typed under `current` and remapped into every
    /// other registered layout. A switch is recommended only when exactly one
    /// interpretation is plausible and its score beats the as-typed score by
    /// at least the configured threshold; ties and ambiguity never switch.
    pub fn evaluate_switch(
        &self,
        token: &str,
        current: LayoutId,
    ) -> Result<SwitchVerdict, EngineError> {
        let current_table = self.registry.lookup(current)?;
        if token.chars().count() < self.config.min_token_len {
            return Ok(stay(StayReason::TooShort));
        }
        if !token.chars().any(char::is_alphabetic) {
            return Ok(stay(StayReason::NoLetters));
        }

        let as_typed = self.scorer.score(token, current_table.script());
        let mut plausible = usize::from(as_typed >= PLAUSIBLE_SCORE);
        let mut best: Option<(LayoutId, f64)> = None;
        for (layout, table) in self.registry.entries() {
            if layout == current {
                continue;
            }
            let candidate = remap_token(token, current_table, table);
            let score = self.scorer.score(&candidate.text, table.script());
            tracing::trace!(%layout, score, candidate = %candidate.text, "scored candidate");
            if score >= PLAUSIBLE_SCORE {
                plausible += 1;
            }
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((layout, score));
            }
        }

        if plausible >= 2 {
            return Ok(stay(StayReason::Ambiguous));
        }
        let Some((to, best_score)) = best else {
            return Ok(stay(StayReason::NoCandidate));
        };
        let margin = best_score - as_typed;
        if margin <= 0.0 || margin < self.config.switch_threshold {
            return Ok(stay(StayReason::NotBetterEnough));
        }
        let confidence = margin.clamp(0.0, 1.0);
        tracing::trace!(%to, confidence, "switch recommended");
        Ok(SwitchVerdict::Switch { to, confidence })
    }

    /// Chains [`Engine::evaluate_switch`] and [`Engine::remap`]: `None` when
    /// no switch is recommended, otherwise the recommended layout and the
    /// remapped token.
    pub fn correct_if_needed(
        &self,
        token: &str,
        current: LayoutId,
    ) -> Result<Option<(LayoutId, RemapResult)>, EngineError> {
        match self.evaluate_switch(token, current)? {
            SwitchVerdict::Stay => Ok(None),
            SwitchVerdict::Switch { to, .. } => {
                let remapped = self.remap(token, current, to)?;
                Ok(Some((to, remapped)))
            }
        }
    }
}
