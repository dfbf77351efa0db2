use thiserror::Error;

use crate::layout::LayoutId;

/// Errors reported by the engine.
///
/// The taxonomy is deliberately small. Remapping and switch evaluation over
/// registered layouts cannot fail for textual reasons: characters with no
/// position in a table degrade to pass-through instead of erroring, because
/// typed text legitimately mixes scripts, digits and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A layout id was referenced that was never registered. Caller error;
    /// hosts should treat it as an integration bug, not a runtime condition.
    #[error("unknown {0}")]
    UnknownLayout(LayoutId),

    /// The same layout id was registered twice. Re-registering a changed
    /// table is not supported; use a fresh id.
    #[error("{0} registered twice")]
    DuplicateLayout(LayoutId),

    /// A layout table maps two key positions to the same glyph, so its
    /// inverse (glyph to position) is not well defined.
    #[error("{layout} table maps two keys to {glyph:?}")]
    MalformedTable { layout: LayoutId, glyph: char },
}
