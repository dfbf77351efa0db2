//! Positional remapping between two layout tables.

use crate::registry::LayoutTable;

/// Outcome of remapping one token.
///
/// `passthrough[i]` is true when the `i`-th code point of `text` had no
/// position in the source table (or the target table had no glyph on that
/// key) and was copied through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapResult {
    pub text: String,
    pub passthrough: Vec<bool>,
}

impl RemapResult {
    /// True when every code point found a key in both tables.
    pub fn fully_mapped(&self) -> bool {
        self.passthrough.iter().all(|&p| !p)
    }
}

/// Translates `token` from `from`'s glyph space to `to`'s via shared key
/// positions.
///
/// Per code point:
/// - exact inverse lookup on the source table; on a miss, lowercase-fold and
///   retry, re-applying the original case to the target glyph
/// - a glyph with no source position, or a position the target table has no
///   entry for, is copied through unchanged and flagged
///
/// Runs in O(token length) time and allocation; both tables carry their
/// inverse maps precomputed.
pub(crate) fn remap_token(token: &str, from: &LayoutTable, to: &LayoutTable) -> RemapResult {
    // En->Ru output is commonly 2-byte UTF-8 Cyrillic; reserve for that case.
    let mut text = String::with_capacity(token.len().saturating_mul(2));
    let mut passthrough = Vec::with_capacity(token.len());
    for ch in token.chars() {
        match remap_char(ch, from, to) {
            Some((glyph, true)) => {
                for upper in glyph.to_uppercase() {
                    text.push(upper);
                    passthrough.push(false);
                }
            }
            Some((glyph, false)) => {
                text.push(glyph);
                passthrough.push(false);
            }
            None => {
                text.push(ch);
                passthrough.push(true);
            }
        }
    }
    RemapResult { text, passthrough }
}

/// Returns the target glyph and whether the original case must be re-applied,
/// or `None` for pass-through.
fn remap_char(ch: char, from: &LayoutTable, to: &LayoutTable) -> Option<(char, bool)> {
    if let Some(pos) = from.position_of(ch) {
        return to.glyph_at(pos).map(|glyph| (glyph, false));
    }
    let folded = ch.to_lowercase().next().unwrap_or(ch);
    if folded == ch {
        return None;
    }
    let pos = from.position_of(folded)?;
    let glyph = to.glyph_at(pos)?;
    Some((glyph, ch.is_uppercase()))
}
