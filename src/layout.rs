use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a keyboard layout.
///
/// [`LayoutId::EN_US`] and [`LayoutId::RU_RU`] name the built-in tables;
/// hosts are free to mint further ids for their own layouts. An id carries no
/// meaning by convention: every call validates it against the registry and
/// reports [`crate::EngineError::UnknownLayout`] for ids never registered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct LayoutId(pub u16);

impl LayoutId {
    /// US QWERTY.
    pub const EN_US: Self = Self(0);
    /// Russian ЙЦУКЕН.
    pub const RU_RU: Self = Self(1);
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layout#{}", self.0)
    }
}

/// Position of a physical key on the shared keyboard grid, shift plane
/// included.
///
/// Rows count down from the number row (`row 0`), columns left to right.
/// The set of positions is identical across all layouts of one form factor;
/// this identity is what makes cross-layout remapping well defined.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
    pub shifted: bool,
}

impl KeyPos {
    /// Key on the base (unshifted) plane.
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            shifted: false,
        }
    }

    /// Key on the shift plane.
    pub const fn shifted(row: u8, col: u8) -> Self {
        Self {
            row,
            col,
            shifted: true,
        }
    }
}

/// Dominant script of a layout's glyph range.
///
/// Classified at registration by letter majority over the table's glyphs and
/// handed to the [`crate::WordScorer`] so scoring can pick the right alphabet.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Script {
    Latin,
    Cyrillic,
    /// No letter majority (symbol-only or mixed-script table).
    Other,
}

pub(crate) const fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub(crate) const fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, 'А'..='Я' | 'а'..='я' | 'Ё' | 'ё')
}
