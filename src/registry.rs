use std::collections::{BTreeMap, HashMap};

use crate::error::EngineError;
use crate::layout::{KeyPos, LayoutId, Script, is_cyrillic_letter, is_latin_letter};

/// Immutable key-position-to-glyph table for one layout.
///
/// The inverse map (glyph to position) is precomputed at construction so the
/// remapper gets O(1) lookups in both directions; injectivity of the forward
/// map is validated at the same time, which is what makes the inverse well
/// defined.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    glyphs: HashMap<KeyPos, char>,
    positions: HashMap<char, KeyPos>,
    script: Script,
}

impl LayoutTable {
    /// Builds a table from positional pairs.
    ///
    /// Fails with [`EngineError::MalformedTable`] when two positions carry the
    /// same glyph or one position carries two glyphs.
    pub fn from_pairs(layout: LayoutId, pairs: &[(KeyPos, char)]) -> Result<Self, EngineError> {
        let mut glyphs = HashMap::with_capacity(pairs.len());
        let mut positions = HashMap::with_capacity(pairs.len());
        for &(pos, glyph) in pairs {
            if positions.insert(glyph, pos).is_some() {
                return Err(EngineError::MalformedTable { layout, glyph });
            }
            if let Some(prev) = glyphs.insert(pos, glyph) {
                // One key, two glyphs: the same defect seen from the other side.
                return Err(EngineError::MalformedTable {
                    layout,
                    glyph: prev,
                });
            }
        }
        let script = classify_script(glyphs.values().copied());
        Ok(Self {
            glyphs,
            positions,
            script,
        })
    }

    /// Glyph this layout produces at `pos`, if the key carries one.
    pub fn glyph_at(&self, pos: KeyPos) -> Option<char> {
        self.glyphs.get(&pos).copied()
    }

    /// Physical key producing `glyph` under this layout (exact match).
    pub fn position_of(&self, glyph: char) -> Option<KeyPos> {
        self.positions.get(&glyph).copied()
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// All position/glyph pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (KeyPos, char)> + '_ {
        self.glyphs.iter().map(|(&pos, &glyph)| (pos, glyph))
    }
}

/// Letter majority over a table's glyph range decides its script.
fn classify_script(glyphs: impl Iterator<Item = char>) -> Script {
    let mut cyr = 0usize;
    let mut lat = 0usize;
    for ch in glyphs {
        if is_cyrillic_letter(ch) {
            cyr += 1;
        } else if is_latin_letter(ch) {
            lat += 1;
        }
    }
    match cyr.cmp(&lat) {
        std::cmp::Ordering::Greater => Script::Cyrillic,
        std::cmp::Ordering::Less => Script::Latin,
        std::cmp::Ordering::Equal => Script::Other,
    }
}

/// The process-wide set of layout tables.
///
/// Registration happens once, single threaded, before the engine is handed to
/// callers; there is no update-in-place. Lookups after that point are plain
/// reads over immutable data and need no locking.
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    // Ordered so candidate iteration in switch evaluation is deterministic.
    tables: BTreeMap<LayoutId, LayoutTable>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `table` under `layout`; each id can be registered once.
    pub fn register(&mut self, layout: LayoutId, table: LayoutTable) -> Result<(), EngineError> {
        if self.tables.contains_key(&layout) {
            return Err(EngineError::DuplicateLayout(layout));
        }
        self.tables.insert(layout, table);
        Ok(())
    }

    pub fn lookup(&self, layout: LayoutId) -> Result<&LayoutTable, EngineError> {
        self.tables
            .get(&layout)
            .ok_or(EngineError::UnknownLayout(layout))
    }

    /// Registered layout ids, ascending.
    pub fn layouts(&self) -> impl Iterator<Item = LayoutId> + '_ {
        self.tables.keys().copied()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (LayoutId, &LayoutTable)> {
        self.tables.iter().map(|(&id, table)| (id, table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
