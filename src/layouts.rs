//! Built-in layout tables for the ANSI form factor.
//!
//! Rows count down from the number row. Only glyphs that differ between the
//! two layouts are listed: digits and the punctuation shared by both (`!`,
//! `%`, parentheses, space) are deliberately absent and pass through remap
//! unchanged. Uppercase letters are not separate entries; the remapper folds
//! case on lookup and re-applies it to the output glyph.

use crate::layout::KeyPos;

const fn base(row: u8, col: u8) -> KeyPos {
    KeyPos::new(row, col)
}

const fn shift(row: u8, col: u8) -> KeyPos {
    KeyPos::shifted(row, col)
}

/// US QWERTY.
///
/// The shift plane carries only the number-row symbols and bracket/comparison
/// glyphs that sit on different keys in ЙЦУКЕН. `:` and `"` are left out on
/// purpose: ЙЦУКЕН produces them on the number row, not on the home row, so a
/// home-row entry here would make the glyph remap one-way.
#[rustfmt::skip]
pub const EN_US: &[(KeyPos, char)] = &[
    (base(0, 0), '`'),
    (base(1, 0), 'q'), (base(1, 1), 'w'), (base(1, 2), 'e'), (base(1, 3), 'r'),
    (base(1, 4), 't'), (base(1, 5), 'y'), (base(1, 6), 'u'), (base(1, 7), 'i'),
    (base(1, 8), 'o'), (base(1, 9), 'p'), (base(1, 10), '['), (base(1, 11), ']'),
    (base(2, 0), 'a'), (base(2, 1), 's'), (base(2, 2), 'd'), (base(2, 3), 'f'),
    (base(2, 4), 'g'), (base(2, 5), 'h'), (base(2, 6), 'j'), (base(2, 7), 'k'),
    (base(2, 8), 'l'), (base(2, 9), ';'), (base(2, 10), '\''),
    (base(3, 0), 'z'), (base(3, 1), 'x'), (base(3, 2), 'c'), (base(3, 3), 'v'),
    (base(3, 4), 'b'), (base(3, 5), 'n'), (base(3, 6), 'm'), (base(3, 7), ','),
    (base(3, 8), '.'), (base(3, 9), '/'),
    (shift(0, 2), '@'), (shift(0, 3), '#'), (shift(0, 4), '$'),
    (shift(0, 6), '^'), (shift(0, 7), '&'),
    (shift(1, 10), '{'), (shift(1, 11), '}'),
    (shift(3, 7), '<'), (shift(3, 8), '>'), (shift(3, 9), '?'),
];

/// Russian ЙЦУКЕН.
#[rustfmt::skip]
pub const RU_RU: &[(KeyPos, char)] = &[
    (base(0, 0), 'ё'),
    (base(1, 0), 'й'), (base(1, 1), 'ц'), (base(1, 2), 'у'), (base(1, 3), 'к'),
    (base(1, 4), 'е'), (base(1, 5), 'н'), (base(1, 6), 'г'), (base(1, 7), 'ш'),
    (base(1, 8), 'щ'), (base(1, 9), 'з'), (base(1, 10), 'х'), (base(1, 11), 'ъ'),
    (base(2, 0), 'ф'), (base(2, 1), 'ы'), (base(2, 2), 'в'), (base(2, 3), 'а'),
    (base(2, 4), 'п'), (base(2, 5), 'р'), (base(2, 6), 'о'), (base(2, 7), 'л'),
    (base(2, 8), 'д'), (base(2, 9), 'ж'), (base(2, 10), 'э'),
    (base(3, 0), 'я'), (base(3, 1), 'ч'), (base(3, 2), 'с'), (base(3, 3), 'м'),
    (base(3, 4), 'и'), (base(3, 5), 'т'), (base(3, 6), 'ь'), (base(3, 7), 'б'),
    (base(3, 8), 'ю'), (base(3, 9), '.'),
    (shift(0, 2), '"'), (shift(0, 3), '№'), (shift(0, 4), ';'),
    (shift(0, 6), ':'), (shift(0, 7), '?'),
    (shift(3, 9), ','),
];
