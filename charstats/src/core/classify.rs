// src/core/classify.rs
//! Fixed ASCII classification table.
//!
//! Bytes above 0x7F only ever count towards `Total`. Whitespace and control
//! are disjoint: `\t`, `\n`, `\v`, `\f` and `\r` are whitespace only.

use crate::models::Category;

const VERTICAL_TAB: u8 = 0x0B;

/// Space, `\t`, `\n`, `\v`, `\f` and `\r`.
#[inline]
#[must_use]
pub const fn is_whitespace(byte: u8) -> bool {
    byte == VERTICAL_TAB || byte.is_ascii_whitespace()
}

/// Returns whether `byte` is counted in `category`.
#[inline]
#[must_use]
pub const fn matches(category: Category, byte: u8) -> bool {
    match category {
        Category::Total => true,
        Category::Alpha => byte.is_ascii_alphabetic(),
        Category::Lowercase => byte.is_ascii_lowercase(),
        Category::Uppercase => byte.is_ascii_uppercase(),
        Category::Numeric => byte.is_ascii_digit(),
        Category::Punctuation => byte.is_ascii_punctuation(),
        Category::Whitespace => is_whitespace(byte),
        Category::Control => byte.is_ascii_control() && !is_whitespace(byte),
    }
}

/// Every category `byte` belongs to, `Total` first.
pub fn categories_of(byte: u8) -> impl Iterator<Item = Category> {
    Category::ALL
        .into_iter()
        .filter(move |category| matches(*category, byte))
}
