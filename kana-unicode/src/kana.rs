//! Range tests for the kana blocks.
//!
//! Katakana occupies U+30A1..=U+30F6; each scalar maps to hiragana by
//! subtracting 0x60, the same offset used throughout the Unicode kana
//! blocks. The prolonged-sound mark `ー` (U+30FC) sits just past that range
//! and is katakana-only, so it is tested separately.

pub const KATAKANA_START: char = '\u{30A1}';
pub const KATAKANA_END: char = '\u{30F6}';
pub const HIRAGANA_START: char = '\u{3041}';

pub const PROLONGED_SOUND_MARK: char = 'ー';

const KATAKANA_TO_HIRAGANA_OFFSET: u32 = 0x60;

/// `true` if `c` lies in the katakana block that has a direct hiragana
/// counterpart (excludes the prolonged-sound mark and small katakana-only
/// extensions outside this range).
#[inline]
pub fn is_foldable_katakana(c: char) -> bool {
    (KATAKANA_START..=KATAKANA_END).contains(&c)
}

/// Translate a single katakana scalar to its hiragana counterpart. Returns
/// `c` unchanged if it is not in the foldable katakana range.
#[inline]
pub fn fold_katakana(c: char) -> char {
    if is_foldable_katakana(c) {
        char::from_u32(c as u32 - KATAKANA_TO_HIRAGANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}
