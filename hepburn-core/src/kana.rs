//! Kana normalization: fold katakana to hiragana ahead of romanization.

use std::borrow::Cow;

use kana_unicode::kana::{fold_katakana, is_foldable_katakana};

/// Fold every katakana scalar in `s` to its hiragana counterpart. The
/// prolonged-sound mark and anything outside the katakana block pass
/// through unchanged.
///
/// Borrows when `s` contains no katakana, avoiding an allocation on the
/// common all-hiragana case.
pub fn normalize_kana(s: &str) -> Cow<'_, str> {
    if !s.chars().any(is_foldable_katakana) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().map(fold_katakana).collect())
}
