//! [Hepburn romanization](https://en.wikipedia.org/wiki/Hepburn_romanization)
//! of a kana string into the set of passport-style variants it permits
//! (§4.2).

mod table;

use std::collections::HashSet;

use crate::kana::normalize_kana;

const SOKUON: char = 'っ';
const HATSUON: char = 'ん';
const PROLONGED_SOUND_MARK: char = 'ー';

/// A segment is the small set of acceptable romaji variants at one position
/// in the scan. Most segments are singletons; long-vowel rules are the only
/// thing that grows them.
type Segment = Vec<String>;

/// Converts hiragana/katakana to the set of Hepburn romanizations a
/// passport-style transliteration may use.
#[derive(Clone, Debug, bon::Builder)]
pub struct HepburnRomanizer {
    /// Maximum number of distinct romanizations returned by [`romanize`](Self::romanize).
    #[builder(default = HepburnRomanizer::DEFAULT_BUDGET)]
    budget: usize,
}

impl HepburnRomanizer {
    pub const DEFAULT_BUDGET: usize = 10;

    /// Cap on the number of candidate strings kept in flight while
    /// enumerating the Cartesian product of segments, independent of
    /// `budget`. Segments are already clipped to at most three variants
    /// once the product would exceed `budget`, so this only guards against
    /// pathological inputs with many long-vowel segments in a row.
    const COMBINE_SAFETY_CAP: usize = 256;

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Romanize a kana string to the ordered, deduplicated list of
    /// acceptable Hepburn spellings (§4.2).
    pub fn romanize(&self, kana: &str) -> Vec<String> {
        if kana.is_empty() {
            return vec![String::new()];
        }

        let normalized = normalize_kana(kana);
        let chars: Vec<char> = normalized.chars().collect();

        let mut segments = self.segment(&chars);
        apply_long_vowel_pass(&mut segments);
        self.combine(segments)
    }

    fn segment(&self, chars: &[char]) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];

            if c == SOKUON {
                let variant = match peek_single(chars, i + 1) {
                    Some(next) if next.starts_with("CH") => "T".to_string(),
                    // Open question (§9): if the following syllable begins with
                    // a vowel or `Y`, this still emits its literal first letter.
                    Some(next) => next.chars().next().unwrap().to_string(),
                    None => "T".to_string(),
                };
                segments.push(vec![variant]);
                i += 1;
                continue;
            }

            if c == HATSUON {
                let variant = match peek_single(chars, i + 1) {
                    Some(next) if matches!(next.as_bytes()[0], b'B' | b'M' | b'P') => "M",
                    _ => "N",
                };
                segments.push(vec![variant.to_string()]);
                i += 1;
                continue;
            }

            if c == PROLONGED_SOUND_MARK {
                if let Some(last) = segments.last_mut() {
                    *last = extend_with_long_vowel(last);
                }
                i += 1;
                continue;
            }

            if i + 1 < chars.len() {
                let two: String = chars[i..i + 2].iter().collect();
                if let Some(romaji) = table::two_scalar(&two) {
                    segments.push(vec![romaji.to_string()]);
                    i += 2;
                    continue;
                }
            }

            match table::one_scalar(c) {
                Some(romaji) => segments.push(vec![romaji.to_string()]),
                // Unknown scalar: pass through as a literal (§4.2.5).
                None => segments.push(vec![c.to_string()]),
            }
            i += 1;
        }
        segments
    }

    fn combine(&self, segments: Vec<Segment>) -> Vec<String> {
        if segments.is_empty() {
            return vec![String::new()];
        }

        let mut unique_segments: Vec<Segment> =
            segments.into_iter().map(dedup_preserve).collect();

        let total: usize = unique_segments.iter().map(|s| s.len().max(1)).product();
        if total > self.budget {
            for seg in unique_segments.iter_mut() {
                if seg.len() > 3 {
                    seg.truncate(3);
                }
            }
        }

        let mut candidates: Vec<String> = vec![String::new()];
        for seg in &unique_segments {
            let mut next = Vec::with_capacity(
                (candidates.len() * seg.len()).min(Self::COMBINE_SAFETY_CAP),
            );
            'fill: for prefix in &candidates {
                for variant in seg {
                    next.push(format!("{prefix}{variant}"));
                    if next.len() >= Self::COMBINE_SAFETY_CAP {
                        break 'fill;
                    }
                }
            }
            candidates = next;
        }

        let mut deduped = dedup_preserve(candidates);
        deduped.truncate(self.budget);
        deduped
    }
}

impl Default for HepburnRomanizer {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Peek the romaji that would be emitted for the syllable starting at
/// `idx`, without advancing the scan. Used by the sokuon/hatsuon rules to
/// decide what consonant to geminate or nasalize into.
fn peek_single(chars: &[char], idx: usize) -> Option<&'static str> {
    if idx >= chars.len() {
        return None;
    }
    if idx + 1 < chars.len() {
        let two: String = chars[idx..idx + 2].iter().collect();
        if let Some(romaji) = table::two_scalar(&two) {
            return Some(romaji);
        }
    }
    table::one_scalar(chars[idx])
}

/// Last vowel letter in an uppercase ASCII romaji string, scanning from the
/// end (§4.2.2, §4.2.3).
fn last_vowel(romaji: &str) -> Option<char> {
    romaji.chars().rev().find(|c| matches!(c, 'A' | 'I' | 'U' | 'E' | 'O'))
}

/// The `OH` variant (§4.2.3), valid only when the segment's last vowel is
/// `O`.
fn oh_variant(variant: &str, vowel: char) -> Option<String> {
    if vowel != 'O' {
        return None;
    }
    Some(if variant.ends_with('O') {
        format!("{}OH", &variant[..variant.len() - 1])
    } else {
        format!("{variant}H")
    })
}

/// Handle the prolonged-sound mark (§4.2.2): extend each variant of the
/// previous segment with the long-vowel variants keyed on its final vowel.
/// Mutually exclusive with the post-pass (§9 open question) because the
/// resulting segment is no longer a singleton.
fn extend_with_long_vowel(segment: &[String]) -> Segment {
    let mut extended = Vec::new();
    for variant in segment {
        if variant.is_empty() {
            continue;
        }
        let Some(vowel) = last_vowel(variant) else {
            continue;
        };
        extended.push(variant.clone());
        extended.push(format!("{variant}{vowel}"));
        if let Some(oh) = oh_variant(variant, vowel) {
            extended.push(oh);
        }
    }
    if extended.is_empty() {
        segment.to_vec()
    } else {
        dedup_preserve(extended)
    }
}

/// Post-pass long-vowel rewrite over adjacent singleton segments (§4.2.3).
fn apply_long_vowel_pass(segments: &mut Vec<Segment>) {
    let mut result = Vec::with_capacity(segments.len());
    let mut i = 0;
    while i < segments.len() {
        if i + 1 < segments.len() && segments[i].len() == 1 && segments[i + 1].len() == 1 {
            let prev = &segments[i][0];
            let next = segments[i + 1][0].as_str();

            if prev.ends_with('O') && next == "O" {
                let oh = oh_variant(prev, 'O').expect("prev ends with O");
                result.push(dedup_preserve(vec![prev.clone(), format!("{prev}O"), oh]));
                i += 2;
                continue;
            }
            if prev.ends_with('O') && next == "U" {
                result.push(vec![prev.clone(), format!("{prev}U")]);
                i += 2;
                continue;
            }
            if prev.ends_with('U') && next == "U" {
                result.push(vec![prev.clone(), format!("{prev}U")]);
                i += 2;
                continue;
            }
            if prev.ends_with('I') && next == "I" {
                result.push(vec![prev.clone(), format!("{prev}I")]);
                i += 2;
                continue;
            }
        }
        result.push(segments[i].clone());
        i += 1;
    }
    *segments = result;
}

fn dedup_preserve(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romanizer() -> HepburnRomanizer {
        HepburnRomanizer::default()
    }

    #[test]
    fn empty_input() {
        assert_eq!(romanizer().romanize(""), vec![""]);
    }

    #[test]
    fn basic_names() {
        assert!(romanizer().romanize("やまだ").contains(&"YAMADA".to_string()));
        assert!(romanizer().romanize("たなか").contains(&"TANAKA".to_string()));
        assert!(romanizer().romanize("すずき").contains(&"SUZUKI".to_string()));
    }

    #[test]
    fn special_single_scalars() {
        assert!(romanizer().romanize("し").contains(&"SHI".to_string()));
        assert!(romanizer().romanize("ち").contains(&"CHI".to_string()));
        assert!(romanizer().romanize("つ").contains(&"TSU".to_string()));
        assert!(romanizer().romanize("ふ").contains(&"FU".to_string()));
    }

    #[test]
    fn youon() {
        assert!(romanizer().romanize("しゃ").contains(&"SHA".to_string()));
        assert!(romanizer().romanize("ちゅ").contains(&"CHU".to_string()));
        assert!(romanizer().romanize("じょ").contains(&"JO".to_string()));
    }

    #[test]
    fn sokuon_gemination() {
        let results = romanizer().romanize("いっぱい");
        assert!(results.iter().any(|r| r.contains("PP")));
    }

    #[test]
    fn sokuon_before_chi_becomes_tchi() {
        let results = romanizer().romanize("まっちゃ");
        assert!(results.iter().any(|r| r.contains("TCHA")));
    }

    #[test]
    fn hatsuon_before_bmp() {
        assert!(romanizer().romanize("なんば").contains(&"NAMBA".to_string()));
    }

    #[test]
    fn hatsuon_default_n() {
        assert!(romanizer().romanize("けんじ").contains(&"KENJI".to_string()));
    }

    #[test]
    fn long_vowel_oo() {
        let results = romanizer().romanize("おおの");
        assert!(["ONO", "OHNO", "OONO"].iter().any(|v| results.contains(&v.to_string())));
    }

    #[test]
    fn long_vowel_ou() {
        let results = romanizer().romanize("さとう");
        assert!(results.contains(&"SATO".to_string()) || results.contains(&"SATOU".to_string()));
    }

    #[test]
    fn long_vowel_uu() {
        let results = romanizer().romanize("ゆう");
        assert!(results.contains(&"YU".to_string()) || results.contains(&"YUU".to_string()));
    }

    #[test]
    fn katakana_is_normalized_first() {
        assert_eq!(romanizer().romanize("ヤマダ"), romanizer().romanize("やまだ"));
    }

    #[test]
    fn prolonged_mark_and_post_pass_are_exclusive() {
        // あーい: the mark consumes the あ segment immediately, so it is no
        // longer a singleton and the い/い post-pass rule can't also fire.
        let results = romanizer().romanize("あーい");
        assert!(results.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn output_is_uppercase_ascii_only() {
        for r in romanizer().romanize("やまだたろう") {
            assert!(r.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn output_respects_budget() {
        let small = HepburnRomanizer::builder().budget(2).build();
        assert!(small.romanize("おおおおう").len() <= 2);
    }

    #[test]
    fn unknown_scalar_passes_through() {
        assert_eq!(romanizer().romanize("a"), vec!["a".to_string()]);
    }
}
