//! Kanji reading resolution: dictionary lookup with cross-table fallback
//! and single-kanji decomposition (§4.4).

use std::sync::Arc;

use crate::dict::DictionaryStore;
use crate::error::Error;

/// Resolves kanji to candidate kana readings, backed by a shared
/// [`DictionaryStore`].
#[derive(Clone, Debug)]
pub struct ReadingResolver {
    store: Arc<DictionaryStore>,
    decomposition_budget: usize,
}

impl ReadingResolver {
    pub fn new(store: Arc<DictionaryStore>, decomposition_budget: usize) -> Self {
        Self { store, decomposition_budget }
    }

    /// Resolve `kanji` to `(readings, found_in_dict)` (§4.4). `found_in_dict`
    /// is `false` only when the readings came from decomposition fallback or
    /// no readings were found at all.
    pub fn get_readings(&self, kanji: &str, is_surname: bool) -> Result<(Vec<String>, bool), Error> {
        let primary = if is_surname {
            self.store.surnames_for(kanji)?
        } else {
            self.store.given_names_for(kanji).map(<[String]>::to_vec).unwrap_or_default()
        };
        if !primary.is_empty() {
            return Ok((primary, true));
        }

        let cross = if is_surname {
            self.store.given_names_for(kanji).map(<[String]>::to_vec).unwrap_or_default()
        } else {
            self.store.surnames_for(kanji)?
        };
        if !cross.is_empty() {
            tracing::debug!(%kanji, is_surname, "resolved via opposite-table cross-lookup");
            return Ok((cross, true));
        }

        if let Some(decomposed) = self.decompose(kanji) {
            tracing::warn!(%kanji, "inferred reading via single-kanji decomposition");
            return Ok((decomposed, false));
        }

        Ok((Vec::new(), false))
    }

    /// Cartesian product of each scalar's single-kanji readings, budget
    /// capped. Returns `None` if any scalar lacks an entry.
    fn decompose(&self, kanji: &str) -> Option<Vec<String>> {
        let mut per_scalar = Vec::with_capacity(kanji.chars().count());
        for c in kanji.chars() {
            per_scalar.push(self.store.single_kanji_for(c)?.to_vec());
        }

        let mut combined: Vec<String> = vec![String::new()];
        for readings in &per_scalar {
            let mut next = Vec::new();
            'fill: for prefix in &combined {
                for reading in readings {
                    next.push(format!("{prefix}{reading}"));
                    if next.len() >= self.decomposition_budget {
                        break 'fill;
                    }
                }
            }
            combined = next;
        }
        combined.truncate(self.decomposition_budget);
        Some(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictionaryConfig;
    use std::fs;

    fn store_with(dir: &std::path::Path) -> Arc<DictionaryStore> {
        fs::write(
            dir.join("name_readings.json"),
            r#"{
                "given_names": {"太郎": ["たろう"], "一郎": ["いちろう"]},
                "single_kanji": {"珍": ["ちん"], "奇": ["き", "くし"]}
            }"#,
        )
        .unwrap();
        fs::create_dir_all(dir.join("surnames")).unwrap();
        fs::write(
            dir.join("surnames").join(crate::dict::shard_key_for('山')),
            r#"{"山田": ["やまだ"]}"#,
        )
        .unwrap();
        fs::write(
            dir.join("surnames").join(crate::dict::shard_key_for('河')),
            r#"{"河野": ["こうの", "かわの"]}"#,
        )
        .unwrap();

        let config = DictionaryConfig::builder().root(dir.to_path_buf()).build();
        Arc::new(DictionaryStore::open(&config).unwrap())
    }

    #[test]
    fn primary_table_hit() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReadingResolver::new(store_with(dir.path()), 10);

        let (readings, found) = resolver.get_readings("山田", true).unwrap();
        assert_eq!(readings, vec!["やまだ".to_string()]);
        assert!(found);
    }

    #[test]
    fn cross_table_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReadingResolver::new(store_with(dir.path()), 10);

        // "太郎" only lives in given_names but we ask as a surname.
        let (readings, found) = resolver.get_readings("太郎", true).unwrap();
        assert_eq!(readings, vec!["たろう".to_string()]);
        assert!(found);
    }

    #[test]
    fn decomposition_fallback_when_absent_from_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReadingResolver::new(store_with(dir.path()), 10);

        let (readings, found) = resolver.get_readings("珍奇", true).unwrap();
        assert!(!found);
        assert!(readings.contains(&"ちんき".to_string()));
        assert!(readings.contains(&"ちんくし".to_string()));
    }

    #[test]
    fn unresolvable_kanji_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReadingResolver::new(store_with(dir.path()), 10);

        let (readings, found) = resolver.get_readings("未知", true).unwrap();
        assert!(readings.is_empty());
        assert!(!found);
    }

    #[test]
    fn decomposition_respects_budget() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = ReadingResolver::new(store_with(dir.path()), 1);

        let (readings, found) = resolver.get_readings("珍奇", true).unwrap();
        assert!(!found);
        assert_eq!(readings.len(), 1);
    }
}
