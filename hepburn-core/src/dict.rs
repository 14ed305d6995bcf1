//! Dictionary store: monolithic given-name/single-kanji tables loaded
//! eagerly, surnames loaded lazily per code-point shard (§4.3).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Deserialize;

use crate::error::{DictIoSource, Error};

/// Kanji (or single scalar, as a string) → candidate kana readings.
pub type ReadingMap = HashMap<String, Vec<String>>;

/// Construction parameters for [`DictionaryStore`] (§4.6.3).
#[derive(Clone, Debug, bon::Builder)]
pub struct DictionaryConfig {
    /// Directory containing `name_readings.json` and `surnames/`.
    root: PathBuf,
    /// Variant cap used by the decomposition fallback (§4.2.4).
    #[builder(default = DictionaryConfig::DEFAULT_ROMANIZE_BUDGET)]
    romanize_budget: usize,
}

impl DictionaryConfig {
    pub const DEFAULT_ROMANIZE_BUDGET: usize = 10;

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn romanize_budget(&self) -> usize {
        self.romanize_budget
    }
}

#[derive(Deserialize)]
struct NameReadings {
    #[serde(default)]
    given_names: ReadingMap,
    #[serde(default)]
    single_kanji: HashMap<char, Vec<String>>,
}

/// Lazy, thread-safe dictionary of kanji → kana readings (§4.3, §5).
#[derive(Debug)]
pub struct DictionaryStore {
    root: PathBuf,
    given_names: ReadingMap,
    single_kanji: HashMap<char, Vec<String>>,
    shard_cache: RwLock<HashMap<String, ReadingMap>>,
    decomposition_budget: usize,
}

impl DictionaryStore {
    /// Load the monolithic tables from `<root>/name_readings.json`. Shards
    /// under `<root>/surnames/` are loaded lazily on first lookup.
    pub fn open(config: &DictionaryConfig) -> Result<Self, Error> {
        let root = config.root().to_path_buf();
        let monolith_path = root.join("name_readings.json");

        let contents = fs::read_to_string(&monolith_path).map_err(|source| Error::DictIo {
            path: monolith_path.clone(),
            source: DictIoSource::Read(source),
        })?;
        let parsed: NameReadings =
            serde_json::from_str(&contents).map_err(|source| Error::DictIo {
                path: monolith_path.clone(),
                source: DictIoSource::Parse(source),
            })?;

        Ok(Self {
            root,
            given_names: parsed.given_names,
            single_kanji: parsed.single_kanji,
            shard_cache: RwLock::new(HashMap::new()),
            decomposition_budget: config.romanize_budget(),
        })
    }

    /// Variant cap for the single-kanji decomposition fallback (§4.2.4,
    /// §4.4 step 3), sourced from the [`DictionaryConfig`] this store was
    /// opened with.
    pub fn decomposition_budget(&self) -> usize {
        self.decomposition_budget
    }

    /// Exact lookup in the monolithic given-names table.
    pub fn given_names_for(&self, kanji: &str) -> Option<&[String]> {
        self.given_names.get(kanji).map(Vec::as_slice)
    }

    /// Exact lookup in the monolithic single-kanji table.
    pub fn single_kanji_for(&self, kanji: char) -> Option<&[String]> {
        self.single_kanji.get(&kanji).map(Vec::as_slice)
    }

    /// Shard-based lookup for a surname. Loads and caches the shard on a
    /// cache miss; a missing shard file caches as an empty map rather than
    /// erroring (§4.3).
    pub fn surnames_for(&self, kanji: &str) -> Result<Vec<String>, Error> {
        let Some(first) = kanji.chars().next() else {
            return Ok(Vec::new());
        };
        let key = shard_key_for(first);

        if let Some(map) = self.shard_cache.read().unwrap().get(&key) {
            tracing::debug!(shard = %key, "surname shard cache hit");
            return Ok(map.get(kanji).cloned().unwrap_or_default());
        }

        let shard = self.load_shard(&key)?;
        let readings = shard.get(kanji).cloned().unwrap_or_default();

        let mut cache = self.shard_cache.write().unwrap();
        cache.entry(key).or_insert(shard);

        Ok(readings)
    }

    fn load_shard(&self, key: &str) -> Result<ReadingMap, Error> {
        let path = self.root.join("surnames").join(format!("{key}.json"));

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(shard = %key, "surname shard file missing, caching as empty");
                return Ok(ReadingMap::new());
            }
            Err(source) => {
                return Err(Error::DictIo {
                    path,
                    source: DictIoSource::Read(source),
                });
            }
        };

        tracing::info!(shard = %key, "loading surname shard");
        serde_json::from_str(&contents).map_err(|source| Error::DictIo {
            path,
            source: DictIoSource::Parse(source),
        })
    }
}

/// Shard key for `kanji`'s first scalar: uppercase 4-hex-digit code point.
pub fn shard_key_for(kanji: char) -> String {
    format!("{:04X}", kanji as u32)
}
