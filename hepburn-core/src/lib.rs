/*!
Validates a Japanese kanji full name against its Hepburn-romanized
rendition.

A [`NameMatcher`] composes two subsystems:

- [`romaji::HepburnRomanizer`] produces the set of acceptable Hepburn
  spellings for a kana reading.
- [`resolver::ReadingResolver`], backed by a [`dict::DictionaryStore`],
  yields candidate kana readings for a kanji string.

## Usage
```no_run
use std::sync::Arc;
use hepburn_core::{DictionaryConfig, DictionaryStore, HepburnRomanizer, NameMatcher};

# fn main() -> Result<(), hepburn_core::Error> {
let config = DictionaryConfig::builder().root("dict".into()).build();
let store = Arc::new(DictionaryStore::open(&config)?);
let matcher = NameMatcher::new(store, HepburnRomanizer::default());

let result = matcher.validate("山田", "太郎", "YAMADA", "TARO")?;
assert!(result.is_valid);
# Ok(())
# }
```
*/

pub mod dict;
pub mod error;
pub mod kana;
pub mod matcher;
pub mod request;
pub mod resolver;
pub mod romaji;

pub use dict::{DictionaryConfig, DictionaryStore};
pub use error::Error;
pub use matcher::{CheckStatus, NameCheckResult, NameMatcher, ValidationResult};
pub use request::ValidationRequest;
pub use romaji::HepburnRomanizer;
