//! Name matcher: composes the resolver and romanizer into a per-component
//! verdict and an aggregate result (§4.5).

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;

use crate::dict::DictionaryStore;
use crate::error::Error;
use crate::resolver::ReadingResolver;
use crate::romaji::HepburnRomanizer;

/// Verdict for one name component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Ok,
    Mismatch,
    UnknownReading,
}

/// Result for one kanji/romaji pair (§6).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct NameCheckResult {
    pub status: CheckStatus,
    pub input: String,
    pub expected_readings: Vec<String>,
    pub expected_romaji: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Aggregate validation result across both name components (§6).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub sei_check: NameCheckResult,
    pub mei_check: NameCheckResult,
    pub warnings: Vec<String>,
}

/// Composes the reading resolver and romanizer to validate a kanji name
/// against its romanized rendition.
#[derive(Clone)]
pub struct NameMatcher {
    resolver: ReadingResolver,
    romanizer: HepburnRomanizer,
}

impl NameMatcher {
    pub fn new(store: Arc<DictionaryStore>, romanizer: HepburnRomanizer) -> Self {
        let decomposition_budget = store.decomposition_budget();
        let resolver = ReadingResolver::new(store, decomposition_budget);
        Self { resolver, romanizer }
    }

    /// Validate a full kanji name against its romanized rendition (§4.5).
    pub fn validate(
        &self,
        kanji_sei: &str,
        kanji_mei: &str,
        romaji_sei: &str,
        romaji_mei: &str,
    ) -> Result<ValidationResult, Error> {
        let sei_check = self.check_name(kanji_sei, romaji_sei, true)?;
        let mei_check = self.check_name(kanji_mei, romaji_mei, false)?;

        let mut warnings = Vec::new();
        if sei_check.status == CheckStatus::UnknownReading {
            warnings.push(format!("reading for \"{kanji_sei}\" could not be confirmed"));
        }
        if mei_check.status == CheckStatus::UnknownReading {
            warnings.push(format!("reading for \"{kanji_mei}\" could not be confirmed"));
        }

        let is_valid = matches!(sei_check.status, CheckStatus::Ok | CheckStatus::UnknownReading)
            && matches!(mei_check.status, CheckStatus::Ok | CheckStatus::UnknownReading);

        Ok(ValidationResult { is_valid, sei_check, mei_check, warnings })
    }

    fn check_name(&self, kanji: &str, romaji: &str, is_surname: bool) -> Result<NameCheckResult, Error> {
        let normalized = normalize_romaji(romaji);
        let (readings, found_in_dict) = self.resolver.get_readings(kanji, is_surname)?;

        if readings.is_empty() {
            return Ok(NameCheckResult {
                status: CheckStatus::UnknownReading,
                input: normalized,
                expected_readings: Vec::new(),
                expected_romaji: Vec::new(),
                message: Some("reading not in dictionary".to_string()),
            });
        }

        let mut expected_romaji = Vec::new();
        let mut seen = HashSet::new();
        for reading in &readings {
            for candidate in self.romanizer.romanize(reading) {
                if seen.insert(candidate.clone()) {
                    expected_romaji.push(candidate);
                }
            }
        }

        let (status, message) = if expected_romaji.contains(&normalized) {
            (CheckStatus::Ok, None)
        } else if found_in_dict {
            (CheckStatus::Mismatch, None)
        } else {
            (
                CheckStatus::UnknownReading,
                Some("reading inferred; correctness not guaranteed".to_string()),
            )
        };

        Ok(NameCheckResult { status, input: normalized, expected_readings: readings, expected_romaji, message })
    }
}

/// Uppercase, whitespace-stripped romaji for comparison (§4.5 step 1).
pub fn normalize_romaji(romaji: &str) -> String {
    romaji.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_uppercase()
}
