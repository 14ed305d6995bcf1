//! Caller-facing request shape and input-shape validation (§6, §7).

use serde::Deserialize;

use crate::error::Error;

/// The four required string inputs to a validation (§6).
#[derive(Clone, Debug, Deserialize)]
pub struct ValidationRequest {
    pub kanji_sei: String,
    pub kanji_mei: String,
    pub romaji_sei: String,
    pub romaji_mei: String,
}

impl ValidationRequest {
    /// Reject missing or empty fields before core invocation (§7).
    pub fn validate_shape(&self) -> Result<(), Error> {
        for (field, value) in [
            ("kanji_sei", &self.kanji_sei),
            ("kanji_mei", &self.kanji_mei),
            ("romaji_sei", &self.romaji_sei),
            ("romaji_mei", &self.romaji_mei),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidInput { field: field.to_string() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ValidationRequest {
        ValidationRequest {
            kanji_sei: "山田".to_string(),
            kanji_mei: "太郎".to_string(),
            romaji_sei: "YAMADA".to_string(),
            romaji_mei: "TARO".to_string(),
        }
    }

    #[test]
    fn accepts_complete_request() {
        assert!(request().validate_shape().is_ok());
    }

    #[test]
    fn rejects_empty_field() {
        let mut req = request();
        req.romaji_mei = "   ".to_string();
        assert!(matches!(req.validate_shape(), Err(Error::InvalidInput { field }) if field == "romaji_mei"));
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{"kanji_sei":"山田","kanji_mei":"太郎","romaji_sei":"YAMADA","romaji_mei":"TARO"}"#;
        let req: ValidationRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate_shape().is_ok());
    }
}
