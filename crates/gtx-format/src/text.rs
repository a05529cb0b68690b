//! Multilingual text normalization
//!
//! Free text in a configuration is either a plain string or a mapping from
//! language codes to localized strings. Normalizing a plain string tags it
//! with a language code, producing the mapping form.

use gtx_schema::is_language_code;
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Pair `text` with `language_code`, producing `{language_code: text}`.
pub fn normalize(text: &str, language_code: &str) -> Result<Map<String, Value>> {
    if !is_language_code(language_code) {
        return Err(Error::InvalidLanguageCode {
            code: language_code.to_string(),
        });
    }

    let mut localized = Map::new();
    localized.insert(language_code.to_string(), Value::String(text.to_string()));
    Ok(localized)
}

/// Normalize a text field, leaving text already in mapping form unchanged.
pub fn normalize_text(text: Value, language_code: &str, path: &str) -> Result<Value> {
    match text {
        Value::String(text) => normalize(&text, language_code).map(Value::Object),
        localized @ Value::Object(_) => Ok(localized),
        other => Err(Error::type_mismatch(path, "a string or an object", &other)),
    }
}

/// Like [`normalize_text`] but `null` is kept as `null`.
pub fn normalize_nullable_text(text: Value, language_code: &str, path: &str) -> Result<Value> {
    match text {
        Value::Null => Ok(Value::Null),
        text => normalize_text(text, language_code, path),
    }
}
