//! Shared checks for text and scalar fields

use serde_json::{Map, Value};

use crate::error::{Rejection, reject};
use crate::{LanguageConfig, Verdict};

pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, Rejection> {
    match value {
        Value::Object(object) => Ok(object),
        other => reject!("The {what} must be an object, not {}.", type_name(other)),
    }
}

/// Text is either a plain string or a mapping from available language
/// codes to strings.
pub(crate) fn check_text(value: &Value, language: &LanguageConfig, what: &str) -> Verdict {
    match value {
        Value::String(text) if text.trim().is_empty() => reject!("The {what} is empty."),
        Value::String(_) => Ok(()),
        Value::Object(localized) if localized.is_empty() => {
            reject!("The {what} has no translations.")
        }
        Value::Object(localized) => {
            for (code, text) in localized {
                if !language.is_available(code) {
                    reject!(
                        "The {what} has a translation for '{code}', which is not an available language."
                    );
                }
                if !text.is_string() {
                    reject!("The {what}'s '{code}' translation must be a string.");
                }
            }
            Ok(())
        }
        other => reject!("The {what} must be a string or an object, not {}.", type_name(other)),
    }
}

/// Like [`check_text`] but `null` is accepted.
pub(crate) fn check_nullable_text(value: &Value, language: &LanguageConfig, what: &str) -> Verdict {
    match value {
        Value::Null => Ok(()),
        value => check_text(value, language, what),
    }
}

pub(crate) fn check_bool(object: &Map<String, Value>, key: &str, what: &str) -> Verdict {
    match object.get(key) {
        None | Some(Value::Bool(_)) => Ok(()),
        Some(_) => reject!("The {what}'s '{key}' field must be a boolean."),
    }
}

pub(crate) fn check_string(object: &Map<String, Value>, key: &str, what: &str) -> Verdict {
    match object.get(key) {
        None | Some(Value::String(_)) => Ok(()),
        Some(_) => reject!("The {what}'s '{key}' field must be a string."),
    }
}

pub(crate) fn check_nullable_string(object: &Map<String, Value>, key: &str, what: &str) -> Verdict {
    match object.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => reject!("The {what}'s '{key}' field must be a string or null."),
    }
}

/// Read an optional integer field that must be at least `minimum`.
pub(crate) fn integer_at_least(
    object: &Map<String, Value>,
    key: &str,
    minimum: i64,
    what: &str,
) -> Result<Option<i64>, Rejection> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => match value.as_i64() {
            Some(number) if number >= minimum => Ok(Some(number)),
            _ => reject!("The {what}'s '{key}' field must be an integer no less than {minimum}."),
        },
    }
}

/// Read an optional field that must be `null` or a number.
pub(crate) fn nullable_number(
    object: &Map<String, Value>,
    key: &str,
    what: &str,
) -> Result<Option<f64>, Rejection> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(_) => reject!("The {what}'s '{key}' field must be a number or null."),
    }
}

/// Article-prefixed name of a JSON value's type, for messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
