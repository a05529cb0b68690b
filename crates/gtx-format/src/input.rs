//! Question input formatter
//!
//! Each [`InputType`] has a table of default option values. Formatting an
//! input fills every option the input leaves unspecified from its type's
//! table, then normalizes the input's text-bearing fields (prompt, option
//! labels, placeholder) into multilingual form. Inputs of an unknown type
//! are returned untouched.

use gtx_schema::{InputType, LanguageConfig, Validator};
use serde_json::{Map, Value, json};

use crate::formatter::{Formatter, format_items, into_object, merge, update};
use crate::text::{normalize_nullable_text, normalize_text};
use crate::{Error, Result};

/// Default option values for an input type.
pub fn input_defaults(kind: InputType) -> Map<String, Value> {
    let defaults: Vec<(&str, Value)> = match kind {
        InputType::DropdownList => vec![
            ("options", Value::Null),
            ("prompt", Value::Null),
            ("size", json!(1)),
        ],
        InputType::MultipleOption => vec![
            ("options", Value::Null),
            ("enable-multiple-choices", json!(false)),
            ("enable-other-option", json!(true)),
            ("enable-illustrations", json!(false)),
            ("size", json!(8)),
        ],
        InputType::Text => vec![
            ("enable-long-text", json!(false)),
            ("min-length", json!(0)),
            ("max-length", json!(InputType::TEXT_MAX_LENGTH)),
            ("placeholder", Value::Null),
        ],
        InputType::Number => vec![
            ("min-value", Value::Null),
            ("max-value", Value::Null),
            ("placeholder", Value::Null),
        ],
        InputType::Datetime => vec![
            ("date-format", json!("yyyy/MM/dd")),
            ("time-format", json!("HH:mm:ss")),
            ("from", Value::Null),
            ("to", Value::Null),
            ("disable-date", json!(false)),
            ("disable-time", json!(false)),
        ],
        InputType::Url => vec![("max-length", json!(256)), ("placeholder", Value::Null)],
        InputType::Geotagging => vec![("location", Value::Null)],
    };

    defaults
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

impl<V: Validator> Formatter<V> {
    /// Format a question's input, written in `language`.
    pub fn format_question_input(
        &self,
        input: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| v.check_question_input(&input, language))?;

        let input = into_object(input, "input")?;
        let kind = match input.get("type") {
            Some(Value::String(tag)) => InputType::from_tag(tag).ok_or_else(|| tag.clone()),
            Some(other) => return Err(Error::type_mismatch("input.type", "a string", other)),
            None => {
                return Err(Error::type_mismatch("input.type", "a string", &Value::Null));
            }
        };
        let kind = match kind {
            Ok(kind) => kind,
            Err(tag) => {
                tracing::warn!(input_type = %tag, "Leaving input of unknown type unformatted");
                return Ok(Value::Object(input));
            }
        };

        let input = merge(input_defaults(kind), input);
        tracing::trace!(input_type = %kind, "Injected input defaults");

        normalize_input(kind, input, &language.default).map(Value::Object)
    }
}

/// Normalize the text-bearing fields of an input of type `kind`.
fn normalize_input(
    kind: InputType,
    mut input: Map<String, Value>,
    language_code: &str,
) -> Result<Map<String, Value>> {
    match kind {
        InputType::DropdownList => {
            update(&mut input, "prompt", |prompt| {
                normalize_nullable_text(prompt, language_code, "input.prompt")
            })?;
            update(&mut input, "options", |options| {
                normalize_options(options, language_code)
            })?;
        }
        InputType::MultipleOption => {
            update(&mut input, "options", |options| {
                normalize_options(options, language_code)
            })?;
        }
        InputType::Text | InputType::Number | InputType::Url => {
            update(&mut input, "placeholder", |placeholder| {
                normalize_nullable_text(placeholder, language_code, "input.placeholder")
            })?;
        }
        InputType::Datetime | InputType::Geotagging => {}
    }
    Ok(input)
}

fn normalize_options(options: Value, language_code: &str) -> Result<Value> {
    if options.is_null() {
        return Ok(options);
    }
    format_items(options, "input.options", |option| {
        let mut option = into_object(option, "input.options[]")?;
        update(&mut option, "label", |label| {
            normalize_text(label, language_code, "input.options[].label")
        })?;
        Ok(Value::Object(option))
    })
}
