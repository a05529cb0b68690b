//! Question input rules, one set per input type

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::text::{
    as_object, check_bool, check_nullable_string, check_nullable_text, check_string, check_text,
    integer_at_least, nullable_number,
};
use crate::error::reject;
use crate::{InputType, LanguageConfig, Verdict};

pub(crate) fn check_input(input: &Value, language: &LanguageConfig) -> Verdict {
    let object = as_object(input, "input")?;

    let Some(tag) = object.get("type").and_then(Value::as_str) else {
        reject!("An input must have a string 'type'.");
    };
    let Some(kind) = InputType::from_tag(tag) else {
        tracing::debug!(input_type = tag, "Accepting input of unknown type");
        return Ok(());
    };

    let what = kind.as_str();
    match kind {
        InputType::DropdownList => {
            check_options(object, language, what)?;
            check_nullable_field(object, "prompt", language)?;
            integer_at_least(object, "size", 1, what)?;
        }
        InputType::MultipleOption => {
            check_options(object, language, what)?;
            for flag in [
                "enable-multiple-choices",
                "enable-other-option",
                "enable-illustrations",
            ] {
                check_bool(object, flag, what)?;
            }
            integer_at_least(object, "size", 1, what)?;
        }
        InputType::Text => {
            check_bool(object, "enable-long-text", what)?;
            let min = integer_at_least(object, "min-length", 0, what)?;
            let max = integer_at_least(object, "max-length", 1, what)?
                .unwrap_or(InputType::TEXT_MAX_LENGTH);
            if let Some(min) = min
                && min > max
            {
                reject!("The text input's min-length ({min}) exceeds its max-length ({max}).");
            }
            check_nullable_field(object, "placeholder", language)?;
        }
        InputType::Number => {
            let min = nullable_number(object, "min-value", what)?;
            let max = nullable_number(object, "max-value", what)?;
            if let (Some(min), Some(max)) = (min, max)
                && min > max
            {
                reject!("The number input's min-value ({min}) exceeds its max-value ({max}).");
            }
            check_nullable_field(object, "placeholder", language)?;
        }
        InputType::Datetime => {
            check_string(object, "date-format", what)?;
            check_string(object, "time-format", what)?;
            check_nullable_string(object, "from", what)?;
            check_nullable_string(object, "to", what)?;
            check_bool(object, "disable-date", what)?;
            check_bool(object, "disable-time", what)?;
            let disabled = |key: &str| object.get(key).and_then(Value::as_bool).unwrap_or(false);
            if disabled("disable-date") && disabled("disable-time") {
                reject!("A datetime input cannot disable both the date and the time.");
            }
        }
        InputType::Url => {
            integer_at_least(object, "max-length", 1, what)?;
            check_nullable_field(object, "placeholder", language)?;
        }
        InputType::Geotagging => check_location(object)?,
    }

    Ok(())
}

fn check_options(object: &Map<String, Value>, language: &LanguageConfig, what: &str) -> Verdict {
    let Some(options) = object.get("options").and_then(Value::as_array) else {
        reject!("A {what} input must have an array of options.");
    };
    if options.is_empty() {
        reject!("A {what} input must have at least one option.");
    }

    let mut values = HashSet::new();
    for option in options {
        let option = as_object(option, "option")?;
        let Some(value) = option.get("value").and_then(Value::as_str) else {
            reject!("Every {what} option must have a string value.");
        };
        if !values.insert(value) {
            reject!("The {what} option value '{value}' is used more than once.");
        }
        match option.get("label") {
            Some(label) => check_text(label, language, "option label")?,
            None => reject!("The {what} option '{value}' is missing a label."),
        }
    }

    Ok(())
}

fn check_nullable_field(object: &Map<String, Value>, key: &str, language: &LanguageConfig) -> Verdict {
    match object.get(key) {
        Some(text) => check_nullable_text(text, language, key),
        None => Ok(()),
    }
}

fn check_location(object: &Map<String, Value>) -> Verdict {
    let location = match object.get("location") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Array(location)) => location,
        Some(_) => reject!("A geotagging input's location must be a [latitude, longitude] pair."),
    };

    match location.as_slice() {
        [latitude, longitude] => match (latitude.as_f64(), longitude.as_f64()) {
            (Some(latitude), Some(longitude))
                if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) =>
            {
                Ok(())
            }
            _ => reject!("A geotagging input's location is out of range."),
        },
        _ => reject!("A geotagging input's location must be a [latitude, longitude] pair."),
    }
}
