//! Tutorial document rules
//!
//! A tutorial is only meaningful next to the task presenter it teaches: its
//! text must be written in the task presenter's languages, and its
//! assertions must target the task presenter's questions.

use std::collections::HashSet;

use serde_json::Value;

use super::task_presenter::question_keys;
use super::text::{as_object, check_bool, check_text};
use crate::error::{Rejection, reject};
use crate::{LanguageConfig, Verdict};

pub(crate) fn check_tutorial(tutorial: &Value, task_presenter: &Value) -> Verdict {
    let object = as_object(tutorial, "tutorial configuration")?;
    let task_presenter_object = as_object(task_presenter, "task presenter configuration")?;
    let Some(language) = LanguageConfig::resolve(task_presenter_object.get("language")) else {
        reject!("The task presenter's language configuration is malformed.");
    };

    check_bool(object, "enable-random-order", "tutorial")?;

    if let Some(message) = object.get("default-message") {
        check_default_message(message, &language)?;
    }

    if let Some(subjects) = object.get("subjects") {
        let Some(subjects) = subjects.as_array() else {
            reject!("The tutorial's subjects must be an array.");
        };
        if subjects.is_empty() {
            reject!("The tutorial has no subjects.");
        }
        let keys = question_keys(task_presenter);
        for (index, subject) in subjects.iter().enumerate() {
            check_subject(subject, &language, &keys).map_err(|rejection| {
                Rejection::new(format!(
                    "In tutorial subject #{}: {}",
                    index + 1,
                    rejection.message
                ))
            })?;
        }
    }

    Ok(())
}

pub(crate) fn check_default_message(message: &Value, language: &LanguageConfig) -> Verdict {
    let object = as_object(message, "tutorial's default message")?;
    for (key, text) in object {
        check_text(text, language, &format!("'{key}' message"))?;
    }
    Ok(())
}

fn check_subject(subject: &Value, language: &LanguageConfig, keys: &HashSet<&str>) -> Verdict {
    let object = as_object(subject, "subject")?;

    match object.get("source") {
        Some(Value::String(source)) if !source.trim().is_empty() => {}
        Some(_) => reject!("The subject's source must be a non-empty string."),
        None => reject!("The subject is missing a source."),
    }

    let Some(assertions) = object.get("assertions").and_then(Value::as_object) else {
        reject!("The subject must have an object of assertions.");
    };
    if assertions.is_empty() {
        reject!("The subject has no assertions.");
    }
    for (key, assertion) in assertions {
        if !keys.contains(key.as_str()) {
            reject!("The assertion '{key}' does not match any question.");
        }
        check_assertion(key, assertion, language)?;
    }

    Ok(())
}

fn check_assertion(key: &str, assertion: &Value, language: &LanguageConfig) -> Verdict {
    let assertion = as_object(assertion, "assertion")?;

    match assertion.get("expects") {
        Some(Value::String(_)) => {}
        Some(Value::Array(answers)) if !answers.is_empty() && answers.iter().all(Value::is_string) => {}
        Some(_) => reject!("The assertion '{key}' expects a string or an array of strings."),
        None => reject!("The assertion '{key}' is missing its expected answer."),
    }

    match assertion.get("message") {
        Some(message) => check_text(message, language, &format!("'{key}' assertion message")),
        None => Ok(()),
    }
}
