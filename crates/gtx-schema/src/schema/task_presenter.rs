//! Task presenter document rules

use std::collections::HashSet;

use serde_json::Value;

use super::question::check_question;
use super::text::{as_object, type_name};
use crate::error::reject;
use crate::{LanguageConfig, Verdict, is_language_code};

const SUBJECT_TYPES: &[&str] = &["image", "pdf"];

pub(crate) fn check_task_presenter(task_presenter: &Value) -> Verdict {
    let object = as_object(task_presenter, "task presenter configuration")?;

    if let Some(language) = object.get("language") {
        check_language(language)?;
    }
    if let Some(subject) = object.get("subject") {
        check_subject(subject)?;
    }

    let Some(language) = LanguageConfig::resolve(object.get("language")) else {
        reject!("The task presenter's language configuration is malformed.");
    };
    match object.get("questionnaire") {
        Some(questionnaire) => check_questionnaire(questionnaire, &language),
        None => reject!("The task presenter configuration is missing a questionnaire."),
    }
}

pub(crate) fn check_language(language: &Value) -> Verdict {
    let object = as_object(language, "language configuration")?;

    let default = match object.get("default") {
        None => None,
        Some(Value::String(code)) if is_language_code(code) => Some(code.as_str()),
        Some(Value::String(code)) => reject!("'{code}' is not a valid language code."),
        Some(other) => reject!(
            "The default language must be a language code, not {}.",
            type_name(other)
        ),
    };

    if let Some(available) = object.get("available") {
        let Some(codes) = available.as_array() else {
            reject!("The available languages must be an array of language codes.");
        };
        if codes.is_empty() {
            reject!("At least one language must be available.");
        }

        let mut seen = HashSet::new();
        for code in codes {
            let Some(code) = code.as_str() else {
                reject!("The available languages must be an array of language codes.");
            };
            if !is_language_code(code) {
                reject!("'{code}' is not a valid language code.");
            }
            if !seen.insert(code) {
                reject!("The language '{code}' is listed more than once.");
            }
        }

        if let Some(default) = default
            && !seen.contains(default)
        {
            reject!("The default language '{default}' is not one of the available languages.");
        }
    }

    Ok(())
}

pub(crate) fn check_subject(subject: &Value) -> Verdict {
    let object = as_object(subject, "subject configuration")?;
    match object.get("type") {
        None => Ok(()),
        Some(Value::String(kind)) if SUBJECT_TYPES.contains(&kind.as_str()) => Ok(()),
        Some(_) => reject!(
            "The subject type must be one of: {}.",
            SUBJECT_TYPES.join(", ")
        ),
    }
}

pub(crate) fn check_questionnaire(questionnaire: &Value, language: &LanguageConfig) -> Verdict {
    let object = as_object(questionnaire, "questionnaire")?;

    let Some(questions) = object.get("questions").and_then(Value::as_array) else {
        reject!("The questionnaire must contain an array of questions.");
    };
    if questions.is_empty() {
        reject!("The questionnaire has no questions.");
    }

    let mut keys = HashSet::new();
    for question in questions {
        check_question(question, language)?;
        if let Some(key) = question.get("key").and_then(Value::as_str)
            && !keys.insert(key)
        {
            reject!("The question key '{key}' is used more than once.");
        }
    }

    Ok(())
}

/// Keys of every question in a task presenter's questionnaire.
pub(crate) fn question_keys(task_presenter: &Value) -> HashSet<&str> {
    task_presenter
        .pointer("/questionnaire/questions")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|question| question.get("key").and_then(Value::as_str))
        .collect()
}
