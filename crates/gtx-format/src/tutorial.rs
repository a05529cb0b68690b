//! Tutorial document formatter
//!
//! Tutorial text is written in the languages of the sibling task presenter,
//! so formatting a tutorial always needs that task presenter.

use gtx_schema::{LanguageConfig, Validator};
use serde_json::{Map, Value};

use crate::formatter::{Formatter, format_items, into_object, update};
use crate::task_presenter::language_of;
use crate::text::normalize_text;
use crate::Result;

impl<V: Validator> Formatter<V> {
    /// Format a tutorial belonging to `task_presenter`.
    ///
    /// The task presenter is only read. When it was formatted beforehand,
    /// its language configuration is complete.
    pub fn format_tutorial(
        &self,
        tutorial: Value,
        task_presenter: &Value,
        validate_tutorial: bool,
        validate_task_presenter: bool,
    ) -> Result<Value> {
        self.check(validate_task_presenter, |v| {
            v.check_task_presenter(task_presenter)
        })?;
        self.check(validate_tutorial, |v| {
            v.check_tutorial(&tutorial, task_presenter)
        })?;

        let language = language_of(task_presenter)?;
        let mut tutorial = into_object(tutorial, "tutorial")?;

        update(&mut tutorial, "default-message", |message| {
            self.format_tutorial_default_message(message, &language, false)
        })?;
        update(&mut tutorial, "subjects", |subjects| {
            format_items(subjects, "tutorial.subjects", |subject| {
                format_tutorial_subject(subject, &language)
            })
        })?;

        tracing::debug!(language = %language.default, "Formatted tutorial configuration");
        Ok(Value::Object(tutorial))
    }

    /// Normalize every message of a tutorial's `default-message` mapping.
    pub fn format_tutorial_default_message(
        &self,
        message: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| {
            v.check_tutorial_default_message(&message, language)
        })?;

        into_object(message, "tutorial.default-message")?
            .into_iter()
            .map(|(key, text)| {
                let path = format!("tutorial.default-message.{key}");
                normalize_text(text, &language.default, &path).map(|text| (key, text))
            })
            .collect::<Result<Map<_, _>>>()
            .map(Value::Object)
    }
}

/// Normalize the messages of a tutorial subject's assertions.
pub fn format_tutorial_subject(subject: Value, language: &LanguageConfig) -> Result<Value> {
    let mut subject = into_object(subject, "tutorial.subjects[]")?;
    update(&mut subject, "assertions", |assertions| {
        let mut assertions = into_object(assertions, "tutorial.subjects[].assertions")?;
        for (key, assertion) in assertions.iter_mut() {
            let path = format!("tutorial.subjects[].assertions.{key}");
            let mut fields = into_object(std::mem::take(assertion), &path)?;
            update(&mut fields, "message", |message| {
                normalize_text(message, &language.default, &format!("{path}.message"))
            })?;
            *assertion = Value::Object(fields);
        }
        Ok(Value::Object(assertions))
    })?;
    Ok(Value::Object(subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn french_task_presenter() -> Value {
        json!({
            "language": {"default": "fr", "available": ["fr", "en"]},
            "questionnaire": {
                "questions": [{"key": "water", "title": "Eau ?", "input": {"type": "text"}}]
            }
        })
    }

    #[test]
    fn test_default_messages_use_task_presenter_language() {
        let tutorial = json!({
            "default-message": {
                "on-correct-answer": "Bravo !",
                "on-wrong-answer": "Essayez encore."
            }
        });

        let formatted = Formatter::new()
            .format_tutorial(tutorial, &french_task_presenter(), true, true)
            .unwrap();

        assert_eq!(
            formatted,
            json!({
                "default-message": {
                    "on-correct-answer": {"fr": "Bravo !"},
                    "on-wrong-answer": {"fr": "Essayez encore."}
                }
            })
        );
    }

    #[test]
    fn test_subject_assertion_messages_are_normalized() {
        let tutorial = json!({
            "subjects": [{
                "source": "https://example.org/a.jpg",
                "assertions": {
                    "water": {"expects": "oui", "message": "Il y a de l'eau."}
                }
            }]
        });

        let formatted = Formatter::new()
            .format_tutorial(tutorial, &french_task_presenter(), true, true)
            .unwrap();

        assert_eq!(
            formatted["subjects"][0]["assertions"]["water"],
            json!({"expects": "oui", "message": {"fr": "Il y a de l'eau."}})
        );
    }

    #[test]
    fn test_tutorial_validated_against_task_presenter() {
        let tutorial = json!({"default-message": {"on-correct-answer": {"de": "Gut."}}});
        let error = Formatter::new()
            .format_tutorial(tutorial, &french_task_presenter(), true, false)
            .unwrap_err();
        assert!(error.is_invalid_configuration());
    }

    #[test]
    fn test_invalid_task_presenter_rejected_first() {
        let error = Formatter::new()
            .format_tutorial(json!({}), &json!({"language": {}}), true, true)
            .unwrap_err();
        assert!(matches!(error, Error::InvalidConfiguration { message } if message.contains("questionnaire")));
    }

    #[test]
    fn test_unvalidated_tutorial_with_bad_subjects() {
        let error = Formatter::new()
            .format_tutorial(json!({"subjects": {}}), &french_task_presenter(), false, false)
            .unwrap_err();
        assert!(matches!(error, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_malformed_assertion_reports_full_path() {
        let subject = json!({"assertions": {"water": "yes"}});
        let error = format_tutorial_subject(subject, &LanguageConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            Error::TypeMismatch { ref path, .. } if path == "tutorial.subjects[].assertions.water"
        ));

        let subject = json!({"assertions": {"water": {"expects": "yes", "message": 3}}});
        let error = format_tutorial_subject(subject, &LanguageConfig::default()).unwrap_err();
        assert!(matches!(
            error,
            Error::TypeMismatch { ref path, .. } if path == "tutorial.subjects[].assertions.water.message"
        ));
    }
}
