//! Task presenter document formatter
//!
//! The task presenter's `language` is formatted first: every question in
//! the questionnaire is normalized against it.

use gtx_schema::{LanguageConfig, Validator};
use serde_json::{Map, Value, json};

use crate::formatter::{Formatter, format_items, into_object, merge, take_field, update};
use crate::{Error, Result};

/// Subject configuration used when a task presenter specifies none.
fn subject_defaults() -> Map<String, Value> {
    let mut defaults = Map::new();
    defaults.insert("type".into(), json!("image"));
    defaults
}

/// The language configuration a task presenter document uses.
///
/// A missing task presenter or `language` yields the default configuration.
pub fn language_of(task_presenter: &Value) -> Result<LanguageConfig> {
    let language = match task_presenter {
        Value::Object(object) => object.get("language"),
        Value::Null => None,
        other => return Err(Error::type_mismatch("task_presenter", "an object", other)),
    };
    LanguageConfig::resolve(language).ok_or_else(|| {
        Error::type_mismatch(
            "task_presenter.language",
            "a language configuration",
            language.unwrap_or(&Value::Null),
        )
    })
}

impl<V: Validator> Formatter<V> {
    /// Format a task presenter document.
    ///
    /// The formatted document always carries a `language` and a `subject`.
    pub fn format_task_presenter(&self, task_presenter: Value, validate: bool) -> Result<Value> {
        self.check(validate, |v| v.check_task_presenter(&task_presenter))?;

        let mut task_presenter = into_object(task_presenter, "task_presenter")?;

        let language = take_field(&mut task_presenter, "language")
            .unwrap_or_else(|| Value::Object(Map::new()));
        let language = self.format_language(language, false)?;
        let resolved = resolve_language(&language)?;
        task_presenter.insert("language".into(), language);

        let subject = take_field(&mut task_presenter, "subject")
            .unwrap_or_else(|| Value::Object(Map::new()));
        task_presenter.insert("subject".into(), self.format_subject(subject, false)?);

        update(&mut task_presenter, "questionnaire", |questionnaire| {
            self.format_questionnaire(questionnaire, &resolved, false)
        })?;

        tracing::debug!(language = %resolved.default, "Formatted task presenter configuration");
        Ok(Value::Object(task_presenter))
    }

    /// Format a language configuration, filling a missing `default` or
    /// `available` from the other key, or from `en`.
    pub fn format_language(&self, language: Value, validate: bool) -> Result<Value> {
        self.check(validate, |v| v.check_language(&language))?;

        let effective = resolve_language(&language)?;
        let language = into_object(language, "language")?;
        Ok(Value::Object(merge(effective.to_map(), language)))
    }

    pub fn format_subject(&self, subject: Value, validate: bool) -> Result<Value> {
        self.check(validate, |v| v.check_subject(&subject))?;

        let subject = into_object(subject, "subject")?;
        Ok(Value::Object(merge(subject_defaults(), subject)))
    }

    /// Format every question of a questionnaire written in `language`, in
    /// order.
    pub fn format_questionnaire(
        &self,
        questionnaire: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| v.check_questionnaire(&questionnaire, language))?;

        let mut questionnaire = into_object(questionnaire, "questionnaire")?;
        update(&mut questionnaire, "questions", |questions| {
            format_items(questions, "questionnaire.questions", |question| {
                self.format_question(question, language, false)
            })
        })?;
        Ok(Value::Object(questionnaire))
    }
}

fn resolve_language(language: &Value) -> Result<LanguageConfig> {
    LanguageConfig::resolve(Some(language))
        .ok_or_else(|| Error::type_mismatch("language", "a language configuration", language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(json!({}), json!({"default": "en", "available": ["en"]}))]
    #[case(json!({"default": "fr"}), json!({"default": "fr", "available": ["fr"]}))]
    #[case(json!({"available": ["es", "en"]}), json!({"available": ["es", "en"], "default": "en"}))]
    #[case(json!({"available": ["es", "fr"]}), json!({"available": ["es", "fr"], "default": "es"}))]
    #[case(
        json!({"default": "en", "available": ["fr", "en"]}),
        json!({"default": "en", "available": ["fr", "en"]})
    )]
    fn test_format_language(#[case] language: Value, #[case] expected: Value) {
        assert_eq!(Formatter::new().format_language(language, true).unwrap(), expected);
    }

    #[test]
    fn test_format_subject_injects_type() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format_subject(json!({}), true).unwrap(), json!({"type": "image"}));
        assert_eq!(
            formatter.format_subject(json!({"type": "pdf"}), true).unwrap(),
            json!({"type": "pdf"})
        );
    }

    #[test]
    fn test_task_presenter_gains_language_and_subject() {
        let task_presenter = json!({
            "questionnaire": {
                "questions": [{"key": "a", "title": "A?", "input": {"type": "geotagging"}}]
            }
        });

        let formatted = Formatter::new()
            .format_task_presenter(task_presenter, true)
            .unwrap();

        assert_eq!(
            formatted,
            json!({
                "questionnaire": {
                    "questions": [{
                        "key": "a",
                        "title": {"en": "A?"},
                        "input": {"type": "geotagging", "location": null}
                    }]
                },
                "language": {"default": "en", "available": ["en"]},
                "subject": {"type": "image"}
            })
        );
    }

    #[test]
    fn test_questions_use_task_presenter_language() {
        let task_presenter = json!({
            "language": {"available": ["fr", "de"]},
            "questionnaire": {
                "questions": [
                    {"key": "a", "title": "Premier", "input": {"type": "text"}},
                    {"key": "b", "title": "Second", "input": {"type": "text"}}
                ]
            }
        });

        let formatted = Formatter::new()
            .format_task_presenter(task_presenter, true)
            .unwrap();

        let titles: Vec<_> = formatted["questionnaire"]["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|question| question["title"].clone())
            .collect();
        assert_eq!(titles, vec![json!({"fr": "Premier"}), json!({"fr": "Second"})]);
    }

    #[test]
    fn test_language_of() {
        assert_eq!(language_of(&Value::Null).unwrap(), LanguageConfig::default());
        assert!(language_of(&json!("fr")).is_err());
        assert_eq!(
            language_of(&json!({"language": {"default": "fr"}})).unwrap().available,
            vec!["fr"]
        );
    }

    #[test]
    fn test_questionnaire_requires_question_array_without_validation() {
        let error = Formatter::new()
            .format_questionnaire(json!({"questions": "a"}), &LanguageConfig::default(), false)
            .unwrap_err();
        assert!(matches!(error, Error::TypeMismatch { .. }));
    }
}
