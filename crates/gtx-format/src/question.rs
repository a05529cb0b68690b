//! Questionnaire question formatter

use gtx_schema::{LanguageConfig, Validator};
use serde_json::Value;

use crate::Result;
use crate::formatter::{Formatter, into_object, update};
use crate::text::normalize_text;

impl<V: Validator> Formatter<V> {
    /// Format one question written in `language`.
    ///
    /// The `title`, `hint`, `help` and `input` fields are formatted; other
    /// fields (`key`, `branch`, ...) are left untouched.
    pub fn format_question(
        &self,
        question: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| v.check_language(&Value::Object(language.to_map())))?;
        self.check(validate, |v| v.check_question(&question, language))?;

        let mut question = into_object(question, "question")?;
        update(&mut question, "title", |title| {
            self.format_question_title(title, language, false)
        })?;
        update(&mut question, "hint", |hint| {
            self.format_question_help(hint, language, false)
        })?;
        update(&mut question, "help", |help| {
            self.format_question_help(help, language, false)
        })?;
        update(&mut question, "input", |input| {
            self.format_question_input(input, language, false)
        })?;

        let key = question.get("key").and_then(|key| key.as_str());
        tracing::trace!(key, "Formatted question");
        Ok(Value::Object(question))
    }

    pub fn format_question_title(
        &self,
        title: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| v.check_question_title(&title, language))?;
        normalize_text(title, &language.default, "question.title")
    }

    /// Format a question's `help` or `hint`.
    pub fn format_question_help(
        &self,
        help: Value,
        language: &LanguageConfig,
        validate: bool,
    ) -> Result<Value> {
        self.check(validate, |v| v.check_question_help(&help, language))?;
        normalize_text(help, &language.default, "question.help")
    }
}
