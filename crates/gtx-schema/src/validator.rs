//! The validation interface consumed by the formatter

use serde_json::{Map, Value};

use crate::{LanguageConfig, Verdict};

/// One predicate per configuration entity.
///
/// Each predicate either accepts a value or rejects it with a message.
/// Formatters call the matching predicate before touching a subtree, and a
/// rejection aborts formatting of that subtree.
pub trait Validator {
    /// Check a whole configuration set, including the documents it holds.
    fn check_configuration_set(&self, set: &Map<String, Value>) -> Verdict;

    fn check_project(&self, project: &Value) -> Verdict;

    fn check_task_presenter(&self, task_presenter: &Value) -> Verdict;

    fn check_language(&self, language: &Value) -> Verdict;

    fn check_subject(&self, subject: &Value) -> Verdict;

    /// Check a questionnaire whose text is written in `language`.
    fn check_questionnaire(&self, questionnaire: &Value, language: &LanguageConfig) -> Verdict;

    fn check_question(&self, question: &Value, language: &LanguageConfig) -> Verdict;

    fn check_question_title(&self, title: &Value, language: &LanguageConfig) -> Verdict;

    /// Check a question's `help` or `hint`.
    fn check_question_help(&self, help: &Value, language: &LanguageConfig) -> Verdict;

    fn check_question_input(&self, input: &Value, language: &LanguageConfig) -> Verdict;

    /// Check a tutorial against the task presenter it belongs to.
    fn check_tutorial(&self, tutorial: &Value, task_presenter: &Value) -> Verdict;

    fn check_tutorial_default_message(&self, message: &Value, language: &LanguageConfig)
    -> Verdict;
}
