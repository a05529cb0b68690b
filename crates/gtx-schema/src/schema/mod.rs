//! Built-in structural rules for every configuration entity
//!
//! [`SchemaValidator`] implements [`Validator`] with the rules GeoTag-X
//! projects follow:
//!
//! - `project` - named project metadata
//! - `task_presenter` - language, subject and a questionnaire of keyed
//!   questions, each with a typed input
//! - `tutorial` - default messages and subjects whose assertions target the
//!   task presenter's questions

mod input;
mod project;
mod question;
mod task_presenter;
mod text;
mod tutorial;

pub use text::type_name;

use serde_json::{Map, Value};

use crate::error::reject;
use crate::{DocumentKind, LanguageConfig, Validator, Verdict};

/// The default [`Validator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator;

impl SchemaValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for SchemaValidator {
    fn check_configuration_set(&self, set: &Map<String, Value>) -> Verdict {
        let Some(project) = set.get(DocumentKind::Project.key()) else {
            reject!("The configuration set is missing a project configuration.");
        };
        let Some(task_presenter) = set.get(DocumentKind::TaskPresenter.key()) else {
            reject!("The configuration set is missing a task presenter configuration.");
        };

        self.check_project(project)?;
        self.check_task_presenter(task_presenter)?;
        if let Some(tutorial) = set.get(DocumentKind::Tutorial.key()) {
            self.check_tutorial(tutorial, task_presenter)?;
        }

        Ok(())
    }

    fn check_project(&self, project: &Value) -> Verdict {
        project::check_project(project)
    }

    fn check_task_presenter(&self, task_presenter: &Value) -> Verdict {
        task_presenter::check_task_presenter(task_presenter)
    }

    fn check_language(&self, language: &Value) -> Verdict {
        task_presenter::check_language(language)
    }

    fn check_subject(&self, subject: &Value) -> Verdict {
        task_presenter::check_subject(subject)
    }

    fn check_questionnaire(&self, questionnaire: &Value, language: &LanguageConfig) -> Verdict {
        task_presenter::check_questionnaire(questionnaire, language)
    }

    fn check_question(&self, question: &Value, language: &LanguageConfig) -> Verdict {
        question::check_question(question, language)
    }

    fn check_question_title(&self, title: &Value, language: &LanguageConfig) -> Verdict {
        question::check_title(title, language)
    }

    fn check_question_help(&self, help: &Value, language: &LanguageConfig) -> Verdict {
        question::check_help(help, language)
    }

    fn check_question_input(&self, input: &Value, language: &LanguageConfig) -> Verdict {
        input::check_input(input, language)
    }

    fn check_tutorial(&self, tutorial: &Value, task_presenter: &Value) -> Verdict {
        tutorial::check_tutorial(tutorial, task_presenter)
    }

    fn check_tutorial_default_message(
        &self,
        message: &Value,
        language: &LanguageConfig,
    ) -> Verdict {
        tutorial::check_default_message(message, language)
    }
}
