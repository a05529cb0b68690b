//! Configuration formatter for GeoTag-X projects
//!
//! Formatting turns a hand-written configuration set into its canonical
//! form:
//!
//! - **Default injection**: every question input gains the options its
//!   type leaves unspecified, and the task presenter gains a `language`
//!   and a `subject`
//! - **Normalization**: free text becomes a mapping from language code to
//!   text, tagged with the task presenter's default language
//! - **Trimming**: project metadata loses surrounding whitespace
//!
//! # Architecture
//!
//! ```text
//!             Formatter::format (configuration set)
//!                         |
//!      +------------------+------------------+
//!      |                  |                  |
//!   project        task_presenter  ----> tutorial
//!                         |        language
//!          language, subject, questionnaire
//!                         |
//!                     question
//!                         |
//!                       input
//! ```
//!
//! Validation is delegated to a [`gtx_schema::Validator`]. Each formatter
//! validates its subtree first when asked to, and never partially formats
//! a rejected subtree.
//!
//! # Example
//!
//! ```
//! use gtx_format::{Formatter, normalize};
//! use serde_json::json;
//!
//! let localized = normalize("Hello", "en").unwrap();
//! assert_eq!(localized["en"], json!("Hello"));
//!
//! let input = Formatter::new()
//!     .format_question_input(json!({"type": "url"}), &Default::default(), true)
//!     .unwrap();
//! assert_eq!(input["max-length"], json!(256));
//! ```

pub mod config_set;
pub mod error;
pub mod formatter;
pub mod input;
pub mod project;
pub mod question;
pub mod task_presenter;
pub mod text;
pub mod tutorial;

pub use config_set::format_configuration_set;
pub use error::{Error, Result};
pub use formatter::Formatter;
pub use input::input_defaults;
pub use project::{format_project_description, format_project_name, format_project_repository};
pub use task_presenter::language_of;
pub use text::{normalize, normalize_nullable_text, normalize_text};
pub use tutorial::format_tutorial_subject;

pub use gtx_schema;
