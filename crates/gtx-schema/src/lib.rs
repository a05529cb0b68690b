//! Configuration model and validation for the GeoTag-X project formatter.
//!
//! This crate holds the types shared by every layer of the tool:
//!
//! - [`ConfigurationSet`] and [`DocumentKind`], the three-document bundle
//!   describing one project
//! - [`LanguageConfig`] and the language-code table
//! - [`InputType`], the closed set of questionnaire input types
//! - the [`Validator`] interface and its built-in implementation,
//!   [`SchemaValidator`]

pub mod document;
pub mod error;
pub mod input_type;
pub mod language;
pub mod schema;
pub mod validator;

pub use document::{ConfigurationSet, DocumentKind};
pub use error::{Rejection, Verdict};
pub use input_type::InputType;
pub use language::{LanguageConfig, is_language_code};
pub use schema::{SchemaValidator, type_name};
pub use validator::Validator;
