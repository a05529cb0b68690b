//! Shared test utilities for the geotagx-formatter workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`documents`] - sample project, task presenter and tutorial documents
//! - [`project`] - [`TestProject`](project::TestProject), a temporary
//!   project directory

pub mod documents;
pub mod project;
