//! Project directory persistence for the GeoTag-X project formatter
//!
//! A project directory holds up to three configuration documents. This
//! crate reads them into a [`gtx_schema::ConfigurationSet`] and writes a
//! formatted set back as a unit.

pub mod error;
pub mod io;
pub mod layout;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use path::{sanitize_path, sanitize_paths};
pub use store::{FormatOptions, read_configuration_set, to_json_string, write_configuration_set};
