//! The formatter handle and helpers shared by the document formatters

use std::mem;

use gtx_schema::{SchemaValidator, Validator, Verdict};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Formats configuration documents, validating them with `V`.
///
/// Every formatting operation takes ownership of the tree it formats and
/// returns the formatted tree; callers that need the original keep a clone.
/// A formatter holds no state between calls.
#[derive(Debug, Default, Clone)]
pub struct Formatter<V = SchemaValidator> {
    validator: V,
}

impl Formatter<SchemaValidator> {
    /// A formatter using the built-in [`SchemaValidator`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V: Validator> Formatter<V> {
    pub fn with_validator(validator: V) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Run a validation predicate when `validate` is set.
    pub(crate) fn check(&self, validate: bool, predicate: impl FnOnce(&V) -> Verdict) -> Result<()> {
        if validate {
            predicate(&self.validator)?;
        }
        Ok(())
    }
}

pub(crate) fn into_object(value: Value, path: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        other => Err(Error::type_mismatch(path, "an object", &other)),
    }
}

pub(crate) fn into_array(value: Value, path: &str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::type_mismatch(path, "an array", &other)),
    }
}

/// Replace the value under `key` with `format(value)`, if present.
///
/// The key keeps its position in the mapping.
pub(crate) fn update<F>(object: &mut Map<String, Value>, key: &str, format: F) -> Result<()>
where
    F: FnOnce(Value) -> Result<Value>,
{
    if let Some(slot) = object.get_mut(key) {
        *slot = format(mem::take(slot))?;
    }
    Ok(())
}

/// Take the value under `key`, leaving `null` in its place.
///
/// Re-inserting under the same key restores the value at its position.
pub(crate) fn take_field(object: &mut Map<String, Value>, key: &str) -> Option<Value> {
    object.get_mut(key).map(mem::take)
}

/// Format each item of an array value in order.
pub(crate) fn format_items<F>(items: Value, path: &str, format: F) -> Result<Value>
where
    F: FnMut(Value) -> Result<Value>,
{
    into_array(items, path)?
        .into_iter()
        .map(format)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

/// Right-biased merge: every key of `explicit` wins, `defaults` only fill
/// the keys `explicit` lacks.
///
/// Explicit keys keep their order; missing defaults follow in table order.
pub(crate) fn merge(defaults: Map<String, Value>, explicit: Map<String, Value>) -> Map<String, Value> {
    let missing: Vec<_> = defaults
        .into_iter()
        .filter(|(key, _)| !explicit.contains_key(key))
        .collect();
    explicit.into_iter().chain(missing).collect()
}
