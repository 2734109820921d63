// src/document.rs
use serde_json::{Map, Value};

use crate::error::{ApiPostError, Result, Stage};

/// Top-level JSON object, keys kept in the order they were decoded.
pub type Document = Map<String, Value>;

/// Parses `text` as a JSON object. Arrays and scalars at the top level are
/// rejected just like malformed text.
pub fn decode(text: &str, stage: Stage) -> Result<Document> {
    serde_json::from_str::<Document>(text).map_err(|source| ApiPostError::Parse { stage, source })
}

/// `Some(b)` only when `value` is an object whose `attr` is a JSON boolean.
pub fn flag(value: &Value, attr: &str) -> Option<bool> {
    value.as_object()?.get(attr)?.as_bool()
}

/// Keeps the entries explicitly marked `"private": false`.
pub fn select_public(doc: &Document) -> Document {
    doc.iter()
        .filter(|(_, v)| flag(v, "private") == Some(false))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Keys of the entries marked `"valid": true`, in document order.
pub fn valid_keys(doc: &Document) -> Vec<String> {
    doc.iter()
        .filter(|(_, v)| flag(v, "valid") == Some(true))
        .map(|(k, _)| k.clone())
        .collect()
}
