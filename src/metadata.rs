//! GUANO metadata store and text codec.
//!
//! The metadata block is line-oriented UTF-8: `[namespace "|"] field ":"
//! value`, one record per line, with a mandatory `GUANO|Version: 1.0` header
//! when encoded. [`GuanoMetadata`] holds the decoded records as a namespace
//! to field to value table and offers string, integer and float accessors
//! over it. The empty namespace is the top level.

use crate::error::{GuanoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The metadata convention version this codec writes.
pub const GUANO_VERSION: &str = "1.0";

/// A namespaced field/value table plus the text codec over it.
///
/// Create one empty and fill it with the `set_*` methods (writer path), or
/// decode one from a metadata chunk with [`GuanoMetadata::parse`] (reader
/// path). Values are always stored as text; the numeric accessors parse on
/// demand and fail with [`GuanoError::NumberFormat`] instead of coercing.
/// Values pass through verbatim, so an embedded newline must be escaped by
/// the caller before `set`.
///
/// Field keys passed as a single string may carry a namespace before a `|`:
/// `get_str("MSFT|Fnord")` and `get_str_ns("MSFT", "Fnord")` are the same
/// lookup. [`GuanoField`](crate::fields::GuanoField) constants convert via
/// `AsRef<str>` and address the top level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuanoMetadata {
    /// Version string from the `GUANO|Version` header line, if one was
    /// parsed. Kept out of the field table; encoding always writes the
    /// current header regardless.
    version: Option<String>,
    #[serde(rename = "fields")]
    table: BTreeMap<String, BTreeMap<String, String>>,
}

/// Split a combined `namespace|field` key; no pipe means top level.
fn split_key(key: &str) -> (&str, &str) {
    match key.split_once('|') {
        Some((namespace, field)) => (namespace, field),
        None => ("", key),
    }
}

/// Combined form of a key for error messages.
fn display_key(namespace: &str, field: &str) -> String {
    if namespace.is_empty() {
        field.to_string()
    } else {
        format!("{namespace}|{field}")
    }
}

impl GuanoMetadata {
    /// An empty store with no version header seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a metadata chunk payload.
    ///
    /// Each non-blank line is split on its first `:` into field and value;
    /// a `|` in the field part splits off the namespace. All three parts
    /// are trimmed. Blank lines (including trailing chunk padding) are
    /// skipped. A line without a colon fails the whole parse with
    /// [`GuanoError::MalformedLine`]; nothing is silently dropped.
    pub fn parse(bytes: &[u8]) -> Result<GuanoMetadata> {
        let text = std::str::from_utf8(bytes)?;
        let mut metadata = GuanoMetadata::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (field_part, value) = line
                .split_once(':')
                .ok_or_else(|| GuanoError::MalformedLine(line.to_string()))?;
            let (namespace, field) = match field_part.split_once('|') {
                Some((namespace, field)) => (namespace.trim(), field.trim()),
                None => ("", field_part.trim()),
            };
            let value = value.trim();
            if namespace == "GUANO" && field == "Version" {
                metadata.version = Some(value.to_string());
            } else {
                metadata.set_str_ns(namespace, field, value);
            }
        }
        Ok(metadata)
    }

    /// Encode the store as metadata text, header line first.
    ///
    /// Iteration order of namespaces and fields is an implementation
    /// detail; only the header position is contractual.
    pub fn render(&self) -> String {
        let mut out = format!("GUANO|Version: {GUANO_VERSION}\n");
        for (namespace, fields) in &self.table {
            for (field, value) in fields {
                if namespace.is_empty() {
                    out.push_str(&format!("{field}: {value}\n"));
                } else {
                    out.push_str(&format!("{namespace}|{field}: {value}\n"));
                }
            }
        }
        out
    }

    /// Version string from the decoded header, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether the store holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.table.values().all(|fields| fields.is_empty())
    }

    /// Total number of fields across all namespaces.
    pub fn len(&self) -> usize {
        self.table.values().map(|fields| fields.len()).sum()
    }

    /// Known namespace names in sorted order; `""` is the top level.
    pub fn namespaces(&self) -> Vec<&str> {
        self.table.keys().map(String::as_str).collect()
    }

    /// Field names within one namespace, sorted; empty if the namespace is
    /// unknown.
    pub fn fieldnames(&self, namespace: &str) -> Vec<&str> {
        match self.table.get(namespace) {
            Some(fields) => fields.keys().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Read-only view of one namespace's field/value map.
    pub fn fields(&self, namespace: &str) -> Option<&BTreeMap<String, String>> {
        self.table.get(namespace)
    }

    /// Fetch a field's text; the key may carry a `namespace|` prefix.
    pub fn get_str(&self, key: impl AsRef<str>) -> Result<&str> {
        let (namespace, field) = split_key(key.as_ref());
        self.get_str_ns(namespace, field)
    }

    /// Fetch a field's text from an explicit namespace.
    pub fn get_str_ns(&self, namespace: &str, field: &str) -> Result<&str> {
        self.table
            .get(namespace)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
            .ok_or_else(|| GuanoError::MissingField {
                key: display_key(namespace, field),
            })
    }

    /// Fetch a field parsed as a signed integer.
    pub fn get_int(&self, key: impl AsRef<str>) -> Result<i64> {
        let (namespace, field) = split_key(key.as_ref());
        self.get_int_ns(namespace, field)
    }

    /// Fetch a field from an explicit namespace, parsed as a signed integer.
    pub fn get_int_ns(&self, namespace: &str, field: &str) -> Result<i64> {
        let value = self.get_str_ns(namespace, field)?;
        value.parse().map_err(|_| GuanoError::NumberFormat {
            field: display_key(namespace, field),
            value: value.to_string(),
        })
    }

    /// Fetch a field parsed as a float.
    pub fn get_float(&self, key: impl AsRef<str>) -> Result<f64> {
        let (namespace, field) = split_key(key.as_ref());
        self.get_float_ns(namespace, field)
    }

    /// Fetch a field from an explicit namespace, parsed as a float.
    pub fn get_float_ns(&self, namespace: &str, field: &str) -> Result<f64> {
        let value = self.get_str_ns(namespace, field)?;
        value.parse().map_err(|_| GuanoError::NumberFormat {
            field: display_key(namespace, field),
            value: value.to_string(),
        })
    }

    /// Store a text value; the key may carry a `namespace|` prefix.
    pub fn set_str(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        let (namespace, field) = split_key(key.as_ref());
        self.set_str_ns(namespace, field, value);
    }

    /// Store a text value under an explicit namespace.
    pub fn set_str_ns(&mut self, namespace: &str, field: &str, value: impl Into<String>) {
        self.table
            .entry(namespace.to_string())
            .or_default()
            .insert(field.to_string(), value.into());
    }

    /// Store an integer as its decimal rendering.
    pub fn set_int(&mut self, key: impl AsRef<str>, value: i64) {
        self.set_str(key, value.to_string());
    }

    /// Store an integer under an explicit namespace.
    pub fn set_int_ns(&mut self, namespace: &str, field: &str, value: i64) {
        self.set_str_ns(namespace, field, value.to_string());
    }

    /// Store a float as its default (shortest round-trippable) rendering.
    pub fn set_float(&mut self, key: impl AsRef<str>, value: f64) {
        self.set_str(key, value.to_string());
    }

    /// Store a float under an explicit namespace.
    pub fn set_float_ns(&mut self, namespace: &str, field: &str, value: f64) {
        self.set_str_ns(namespace, field, value.to_string());
    }
}
