// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Field accessors for untyped manifest documents

use serde_yaml::Value;

/// The document's `kind`, or an empty string when absent
pub fn kind(doc: &Value) -> &str {
    doc.get("kind").and_then(Value::as_str).unwrap_or_default()
}

/// The document's `metadata.name`, or an empty string when absent
pub fn name(doc: &Value) -> &str {
    doc.get("metadata")
        .and_then(|m| m.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// `kind` for progress output, with `Unknown` standing in for a missing value
pub fn display_kind(doc: &Value) -> &str {
    match kind(doc) {
        "" => "Unknown",
        k => k,
    }
}

/// `metadata.name` for progress output, with `unnamed` standing in for a missing value
pub fn display_name(doc: &Value) -> &str {
    match name(doc) {
        "" => "unnamed",
        n => n,
    }
}

/// Mutable access to `spec.template.spec.containers`, if present and a sequence
pub fn containers_mut(doc: &mut Value) -> Option<&mut Vec<Value>> {
    doc.get_mut("spec")?
        .get_mut("template")?
        .get_mut("spec")?
        .get_mut("containers")?
        .as_sequence_mut()
}
