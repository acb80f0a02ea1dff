// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML emission that stays readable by YAML 1.1 consumers.
//!
//! `serde_yaml` quotes strings by YAML 1.2 rules, so `on`, `yes`, `n` and
//! friends come out as plain scalars that kubectl reads back as booleans.
//! Such strings are swapped for unique placeholders before serializing and
//! replaced with single-quoted scalars afterwards.

use crate::error::{CleanerError, Result};
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

/// Strings a YAML 1.1 parser resolves to booleans
const YAML11_BOOLS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE", "false",
    "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF",
];

const PLACEHOLDER_PREFIX: &str = "__manifest_cleaner_yaml11_";

/// Serialize a document, quoting every YAML 1.1 boolean-like string
pub fn to_string(doc: &Value) -> Result<String> {
    let mut quoted = Vec::new();
    let masked = mask(doc.clone(), &mut quoted);

    let mut yaml = serde_yaml::to_string(&masked).map_err(CleanerError::Serialize)?;
    for (index, original) in quoted.iter().enumerate() {
        yaml = yaml.replacen(&placeholder(index), &format!("'{original}'"), 1);
    }
    Ok(yaml)
}

fn is_yaml11_bool(s: &str) -> bool {
    YAML11_BOOLS.contains(&s)
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}__")
}

fn mask(value: Value, quoted: &mut Vec<String>) -> Value {
    match value {
        Value::String(s) if is_yaml11_bool(&s) => {
            let marker = placeholder(quoted.len());
            quoted.push(s);
            Value::String(marker)
        }
        Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(|v| mask(v, quoted)).collect())
        }
        Value::Mapping(map) => {
            let mut masked = Mapping::with_capacity(map.len());
            for (k, v) in map {
                let k = mask(k, quoted);
                let v = mask(v, quoted);
                masked.insert(k, v);
            }
            Value::Mapping(masked)
        }
        Value::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            Value::Tagged(Box::new(TaggedValue {
                tag,
                value: mask(value, quoted),
            }))
        }
        other => other,
    }
}
