// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for building manifest documents.

use serde_yaml::Value;

/// Parse a single YAML document, panicking on invalid input
pub fn parse(yaml: &str) -> Value {
    serde_yaml::from_str(yaml).expect("test fixture must be valid YAML")
}

/// Create a minimal resource with only kind and name
pub fn resource(kind: &str, name: &str) -> Value {
    to_value(serde_json::json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": {
            "name": name
        }
    }))
}

/// Create a Deployment with a single container using the given image and env var names
pub fn deployment(name: &str, image: &str, env: &[&str]) -> Value {
    let env: Vec<_> = env
        .iter()
        .map(|var| serde_json::json!({ "name": var, "value": "x" }))
        .collect();

    to_value(serde_json::json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name
        },
        "spec": {
            "template": {
                "spec": {
                    "containers": [{
                        "name": name,
                        "image": image,
                        "env": env
                    }]
                }
            }
        }
    }))
}

fn to_value(json: serde_json::Value) -> Value {
    serde_yaml::to_value(json).expect("JSON fixtures always convert to YAML")
}
