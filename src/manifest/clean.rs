// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment cleanup: image rewrite and OTEL env removal

use crate::constants::containers::{SOURCE_IMAGE, STRIPPED_ENV_PREFIX, TARGET_IMAGE_PREFIX};
use crate::manifest::document;
use serde_yaml::Value;

/// Rewrite demo images and strip `OTEL_` env vars from every container of a Deployment.
///
/// Paths that are missing or of the wrong shape are left alone. Running this
/// twice is the same as running it once.
pub fn clean_deployment(doc: &mut Value) {
    let target_image = format!("{}{}", TARGET_IMAGE_PREFIX, document::name(doc));

    let Some(containers) = document::containers_mut(doc) else {
        return;
    };

    for container in containers.iter_mut() {
        rewrite_image(container, &target_image);
        strip_env(container);
    }
}

fn rewrite_image(container: &mut Value, target_image: &str) {
    if let Some(image) = container.get_mut("image") {
        if image.as_str().is_some_and(|s| s.contains(SOURCE_IMAGE)) {
            *image = Value::String(target_image.to_string());
        }
    }
}

fn strip_env(container: &mut Value) {
    if let Some(env) = container.get_mut("env").and_then(Value::as_sequence_mut) {
        env.retain(|var| {
            !var.get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.starts_with(STRIPPED_ENV_PREFIX))
        });
    }
}
