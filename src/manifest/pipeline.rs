// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read, filter and write a multi-document manifest

use crate::config::Config;
use crate::constants::kinds;
use crate::constants::output::{DOCUMENT_SEPARATOR, HEADER};
use crate::error::{CleanerError, Result};
use crate::manifest::{clean_deployment, document, matches_remove_pattern, should_keep, yaml};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Kind and name of a resource, as reported in progress output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    pub kind: String,
    pub name: String,
}

impl ResourceId {
    fn of(doc: &Value) -> Self {
        ResourceId {
            kind: document::display_kind(doc).to_string(),
            name: document::display_name(doc).to_string(),
        }
    }
}

/// Outcome of a filtering pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Kept resources in manifest order
    pub kept: Vec<ResourceId>,
    /// Resources dropped because their name matched an observability pattern
    pub removed_observability: Vec<ResourceId>,
    /// Total number of dropped resources, including silently skipped kinds
    pub removed: usize,
}

impl FilterReport {
    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }

    pub fn removed_count(&self) -> usize {
        self.removed
    }
}

/// Read the input manifest, filter it and write the cleaned result
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &Config) -> Result<FilterReport> {
    info!("Reading {}...", config.input.display());
    let documents = read_documents(&config.input)?;
    info!("Found {} resources", documents.len());

    let (kept, report) = filter_documents(documents);
    info!(
        "Kept {} resources, removed {} resources",
        report.kept_count(),
        report.removed_count()
    );

    info!("Writing cleaned manifest to {}...", config.output.display());
    write_documents(&config.output, &kept)?;
    info!("Done! Cleaned manifest saved to {}", config.output.display());

    Ok(report)
}

/// Load every non-empty document from a manifest file
pub fn read_documents(path: &Path) -> Result<Vec<Value>> {
    let contents = fs::read_to_string(path).map_err(|source| CleanerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_documents(&contents)
}

/// Parse a YAML stream, skipping null and empty documents
pub fn parse_documents(input: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for de in serde_yaml::Deserializer::from_str(input) {
        let doc = Value::deserialize(de).map_err(CleanerError::Parse)?;
        if !doc.is_null() {
            documents.push(doc);
        }
    }
    Ok(documents)
}

/// Keep the documents that pass `should_keep`, cleaning Deployments on the way
pub fn filter_documents(documents: Vec<Value>) -> (Vec<Value>, FilterReport) {
    let mut kept = Vec::new();
    let mut report = FilterReport::default();

    for mut doc in documents.into_iter().filter(|d| !d.is_null()) {
        if should_keep(&doc) {
            if document::kind(&doc) == kinds::DEPLOYMENT {
                clean_deployment(&mut doc);
            }

            let id = ResourceId::of(&doc);
            info!(kind = %id.kind, name = %id.name, "Keeping: {} - {}", id.kind, id.name);
            report.kept.push(id);
            kept.push(doc);
        } else {
            report.removed += 1;
            let id = ResourceId::of(&doc);
            if matches_remove_pattern(document::name(&doc)) {
                info!(kind = %id.kind, name = %id.name, "Removing: {} - {}", id.kind, id.name);
                report.removed_observability.push(id);
            } else {
                debug!(kind = %id.kind, name = %id.name, "Skipping: {} - {}", id.kind, id.name);
            }
        }
    }

    (kept, report)
}

/// Render the cleaned manifest: header comments, then each document behind a separator
pub fn render_documents(documents: &[Value]) -> Result<String> {
    let mut out = String::new();
    for line in HEADER {
        out.push_str(line);
        out.push('\n');
    }

    for doc in documents {
        let serialized = yaml::to_string(doc)?;
        let body = strip_leading_separator(&serialized);

        out.push_str(DOCUMENT_SEPARATOR);
        out.push('\n');
        out.push_str(body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }

    Ok(out)
}

/// Write the rendered manifest to `path`
pub fn write_documents(path: &Path, documents: &[Value]) -> Result<()> {
    let rendered = render_documents(documents)?;
    fs::write(path, rendered).map_err(|source| CleanerError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_leading_separator(yaml: &str) -> &str {
    yaml.strip_prefix(DOCUMENT_SEPARATOR)
        .map(|rest| rest.trim_start_matches([' ', '\t']))
        .and_then(|rest| rest.strip_prefix('\n'))
        .unwrap_or(yaml)
}
