// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest filtering: classification, deployment cleanup and the read/write pipeline.

pub mod clean;
pub mod document;
pub mod filter;
pub mod pipeline;
pub mod yaml;

pub use clean::clean_deployment;
pub use filter::{matches_remove_pattern, should_keep};
pub use pipeline::{run, FilterReport};
