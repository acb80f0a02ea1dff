// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Structured JSON logger.
//!
//! Every line carries the level name unchanged under `level`, alongside
//! `timestamp`, `message` and any event fields.

use crate::error::{CleanerError, Result};
use tracing::Dispatch;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// A fully configured logger, built once and either installed process-wide
/// or scoped with `tracing::dispatcher::with_default`.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stdout. `RUST_LOG` takes precedence over `level`.
    pub fn new(level: &str) -> Self {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        Self::build(resolve_filter(level, rust_log.as_deref()), std::io::stdout)
    }

    /// Logger writing to a custom sink at exactly `level`
    pub fn with_writer<W>(level: &str, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(EnvFilter::new(level), make_writer)
    }

    fn build<W>(filter: EnvFilter, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_writer(make_writer);
        let subscriber = tracing_subscriber::registry().with(filter).with(layer);

        Logger {
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Make this logger the process-wide default. Fails if one is already set.
    pub fn install(self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch)
            .map_err(|e| CleanerError::Logging(e.to_string()))
    }
}

/// Non-empty, well-formed `RUST_LOG` directives win over the configured level
fn resolve_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

/// Build the stdout logger and install it for the whole process
pub fn init(level: &str) -> Result<()> {
    Logger::new(level).install()
}
