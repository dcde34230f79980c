//! Per-scrape gauge registry and the probe → flatten → render cycle.
//!
//! A [`ScrapeRegistry`] lives for exactly one `/metrics` request. It is created
//! empty, filled from the flattened document, rendered, then dropped. It is
//! never stored in shared state, so concurrent scrapes cannot observe or
//! mutate each other's gauges.

use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};
use serde_json::Value;

use json_exporter_core::error::{ExporterError, Result};
use json_exporter_core::flatten::flatten;

use crate::probe::Prober;

/// Help text attached to every exported gauge.
pub const HELP: &str = "Retrieved value";

/// Content type of [`ScrapeRegistry::render`] output.
pub const CONTENT_TYPE: &str = prometheus::TEXT_FORMAT;

pub struct ScrapeRegistry {
    registry: Registry,
    prefix: String,
    registered: usize,
    skipped: usize,
}

impl ScrapeRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            registry: Registry::new(),
            prefix: prefix.into(),
            registered: 0,
            skipped: 0,
        }
    }

    /// Register one gauge named `prefix + name` and set it.
    ///
    /// Names that cannot appear in the exposition format are skipped with a
    /// warning. A name registered twice is an error.
    pub fn record(&mut self, name: &str, value: f64) -> Result<()> {
        let full = format!("{}{}", self.prefix, name);
        if !is_valid_metric_name(&full) {
            tracing::warn!(metric = %full, "not a valid metric name, skipped");
            self.skipped += 1;
            return Ok(());
        }

        let gauge = Gauge::with_opts(Opts::new(full.as_str(), HELP))
            .map_err(|e| ExporterError::Registration(format!("{full}: {e}")))?;
        gauge.set(value);

        self.registry
            .register(Box::new(gauge))
            .map_err(|e| match e {
                prometheus::Error::AlreadyReg => {
                    ExporterError::Registration(format!("duplicate metric name {full:?}"))
                }
                other => ExporterError::Registration(format!("{full}: {other}")),
            })?;
        self.registered += 1;
        Ok(())
    }

    /// Flatten `doc` into this registry. Stops recording at the first error.
    pub fn populate(&mut self, doc: &Value) -> Result<()> {
        let mut failure = None;
        flatten(doc, &mut |name: &str, value: f64| {
            if failure.is_none() {
                if let Err(e) = self.record(name, value) {
                    failure = Some(e);
                }
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Serialize to the Prometheus text format, consuming the registry.
    pub fn render(self) -> Result<String> {
        let families = self.registry.gather();
        let mut buf = Vec::new();
        TextEncoder::new()
            .encode(&families, &mut buf)
            .map_err(|e| ExporterError::Encode(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| ExporterError::Encode(e.to_string()))
    }
}

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn is_valid_metric_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':')
}

/// Run one full scrape against the configured upstream.
pub async fn scrape(prober: &Prober, prefix: &str) -> Result<String> {
    tracing::info!(target_url = %prober.target(), prefix = %prefix, "probing");
    let doc = prober.probe().await?;

    let mut registry = ScrapeRegistry::new(prefix);
    registry.populate(&doc)?;
    tracing::debug!(
        gauges = registry.registered(),
        skipped = registry.skipped(),
        "flattened upstream document"
    );

    registry.render()
}
