//! Shared application state.
//!
//! Holds only immutable config and the pooled prober. Scrape registries are
//! per-request values and never live here.

use std::sync::Arc;

use json_exporter_core::error::Result;

use crate::config::ExporterConfig;
use crate::probe::Prober;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    prober: Prober,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report a bad target instead of panicking.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let prober = Prober::new(&cfg)?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, prober }),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.inner.cfg.prefix
    }

    pub fn prober(&self) -> &Prober {
        &self.inner.prober
    }
}
