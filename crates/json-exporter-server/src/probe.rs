//! Upstream prober.
//!
//! One GET per scrape: the whole body is buffered and parsed as generic JSON.
//! The `reqwest::Client` is shared across scrapes for connection pooling only;
//! nothing about a previous probe influences the next one.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use json_exporter_core::error::{ExporterError, Result};

use crate::config::ExporterConfig;

#[derive(Clone)]
pub struct Prober {
    client: Client,
    target: Url,
}

impl Prober {
    /// Build the pooled client for the configured target.
    pub fn new(cfg: &ExporterConfig) -> Result<Self> {
        let target = cfg.target_url()?;

        let mut builder = Client::builder()
            .pool_max_idle_per_host(cfg.probe.max_idle_connections)
            .danger_accept_invalid_certs(cfg.tls.insecure_skip_verify);
        if let Some(ms) = cfg.probe.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        if cfg.tls.insecure_skip_verify {
            tracing::warn!(target_url = %target, "upstream TLS certificate verification disabled");
        }

        let client = builder
            .build()
            .map_err(|e| ExporterError::Config(format!("build http client failed: {e}")))?;

        Ok(Self { client, target })
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Fetch and parse the upstream document. No retries.
    pub async fn probe(&self) -> Result<Value> {
        let resp = self
            .client
            .get(self.target.clone())
            .send()
            .await
            .map_err(|e| ExporterError::Connection(error_chain(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::HttpStatus {
                status: status.as_u16(),
                url: self.target.to_string(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ExporterError::BodyRead(error_chain(&e)))?;

        serde_json::from_slice(&body).map_err(|e| ExporterError::Parse(e.to_string()))
    }
}

/// reqwest keeps the useful part (refused, dns, tls) in the source chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
