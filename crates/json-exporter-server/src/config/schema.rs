use std::net::SocketAddr;

use reqwest::Url;
use serde::Deserialize;
use json_exporter_core::error::{ExporterError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    /// Address to serve `/metrics` on. `:PORT` binds all interfaces.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Prepended verbatim to every flattened name.
    #[serde(default)]
    pub prefix: String,

    /// Upstream URL returning the JSON document.
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub tls: TlsSection,

    #[serde(default)]
    pub probe: ProbeSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            prefix: String::new(),
            target: String::new(),
            tls: TlsSection::default(),
            probe: ProbeSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target.is_empty() {
            return Err(ExporterError::Config("target must be set".into()));
        }
        self.target_url()?;
        self.listen_addr()?;

        if !is_valid_prefix(&self.prefix) {
            return Err(ExporterError::Config(format!(
                "prefix {:?} may only contain [a-zA-Z0-9_:] and must not start with a digit",
                self.prefix
            )));
        }

        self.probe.validate()?;
        Ok(())
    }

    /// Parsed upstream URL (http or https only).
    pub fn target_url(&self) -> Result<Url> {
        let url = Url::parse(&self.target)
            .map_err(|e| ExporterError::Config(format!("invalid target {:?}: {e}", self.target)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ExporterError::Config(format!(
                "target scheme must be http or https, got {other:?}"
            ))),
        }
    }

    /// Socket address to bind, accepting the `:PORT` shorthand.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let listen = if self.listen.starts_with(':') {
            format!("0.0.0.0{}", self.listen)
        } else {
            self.listen.clone()
        };
        listen.parse().map_err(|e| {
            ExporterError::Config(format!("invalid listen address {:?}: {e}", self.listen))
        })
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TlsSection {
    /// Accept any upstream certificate.
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    /// Whole-request timeout for the upstream GET. Unset means wait forever.
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default = "default_max_idle_connections")]
    pub max_idle_connections: usize,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            max_idle_connections: default_max_idle_connections(),
        }
    }
}

impl ProbeSection {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == Some(0) {
            return Err(ExporterError::Config(
                "probe.timeout_ms must be greater than 0 when set".into(),
            ));
        }
        if self.max_idle_connections == 0 {
            return Err(ExporterError::Config(
                "probe.max_idle_connections must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    ":9116".into()
}
fn default_max_idle_connections() -> usize {
    100
}

/// A prefix must keep every prefixed name a valid metric name.
fn is_valid_prefix(prefix: &str) -> bool {
    match prefix.chars().next() {
        None => true,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':'),
    }
}
