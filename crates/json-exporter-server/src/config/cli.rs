//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use json_exporter_core::error::Result;

use super::schema::ExporterConfig;

#[derive(Parser, Debug)]
#[command(
    name = "json-exporter",
    about = "Probe a JSON endpoint and expose its numbers and booleans as Prometheus gauges"
)]
pub struct Args {
    /// Upstream URL to probe. Exactly one is expected; extras are ignored.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// The address to listen on for HTTP requests [default: :9116].
    #[arg(short = 'a', long = "listen-address", value_name = "ADDR")]
    pub listen_address: Option<String>,

    /// Prefix to add to parsed metric names.
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// YAML config file. Flags given on the command line win.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip upstream TLS certificate verification.
    #[arg(long)]
    pub insecure_skip_verify: bool,

    /// Abort a probe that takes longer than this.
    #[arg(long, value_name = "MS")]
    pub probe_timeout_ms: Option<u64>,

    /// Idle upstream connections kept per host [default: 100].
    #[arg(long, value_name = "N")]
    pub max_idle_connections: Option<usize>,
}

impl Args {
    /// Merge flags over the optional config file and validate the result.
    pub fn into_config(self) -> Result<ExporterConfig> {
        let Args {
            targets,
            listen_address,
            prefix,
            config,
            insecure_skip_verify,
            probe_timeout_ms,
            max_idle_connections,
        } = self;

        let mut cfg = match config {
            Some(path) => super::read_file(&path)?,
            None => ExporterConfig::default(),
        };

        if let Some(listen) = listen_address {
            cfg.listen = listen;
        }
        if let Some(prefix) = prefix {
            cfg.prefix = prefix;
        }
        if insecure_skip_verify {
            cfg.tls.insecure_skip_verify = true;
        }
        if let Some(ms) = probe_timeout_ms {
            cfg.probe.timeout_ms = Some(ms);
        }
        if let Some(n) = max_idle_connections {
            cfg.probe.max_idle_connections = n;
        }

        if let Some((first, rest)) = targets.split_first() {
            if !rest.is_empty() {
                tracing::warn!(
                    expected = 1,
                    got = targets.len(),
                    extra = ?rest,
                    "too many targets received, using the first"
                );
            }
            cfg.target = first.clone();
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
