//! Exporter config loader (strict parsing).
//!
//! Settings come from an optional YAML file, then command-line flags on top.
//! Validation runs once on the merged result.

pub mod cli;
pub mod schema;

use std::fs;
use std::path::Path;

use json_exporter_core::error::{ExporterError, Result};

pub use cli::Args;
pub use schema::{ExporterConfig, ProbeSection, TlsSection};

/// Read and validate a config file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let cfg = read_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse and validate YAML.
pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Parse YAML without validating, for layering command-line flags on top.
pub fn parse_str(s: &str) -> Result<ExporterConfig> {
    serde_yaml::from_str(s).map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))
}

pub(crate) fn read_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        ExporterError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    parse_str(&s)
}
