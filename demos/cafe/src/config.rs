//! Configuration loading: defaults, then the TOML file, then CLI overrides.

use std::path::Path;

use anyhow::{Context, Result};
use cafe_core::CafeConfig;
use tracing::info;

/// Read `path` if given, otherwise start from defaults.
pub fn load(path: Option<&Path>) -> Result<CafeConfig> {
    let Some(path) = path else {
        return Ok(CafeConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = parse(&text).with_context(|| format!("parsing config file {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn parse(text: &str) -> Result<CafeConfig> {
    let config: CafeConfig = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}
