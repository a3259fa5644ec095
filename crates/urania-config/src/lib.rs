use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried, in order, when no explicit path is given.
pub const SEARCH_PATHS: [&str; 3] = [
    "urania.toml",
    "configs/urania.toml",
    "../../configs/urania.toml",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EphemerisBackend {
    /// Built-in fallback; needs no data files
    MeanElements,
    /// Swiss Ephemeris: data files when present, Moshier mode otherwise
    #[default]
    Swiss,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    pub backend: EphemerisBackend,
    /// Swiss Ephemeris data directory (swiss backend only)
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UraniaConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    pub ephemeris: EphemerisConfig,
}

impl Default for UraniaConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: true,
            ephemeris: EphemerisConfig::default(),
        }
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<UraniaConfig> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the first of [`SEARCH_PATHS`]
/// that can be read wins; if none exists the defaults apply.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<UraniaConfig> {
    load_config_with_source(explicit).map(|(config, _)| config)
}

/// Like [`load_config`], also returning the file the configuration came
/// from (`None` when the defaults were used).
///
/// Callers that initialise logging from the loaded `log_level` report the
/// source themselves once the logger is up.
pub fn load_config_with_source(
    explicit: Option<&Path>,
) -> anyhow::Result<(UraniaConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = parse_config(&text).with_context(|| format!("in {}", path.display()))?;
        return Ok((config, Some(path.to_path_buf())));
    }

    for p in &SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            log::debug!("Loaded config from {p}");
            let config = parse_config(&text).with_context(|| format!("in {p}"))?;
            return Ok((config, Some(PathBuf::from(p))));
        }
    }
    log::debug!("No urania.toml found in {:?}; using defaults", SEARCH_PATHS);
    Ok((UraniaConfig::default(), None))
}
