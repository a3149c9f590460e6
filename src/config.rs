use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Layering: defaults, then the global file (or an explicit one), then env.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env_string("SKILL_CATALOG_CONFIG").map(PathBuf::from));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CatalogError::MissingConfig(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            debug!("no config directory; using defaults");
            return Ok(None);
        };
        Self::load_patch(&dir.join("skill-catalog/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CatalogError::Config(format!("parse config {}: {err}", path.display())))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.source {
            self.source.merge(patch);
        }
        if let Some(patch) = patch.showcase {
            self.showcase.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SKILL_CATALOG_BASE_URL") {
            self.source.base_url = non_empty(value);
        }
        if let Some(value) = env_string("SKILL_CATALOG_DATA_FILE") {
            self.source.data_file = non_empty(value).map(PathBuf::from);
        }
        if let Some(value) = env_duration("SKILL_CATALOG_TIMEOUT")? {
            self.source.timeout = value;
        }
        if env_bool("SKILL_CATALOG_NO_EMBEDDED").unwrap_or(false) {
            self.source.use_embedded = false;
        }
        if robot_from_env() {
            self.output.robot = true;
        }
        if std::env::var_os("NO_COLOR").is_some() {
            self.output.color = false;
        }
        if let Some(value) = env_u64("SKILL_CATALOG_SPINNER_INTERVAL_MS")? {
            self.showcase.spinner_interval_ms = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Site root serving `data/skills.json`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    #[serde(default = "default_true")]
    pub use_embedded: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            data_file: None,
            timeout: default_timeout(),
            use_embedded: true,
        }
    }
}

impl SourceConfig {
    fn merge(&mut self, patch: SourcePatch) {
        if let Some(value) = patch.base_url {
            self.base_url = non_empty(value);
        }
        if let Some(value) = patch.data_file {
            self.data_file = Some(value);
        }
        if let Some(value) = patch.timeout {
            self.timeout = value;
        }
        if let Some(value) = patch.use_embedded {
            self.use_embedded = value;
        }
    }
}

/// Timing of the typewriter/spinner animation, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub spinner_interval_ms: u64,
    pub type_delay_min_ms: u64,
    pub type_delay_max_ms: u64,
    pub hold_ms: u64,
    pub erase_delay_ms: u64,
    pub gap_ms: u64,
    pub start_delay_ms: u64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            spinner_interval_ms: 100,
            type_delay_min_ms: 50,
            type_delay_max_ms: 80,
            hold_ms: 1500,
            erase_delay_ms: 30,
            gap_ms: 300,
            start_delay_ms: 1000,
        }
    }
}

impl ShowcaseConfig {
    fn merge(&mut self, patch: ShowcasePatch) {
        if let Some(value) = patch.spinner_interval_ms {
            self.spinner_interval_ms = value;
        }
        if let Some(value) = patch.type_delay_min_ms {
            self.type_delay_min_ms = value;
        }
        if let Some(value) = patch.type_delay_max_ms {
            self.type_delay_max_ms = value;
        }
        if let Some(value) = patch.hold_ms {
            self.hold_ms = value;
        }
        if let Some(value) = patch.erase_delay_ms {
            self.erase_delay_ms = value;
        }
        if let Some(value) = patch.gap_ms {
            self.gap_ms = value;
        }
        if let Some(value) = patch.start_delay_ms {
            self.start_delay_ms = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    /// Card wrap width; terminal width when unset.
    #[serde(default)]
    pub wrap_width: Option<usize>,
    #[serde(default)]
    pub robot: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            wrap_width: None,
            robot: false,
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.color {
            self.color = value;
        }
        if let Some(value) = patch.wrap_width {
            self.wrap_width = Some(value);
        }
        if let Some(value) = patch.robot {
            self.robot = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub source: Option<SourcePatch>,
    pub showcase: Option<ShowcasePatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SourcePatch {
    pub base_url: Option<String>,
    pub data_file: Option<PathBuf>,
    #[serde(default, with = "humantime_serde")]
    pub timeout: Option<Duration>,
    pub use_embedded: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ShowcasePatch {
    pub spinner_interval_ms: Option<u64>,
    pub type_delay_min_ms: Option<u64>,
    pub type_delay_max_ms: Option<u64>,
    pub hold_ms: Option<u64>,
    pub erase_delay_ms: Option<u64>,
    pub gap_ms: Option<u64>,
    pub start_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub color: Option<bool>,
    pub wrap_width: Option<usize>,
    pub robot: Option<bool>,
}

const fn default_timeout() -> Duration {
    Duration::from_secs(5)
}

const fn default_true() -> bool {
    true
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Robot mode requested through `SKILL_CATALOG_ROBOT`.
#[must_use]
pub fn robot_from_env() -> bool {
    env_bool("SKILL_CATALOG_ROBOT").unwrap_or(false)
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            CatalogError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_duration(key: &str) -> Result<Option<Duration>> {
    match std::env::var(key) {
        Ok(value) => humantime_serde::re::humantime::parse_duration(&value)
            .map(Some)
            .map_err(|err| CatalogError::Config(format!("invalid {key} value {value}: {err}"))),
        Err(_) => Ok(None),
    }
}
