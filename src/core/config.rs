//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.paneboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaneboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub feed_file: Option<String>,
    pub log_level: Option<String>,
}

/// Color strings, parsed by the TUI layer (`"205"`, `"cyan"`, `"#ff00aa"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub focused: Option<String>,
    pub neutral: Option<String>,
    pub heading: Option<String>,
    pub cursor: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub meta: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "paneboard.log";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None = built-in demo feed.
    pub feed_file: Option<PathBuf>,
    pub log_level: log::LevelFilter,
    pub theme: ThemeConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.paneboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".paneboard").join("config.toml"))
}

/// Load config from `~/.paneboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PaneboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PaneboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PaneboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PaneboardConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PaneboardConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: PaneboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Paneboard Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# feed_file = "/path/to/feed.toml"   # Or set PANEBOARD_FEED; .json also accepted
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [theme]
# Colors accept names ("cyan"), 256-color indices ("205") or hex ("#ff00aa").
# focused = "205"                    # Border of the focused pane
# neutral = "63"                     # Border of every other pane
# heading = "205"
# cursor = "205"
# title = "86"
# category = "33"
# meta = "241"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_feed` is the `--feed` flag (None = not specified).
pub fn resolve(config: &PaneboardConfig, cli_feed: Option<&Path>) -> ResolvedConfig {
    // Feed file: CLI → env → config → demo
    let feed_file = cli_feed
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("PANEBOARD_FEED").ok().map(PathBuf::from))
        .or_else(|| config.general.feed_file.as_ref().map(PathBuf::from));

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        feed_file,
        log_level,
        theme: config.theme.clone(),
    }
}
