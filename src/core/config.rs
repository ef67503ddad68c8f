//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_keypad: Option<bool>,
    pub accent_color: Option<String>,
    pub error_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_ACCENT_COLOR: Color = Color::Cyan;
pub const DEFAULT_ERROR_COLOR: Color = Color::Red;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    /// None when no home directory is known and nothing was configured.
    pub log_file: Option<PathBuf>,
    pub show_keypad: bool,
    pub accent_color: Color,
    pub error_color: Color,
    /// Settings that were ignored while resolving. Resolution runs before
    /// the logger exists, so `main` logs these once it is up.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            log_file: None,
            show_keypad: true,
            accent_color: DEFAULT_ACCENT_COLOR,
            error_color: DEFAULT_ERROR_COLOR,
            warnings: Vec::new(),
        }
    }
}

/// Settings given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub no_keypad: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.tally/`.
pub fn tally_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally"))
}

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    tally_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.tally/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`.
pub fn load_config() -> Result<TallyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TallyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TallyConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<TallyConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TallyConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Tally Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # off, error, warn, info, debug, trace
# log_file = "/home/me/.tally/tally.log"

# [display]
# show_keypad = true
# accent_color = "cyan"              # color name or "#rrggbb"
# error_color = "red"
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
pub fn resolve(config: &TallyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with environment lookups going through `env`.
pub fn resolve_with_env(
    config: &TallyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("TALLY_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .map(|s| parse_level(&s, &mut warnings))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → ~/.tally/tally.log
    let log_file = env("TALLY_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .or_else(|| tally_dir().map(|d| d.join("tally.log")));

    let show_keypad = !cli.no_keypad && config.display.show_keypad.unwrap_or(true);

    let accent_color = parse_color(
        config.display.accent_color.as_deref(),
        DEFAULT_ACCENT_COLOR,
        &mut warnings,
    );
    let error_color = parse_color(
        config.display.error_color.as_deref(),
        DEFAULT_ERROR_COLOR,
        &mut warnings,
    );

    ResolvedConfig {
        log_level,
        log_file,
        show_keypad,
        accent_color,
        error_color,
        warnings,
    }
}

fn parse_level(value: &str, warnings: &mut Vec<String>) -> LevelFilter {
    value.trim().parse().unwrap_or_else(|_| {
        warnings.push(format!(
            "Unknown log level {:?}, using {}",
            value, DEFAULT_LOG_LEVEL
        ));
        DEFAULT_LOG_LEVEL
    })
}

fn parse_color(value: Option<&str>, default: Color, warnings: &mut Vec<String>) -> Color {
    let Some(value) = value else {
        return default;
    };
    value.trim().parse().unwrap_or_else(|_| {
        warnings.push(format!("Unknown color {:?}, using {}", value, default));
        default
    })
}
