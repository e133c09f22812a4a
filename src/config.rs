//! Configuration loader plus strongly typed settings structures.
//!
//! Everything lives in one `config.toml`: the `[pager]` table configures the
//! paging controller, `[ui]` the terminal host, and `[[modules]]` declares the
//! host's dashboard modules. A default file is embedded at compile time and
//! extracted into the profile directory on first run.

use crate::data::{ModuleInfo, ScreenDefinition};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "SCREEN_PAGER_DIR";

/// Top-level configuration object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub modules: Vec<ModuleDef>,
    #[serde(skip)] // Set at runtime from the CLI
    pub profile: Option<String>,
}

/// Paging controller settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    #[serde(default)]
    pub screens: Vec<ScreenDefinition>,
    #[serde(default = "default_animation_duration")]
    pub animation_duration: u64, // ms
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32, // px
    #[serde(default)]
    pub auto_rotate: bool,
    #[serde(default = "default_auto_rotate_delay")]
    pub auto_rotate_delay: u64, // ms
    #[serde(default = "default_true")]
    pub show_indicators: bool,
    #[serde(default = "default_true")]
    pub enable_keyboard_nav: bool,
    #[serde(default)]
    pub debug: bool,
}

impl PagerConfig {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration)
    }

    pub fn auto_rotate_delay(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_delay)
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            screens: Vec::new(),
            animation_duration: default_animation_duration(),
            swipe_threshold: default_swipe_threshold(),
            auto_rotate: false,
            auto_rotate_delay: default_auto_rotate_delay(),
            show_indicators: true,
            enable_keyboard_nav: true,
            debug: false,
        }
    }
}

/// Terminal host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64, // Event poll timeout in milliseconds (lower = higher FPS, higher CPU)
    // Terminal cells are converted to px so gesture thresholds keep their meaning
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: f32,
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: f32,
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            show_clock: true,
        }
    }
}

/// A dashboard module hosted by the terminal frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Static body text; `clock` modules render the time instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ModuleDef {
    pub fn info(&self) -> ModuleInfo {
        ModuleInfo {
            name: self.name.clone(),
            tags: self.tags.clone(),
            position: self.position.clone(),
            hidden: false,
        }
    }
}

fn default_animation_duration() -> u64 {
    300
}

fn default_swipe_threshold() -> f32 {
    50.0
}

fn default_auto_rotate_delay() -> u64 {
    10_000
}

fn default_true() -> bool {
    true
}

fn default_poll_timeout_ms() -> u64 {
    16 // ~60 FPS
}

fn default_cell_width_px() -> f32 {
    8.0
}

fn default_cell_height_px() -> f32 {
    16.0
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config")
    }

    /// The embedded default configuration
    pub fn embedded_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load configuration from an explicit file
    pub fn load_from_path(path: &Path, profile: Option<&str>) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        config.profile = profile.map(|s| s.to_string());
        Ok(config)
    }

    /// Load configuration for a profile, extracting defaults on first run
    pub fn load_with_options(profile: Option<&str>) -> Result<Self> {
        // Idempotent - only creates missing files
        Self::extract_defaults(profile)?;

        let config_path = Self::config_path(profile)?;
        Self::load_from_path(&config_path, profile)
    }

    fn extract_defaults(profile: Option<&str>) -> Result<()> {
        let config_path = Self::config_path(profile)?;
        if config_path.exists() {
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create profile directory: {:?}", parent))?;
        }
        fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write default config")?;
        tracing::info!("Extracted default config to {:?}", config_path);
        Ok(())
    }

    /// Get the base directory (~/.screen-pager/)
    /// Can be overridden with the SCREEN_PAGER_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV_VAR) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".screen-pager"))
    }

    /// Returns: ~/.screen-pager/{profile}/ or ~/.screen-pager/default/
    fn profile_dir(profile: Option<&str>) -> Result<PathBuf> {
        let profile_name = profile.unwrap_or("default");
        Ok(Self::base_dir()?.join(profile_name))
    }

    /// Get path to config.toml for a profile
    pub fn config_path(profile: Option<&str>) -> Result<PathBuf> {
        Ok(Self::profile_dir(profile)?.join("config.toml"))
    }

    /// Module snapshots in declaration order
    pub fn module_infos(&self) -> Vec<ModuleInfo> {
        self.modules.iter().map(ModuleDef::info).collect()
    }
}
