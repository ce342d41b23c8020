//! Configuration management for Frameless
//!
//! Handles loading and saving the chrome settings as TOML.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FramelessError, FramelessResult};

/// Largest accepted size, in logical pixels, for any configured length
pub const MAX_EXTENT: i32 = 10_000;

/// Chrome configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Remove the native title bar and border
    pub frameless: bool,
    /// Resize border thickness in logical pixels
    pub resize_area_width: i32,
    /// Content margin in the normal state
    pub margin: i32,
    /// Content margin while maximized; maximized windows hang slightly off-screen
    pub margin_on_maximized: i32,
    /// Added to the top margin in every state
    pub extra_top_margin: i32,
    /// Allow drag-to-move through the title bar
    pub movable: bool,
    /// Allow resizing from the edges and corners
    pub resizable: bool,
    /// Demo window settings
    pub demo: DemoConfig,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            frameless: true,
            resize_area_width: 5,
            margin: 1,
            margin_on_maximized: 5,
            extra_top_margin: 2,
            movable: true,
            resizable: true,
            demo: DemoConfig::default(),
        }
    }
}

impl ChromeConfig {
    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("frameless")
            .join("config.toml")
    }

    /// Load configuration from the default path or create it
    pub fn load_or_default() -> FramelessResult<Self> {
        Self::load_or_default_from(&Self::config_path())
    }

    /// Load configuration from `path`, writing defaults there if it is missing
    pub fn load_or_default_from(path: &Path) -> FramelessResult<Self> {
        if path.exists() {
            info!("Loading configuration from: {:?}", path);
            match Self::load_from(path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    warn!("Failed to parse config, using defaults: {}", e);
                    return Ok(Self::default());
                }
            }
        }

        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Parse the file at `path`
    pub fn load_from(path: &Path) -> FramelessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> FramelessResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to: {:?}", path);
        Ok(())
    }

    /// Reject negative or oversized lengths
    pub fn validate(&self) -> FramelessResult<()> {
        let fields = [
            ("resize_area_width", self.resize_area_width),
            ("margin", self.margin),
            ("margin_on_maximized", self.margin_on_maximized),
            ("extra_top_margin", self.extra_top_margin),
            ("demo.title_bar_height", self.demo.title_bar_height),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(FramelessError::Config(format!("{} must not be negative (got {})", name, value)));
            }
            if value > MAX_EXTENT {
                return Err(FramelessError::Config(format!(
                    "{} must be at most {} (got {})",
                    name, MAX_EXTENT, value
                )));
            }
        }
        if self.demo.width <= 0 || self.demo.height <= 0 {
            return Err(FramelessError::Config(format!(
                "demo window size must be positive (got {}x{})",
                self.demo.width, self.demo.height
            )));
        }
        Ok(())
    }
}

/// Demo window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: i32,
    /// Initial height in logical pixels
    pub height: i32,
    /// Custom title bar height in logical pixels
    pub title_bar_height: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Frameless".to_string(),
            width: 960,
            height: 640,
            title_bar_height: 30,
        }
    }
}
