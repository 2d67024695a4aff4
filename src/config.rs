//! Trail rendering configuration.
//!
//! Handles loading and validating `trail.toml` files. All options have stock
//! defaults; a config file only needs to name the values it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! glue = " › "              # Separator rendered between items
//! min_items = 2             # Render nothing below this many items
//! last_item_link = false    # Link the terminal (current page) item
//!
//! display_home_item = true  # Prepend a home item to every trail
//! home_title = "Home"
//! home_link = "/"
//! home_priority = 10        # Sorts ahead of the locator default (1000)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Trail rendering settings loaded from `trail.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Separator rendered between trail items.
    pub glue: String,
    /// Trails with fewer items than this render nothing.
    pub min_items: usize,
    /// Whether the terminal item links to its own page.
    pub last_item_link: bool,
    /// Whether every trail starts with a home item.
    pub display_home_item: bool,
    /// Home item label.
    pub home_title: String,
    /// Home item URL.
    pub home_link: String,
    /// Home item priority; the stock value sorts it ahead of locator items.
    pub home_priority: u32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            glue: " › ".to_string(),
            min_items: 2,
            last_item_link: false,
            display_home_item: true,
            home_title: "Home".to_string(),
            home_link: "/".to_string(),
            home_priority: 10,
        }
    }
}

impl TrailConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: TrailConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_items == 0 {
            return Err(ConfigError::Validation(
                "min_items must be at least 1".into(),
            ));
        }
        if self.display_home_item && self.home_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "home_title must not be empty when display_home_item is set".into(),
            ));
        }
        Ok(())
    }
}
