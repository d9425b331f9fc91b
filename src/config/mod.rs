// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_carousel::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCarousel";

/// Number of carousels shown on the gallery screen.
pub const DEFAULT_CAROUSEL_COUNT: usize = 20;
/// Number of pages in each carousel.
pub const DEFAULT_PAGES_PER_CAROUSEL: usize = 5;

/// Upper bound on list sizes accepted from the config file or CLI, so a typo
/// cannot ask the demo to build millions of carousels.
pub const MAX_CAROUSEL_COUNT: usize = 200;
pub const MAX_PAGES_PER_CAROUSEL: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub carousel_count: Option<usize>,
    #[serde(default)]
    pub pages_per_carousel: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            carousel_count: Some(DEFAULT_CAROUSEL_COUNT),
            pages_per_carousel: Some(DEFAULT_PAGES_PER_CAROUSEL),
        }
    }
}

impl Config {
    /// Gallery carousel count, clamped to `[1, MAX_CAROUSEL_COUNT]`.
    #[must_use]
    pub fn carousel_count(&self) -> usize {
        self.carousel_count
            .unwrap_or(DEFAULT_CAROUSEL_COUNT)
            .clamp(1, MAX_CAROUSEL_COUNT)
    }

    /// Pages per carousel, clamped to `[0, MAX_PAGES_PER_CAROUSEL]`.
    ///
    /// Zero is allowed: an empty carousel renders no indicator marks.
    #[must_use]
    pub fn pages_per_carousel(&self) -> usize {
        self.pages_per_carousel
            .unwrap_or(DEFAULT_PAGES_PER_CAROUSEL)
            .min(MAX_PAGES_PER_CAROUSEL)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
