//! Configuration types for layout estimates.
//!
//! This module provides configuration structures that control default inputs,
//! input limits, and extra style profiles. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`DefaultsConfig`] - Style and fanout used when a request omits them.
//! - [`LimitsConfig`] - Upper bound applied to requested leaf counts.
//!
//! # Example
//!
//! ```
//! # use state_layout::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.defaults().style(), "aztec");
//! assert_eq!(config.limits().max_leaves(), 10_000_000);
//! ```

use serde::Deserialize;

use state_layout_core::{
    fanout::Fanout,
    style::{DEFAULT_STYLE, StyleProfile, StyleRegistry},
};

/// Leaf ceiling used when none is configured.
pub const DEFAULT_MAX_LEAVES: u64 = 10_000_000;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default request values.
    #[serde(default)]
    defaults: DefaultsConfig,

    /// Input limits.
    #[serde(default)]
    limits: LimitsConfig,

    /// Additional style profiles, registered after the built-in ones.
    #[serde(default)]
    styles: Vec<StyleProfile>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(defaults: DefaultsConfig, limits: LimitsConfig, styles: Vec<StyleProfile>) -> Self {
        Self {
            defaults,
            limits,
            styles,
        }
    }

    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Returns the user-defined style profiles.
    pub fn styles(&self) -> &[StyleProfile] {
        &self.styles
    }

    /// Builds the style registry: built-in profiles, then user profiles.
    ///
    /// A user profile with the key of a built-in one replaces it.
    pub fn registry(&self) -> StyleRegistry {
        StyleRegistry::builtin().with_profiles(self.styles.iter().cloned())
    }
}

/// Values used when a request leaves the style or fanout unspecified.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_style")]
    style: String,

    #[serde(default)]
    fanout: Fanout,
}

impl DefaultsConfig {
    pub fn new(style: impl Into<String>, fanout: Fanout) -> Self {
        Self {
            style: style.into(),
            fanout,
        }
    }

    /// Returns the default style key.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the default [`Fanout`].
    pub fn fanout(&self) -> Fanout {
        self.fanout
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE, Fanout::default())
    }
}

/// Upper bounds on requested inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Requested leaf counts above this value are clamped to it.
    #[serde(default = "default_max_leaves")]
    max_leaves: u64,
}

impl LimitsConfig {
    pub fn new(max_leaves: u64) -> Self {
        Self { max_leaves }
    }

    pub fn max_leaves(&self) -> u64 {
        self.max_leaves
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEAVES)
    }
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_max_leaves() -> u64 {
    DEFAULT_MAX_LEAVES
}
