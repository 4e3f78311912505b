//! State Layout - Size estimates for k-ary state commitment trees.
//!
//! Computes the height, node counts, proof branch length, and proof size of a
//! Merkle-style commitment tree in closed form, for a number of leaves, a
//! fanout, and a named style profile supplying the hash size. Nothing is
//! hashed and no tree is built.

pub mod compare;
pub mod config;
pub mod layout;
pub mod sizing;
pub mod sweep;

pub use state_layout_core::{error, fanout, style};

pub use error::{InputIssue, LayoutError};
pub use layout::{LayoutCalculator, LayoutInput, LayoutResult, compute};

use log::{info, warn};

use compare::{Comparison, Metric};
use config::AppConfig;
use error::Result;
use fanout::Fanout;
use sizing::PaddedSize;
use style::{StyleProfile, StyleRegistry};
use sweep::Sweep;

/// Entry point for layout estimates driven by an [`AppConfig`].
///
/// The planner builds its [`StyleRegistry`] once on construction and fills
/// in the configured default style and fanout wherever a request omits
/// them. Leaf counts above the configured ceiling are clamped to it.
///
/// # Examples
///
/// ```
/// use state_layout::{LayoutPlanner, config::AppConfig, fanout::Fanout};
///
/// let planner = LayoutPlanner::new(AppConfig::default());
///
/// let layout = planner
///     .layout(100_000, Some(Fanout::Quaternary), None)
///     .expect("Failed to compute layout");
/// assert_eq!(layout.height(), 9);
/// assert_eq!(layout.per_proof_bytes(), 864);
///
/// // Or use default config
/// let planner = LayoutPlanner::default();
/// assert!(planner.layout(1, None, Some("unknown")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    config: AppConfig,
    registry: StyleRegistry,
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl LayoutPlanner {
    /// Create a new planner with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let registry = config.registry();
        info!(styles = registry.len(); "Style registry ready");
        Self { config, registry }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the style profiles known to this planner.
    pub fn styles(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Resolve a style key, falling back to the configured default.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] if the key is not registered.
    pub fn style(&self, key: Option<&str>) -> Result<&StyleProfile> {
        self.registry
            .resolve(key.unwrap_or_else(|| self.config.defaults().style()))
    }

    /// Clamp a requested leaf count to the configured ceiling.
    ///
    /// Zero is returned unchanged so that it is rejected downstream.
    pub fn clamp_leaves(&self, leaves: u64) -> u64 {
        let max_leaves = self.config.limits().max_leaves();
        if leaves > max_leaves {
            warn!(requested = leaves, max_leaves = max_leaves; "Leaf count clamped");
            max_leaves
        } else {
            leaves
        }
    }

    /// Compute the layout of a single tree.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] for a zero leaf count or an
    /// unknown style.
    pub fn layout(
        &self,
        leaves: u64,
        fanout: Option<Fanout>,
        style: Option<&str>,
    ) -> Result<LayoutResult> {
        let style = self.style(style)?;
        let fanout = fanout.unwrap_or_else(|| self.config.defaults().fanout());
        let input = LayoutInput::new(self.clamp_leaves(leaves), fanout, style)?;
        LayoutCalculator::compute(&input)
    }

    /// Compute layouts over a range of leaf counts and several fanouts.
    ///
    /// Counts are generated from the requested range, then each one is
    /// clamped to the leaf ceiling; counts that collapse onto the ceiling
    /// appear once.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] for an invalid range or step,
    /// an empty fanout list, or an unknown style.
    pub fn sweep(
        &self,
        leaf_min: u64,
        leaf_max: u64,
        step: u32,
        fanouts: &[Fanout],
        style: Option<&str>,
    ) -> Result<Sweep> {
        let style = self.style(style)?;
        let mut counts: Vec<u64> = sweep::leaf_counts(leaf_min, leaf_max, step)?
            .into_iter()
            .map(|leaves| self.clamp_leaves(leaves))
            .collect();
        counts.dedup();
        sweep::sweep(&counts, fanouts, style)
    }

    /// Find the fanout that minimises `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] for a zero leaf count, an empty
    /// fanout list, or an unknown style.
    pub fn best(
        &self,
        leaves: u64,
        fanouts: &[Fanout],
        style: Option<&str>,
        metric: Metric,
    ) -> Result<Comparison> {
        let style = self.style(style)?;
        compare::choose_best(self.clamp_leaves(leaves), fanouts, style, metric)
    }

    /// Size the padded complete tree covering `leaves`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] for a zero leaf count.
    pub fn size(&self, leaves: u64, fanout: Option<Fanout>) -> Result<PaddedSize> {
        let fanout = fanout.unwrap_or_else(|| self.config.defaults().fanout());
        sizing::padded_size(self.clamp_leaves(leaves), fanout)
    }
}
