//! Sizing of a tree padded to a full leaf level.
//!
//! Some commitment schemes only accept complete trees, so the leaf level is
//! padded up to `fanout^height` entries. [`padded_size`] reports how many
//! nodes such a tree holds and how much of its leaf level is padding.

use log::debug;
use serde::Serialize;

use state_layout_core::{
    error::{InputIssue, LayoutError, Result},
    fanout::Fanout,
};

use crate::layout::minimal_height;

/// Node counts of a complete k-ary tree covering a number of leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddedSize {
    leaves: u64,
    fanout: Fanout,
    height: u32,
    full_leaves: u64,
    padding_leaves: u64,
    total_nodes: u64,
    internal_nodes: u64,
}

impl PaddedSize {
    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of the padded leaf level.
    pub fn full_leaves(&self) -> u64 {
        self.full_leaves
    }

    pub fn padding_leaves(&self) -> u64 {
        self.padding_leaves
    }

    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    pub fn internal_nodes(&self) -> u64 {
        self.internal_nodes
    }

    /// Share of the leaf level taken up by padding, in `[0, 1)`.
    pub fn padding_fraction(&self) -> f64 {
        self.padding_leaves as f64 / self.full_leaves as f64
    }
}

/// Sizes the complete tree of the given fanout that covers `leaves`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidInput`] if `leaves` is zero or the padded
/// tree has more nodes than fit in a `u64`.
pub fn padded_size(leaves: u64, fanout: Fanout) -> Result<PaddedSize> {
    if leaves == 0 {
        return Err(InputIssue::ZeroLeaves.into());
    }
    let overflow = || LayoutError::from(InputIssue::Overflow { leaves });

    let height = minimal_height(leaves, fanout);
    let base = u64::from(fanout.get());
    let full_leaves = base.checked_pow(height).ok_or_else(overflow)?;

    // 1 + f + f^2 + ... + f^height
    let mut total_nodes = 0u64;
    let mut level = 1u64;
    for depth in 0..=height {
        total_nodes = total_nodes.checked_add(level).ok_or_else(overflow)?;
        if depth < height {
            level = level.checked_mul(base).ok_or_else(overflow)?;
        }
    }

    let size = PaddedSize {
        leaves,
        fanout,
        height,
        full_leaves,
        padding_leaves: full_leaves - leaves,
        total_nodes,
        internal_nodes: total_nodes - full_leaves,
    };
    debug!(size:?; "Padded tree sized");

    Ok(size)
}
