//! Layout sweeps over a grid of leaf counts and fanouts.

use log::{debug, info};
use serde::Serialize;

use state_layout_core::{
    error::{InputIssue, Result},
    fanout::Fanout,
    style::StyleProfile,
};

use crate::layout::{LayoutCalculator, LayoutInput, LayoutResult};

/// One evaluated configuration of a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRow {
    pub leaves: u64,
    pub fanout: Fanout,
    pub height: u32,
    pub total_nodes: u64,
    pub proof_branch_length: u32,
    pub per_proof_bytes: u64,
    pub total_commitment_bytes: u64,
}

impl From<&LayoutResult> for SweepRow {
    fn from(layout: &LayoutResult) -> Self {
        Self {
            leaves: layout.leaves(),
            fanout: layout.fanout(),
            height: layout.height(),
            total_nodes: layout.total_nodes(),
            proof_branch_length: layout.proof_branch_length(),
            per_proof_bytes: layout.per_proof_bytes(),
            total_commitment_bytes: layout.total_commitment_bytes(),
        }
    }
}

/// All rows of a sweep for a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sweep {
    style: String,
    rows: Vec<SweepRow>,
}

impl Sweep {
    /// Key of the style the sweep was run with.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Rows ordered by leaf count, then by fanout in the requested order.
    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }
}

/// Generates the leaf counts visited by a sweep.
///
/// When both bounds are powers of two, `step` is an increment of the
/// exponent: `1024..=65536` with step 2 yields 1024, 4096, 16384, 65536.
/// Otherwise counts double from `min` while they stay within `max`.
///
/// # Errors
///
/// Returns [`InputIssue::InvalidLeafRange`] if `min` is zero or `max < min`,
/// and [`InputIssue::ZeroStep`] if `step` is zero.
pub fn leaf_counts(min: u64, max: u64, step: u32) -> Result<Vec<u64>> {
    if min == 0 || max < min {
        return Err(InputIssue::InvalidLeafRange { min, max }.into());
    }
    if step == 0 {
        return Err(InputIssue::ZeroStep.into());
    }

    let counts: Vec<u64> = if min.is_power_of_two() && max.is_power_of_two() {
        (min.trailing_zeros()..=max.trailing_zeros())
            .step_by(step as usize)
            .map(|exponent| 1u64 << exponent)
            .collect()
    } else {
        std::iter::successors(Some(min), |count| count.checked_mul(2))
            .take_while(|count| *count <= max)
            .collect()
    };

    debug!(min = min, max = max, step = step, count = counts.len(); "Leaf counts generated");
    Ok(counts)
}

/// Computes a layout for every combination of `leaf_counts` and `fanouts`.
///
/// # Errors
///
/// Returns [`InputIssue::NoFanouts`] if `fanouts` is empty, or any error of
/// the individual layout computations.
pub fn sweep(leaf_counts: &[u64], fanouts: &[Fanout], style: &StyleProfile) -> Result<Sweep> {
    if fanouts.is_empty() {
        return Err(InputIssue::NoFanouts.into());
    }

    info!(
        style = style.key(),
        leaf_counts = leaf_counts.len(),
        fanouts = fanouts.len();
        "Running layout sweep"
    );

    let mut rows = Vec::with_capacity(leaf_counts.len() * fanouts.len());
    for &leaves in leaf_counts {
        for &fanout in fanouts {
            let input = LayoutInput::new(leaves, fanout, style)?;
            let layout = LayoutCalculator::compute(&input)?;
            rows.push(SweepRow::from(&layout));
        }
    }

    Ok(Sweep {
        style: style.key().to_string(),
        rows,
    })
}
