//! Choosing the fanout that minimises a layout metric.

use std::{fmt, str::FromStr};

use log::{debug, info};
use serde::Serialize;

use state_layout_core::{
    error::{InputIssue, LayoutError, Result},
    fanout::Fanout,
    style::StyleProfile,
};

use crate::layout::{LayoutCalculator, LayoutInput, LayoutResult};

/// A layout quantity to minimise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Height,
    TotalNodes,
    ProofBranchLength,
    PerProofBytes,
    #[default]
    TotalCommitmentBytes,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Height,
        Metric::TotalNodes,
        Metric::ProofBranchLength,
        Metric::PerProofBytes,
        Metric::TotalCommitmentBytes,
    ];

    /// Reads this metric from a layout.
    pub fn value(self, layout: &LayoutResult) -> u64 {
        match self {
            Metric::Height => u64::from(layout.height()),
            Metric::TotalNodes => layout.total_nodes(),
            Metric::ProofBranchLength => u64::from(layout.proof_branch_length()),
            Metric::PerProofBytes => layout.per_proof_bytes(),
            Metric::TotalCommitmentBytes => layout.total_commitment_bytes(),
        }
    }
}

impl FromStr for Metric {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "height" | "treeHeight" => Ok(Self::Height),
            "totalNodes" => Ok(Self::TotalNodes),
            "proofBranchLength" => Ok(Self::ProofBranchLength),
            "perProofBytes" => Ok(Self::PerProofBytes),
            "totalCommitmentBytes" => Ok(Self::TotalCommitmentBytes),
            other => Err(InputIssue::UnknownMetric(other.to_string()).into()),
        }
    }
}

impl From<Metric> for &'static str {
    fn from(val: Metric) -> Self {
        match val {
            Metric::Height => "height",
            Metric::TotalNodes => "totalNodes",
            Metric::ProofBranchLength => "proofBranchLength",
            Metric::PerProofBytes => "perProofBytes",
            Metric::TotalCommitmentBytes => "totalCommitmentBytes",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Layouts for several fanouts and the one that minimises a [`Metric`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    leaves: u64,
    style: String,
    metric: Metric,
    best_fanout: Fanout,
    candidates: Vec<LayoutResult>,
    #[serde(skip)]
    best: usize,
}

impl Comparison {
    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Layouts in the order the fanouts were requested.
    pub fn candidates(&self) -> &[LayoutResult] {
        &self.candidates
    }

    pub fn best_fanout(&self) -> Fanout {
        self.best_fanout
    }

    /// The winning layout.
    pub fn best(&self) -> &LayoutResult {
        &self.candidates[self.best]
    }
}

/// Computes a layout per fanout and picks the one with the smallest `metric`.
///
/// Ties go to the fanout listed first.
///
/// # Errors
///
/// Returns [`InputIssue::NoFanouts`] if `fanouts` is empty, or any error of
/// the individual layout computations.
pub fn choose_best(
    leaves: u64,
    fanouts: &[Fanout],
    style: &StyleProfile,
    metric: Metric,
) -> Result<Comparison> {
    let candidates = fanouts
        .iter()
        .map(|&fanout| {
            let input = LayoutInput::new(leaves, fanout, style)?;
            LayoutCalculator::compute(&input)
        })
        .collect::<Result<Vec<_>>>()?;

    let (best, best_fanout) = candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, candidate)| metric.value(candidate))
        .map(|(index, candidate)| (index, candidate.fanout()))
        .ok_or(InputIssue::NoFanouts)?;

    for candidate in &candidates {
        debug!(
            fanout = candidate.fanout().get(),
            value = metric.value(candidate);
            "Candidate evaluated"
        );
    }
    info!(
        leaves = leaves,
        metric:? = metric,
        best_fanout = best_fanout.get();
        "Best fanout chosen"
    );

    Ok(Comparison {
        leaves,
        style: style.key().to_string(),
        metric,
        best_fanout,
        candidates,
        best,
    })
}
