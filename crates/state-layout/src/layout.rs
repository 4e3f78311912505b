//! Closed-form tree layout calculation.
//!
//! Given a leaf count, a [`Fanout`], and a [`StyleProfile`], the
//! [`LayoutCalculator`] derives the shape of the commitment tree and the size
//! of a membership proof without building anything. All arithmetic is exact
//! integer arithmetic; values that would not fit in a `u64` are reported as
//! [`InputIssue::Overflow`] instead of wrapping.

use log::{debug, trace};
use serde::Serialize;

use state_layout_core::{
    error::{InputIssue, LayoutError, Result},
    fanout::Fanout,
    style::{StyleProfile, StyleRegistry},
};

/// Validated inputs for a single layout computation.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    leaves: u64,
    fanout: Fanout,
    style: &'a StyleProfile,
}

impl<'a> LayoutInput<'a> {
    /// Creates a layout input.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] if `leaves` is zero.
    pub fn new(leaves: u64, fanout: Fanout, style: &'a StyleProfile) -> Result<Self> {
        if leaves == 0 {
            return Err(InputIssue::ZeroLeaves.into());
        }
        Ok(Self {
            leaves,
            fanout,
            style,
        })
    }

    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    pub fn style(&self) -> &'a StyleProfile {
        self.style
    }
}

/// Identifying metadata of the style a result was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSummary {
    key: String,
    name: String,
    note: String,
}

impl StyleSummary {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl From<&StyleProfile> for StyleSummary {
    fn from(style: &StyleProfile) -> Self {
        Self {
            key: style.key().to_string(),
            name: style.name().to_string(),
            note: style.note().to_string(),
        }
    }
}

/// Structural metrics of a commitment tree.
///
/// Created fresh by [`LayoutCalculator::compute`]; never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    style: StyleSummary,
    leaves: u64,
    fanout: Fanout,
    hash_bytes: u32,
    height: u32,
    total_nodes: u64,
    nodes_per_level: Vec<u64>,
    proof_branch_length: u32,
    per_proof_bytes: u64,
    per_proof_bits: u64,
    total_commitment_bytes: u64,
}

impl LayoutResult {
    pub fn style(&self) -> &StyleSummary {
        &self.style
    }

    pub fn leaves(&self) -> u64 {
        self.leaves
    }

    pub fn fanout(&self) -> Fanout {
        self.fanout
    }

    pub fn hash_bytes(&self) -> u32 {
        self.hash_bytes
    }

    /// Number of levels above the leaves.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    /// Node count of each level, leaves first and root last.
    pub fn nodes_per_level(&self) -> &[u64] {
        &self.nodes_per_level
    }

    /// Number of sibling groups in a membership proof.
    pub fn proof_branch_length(&self) -> u32 {
        self.proof_branch_length
    }

    pub fn per_proof_bytes(&self) -> u64 {
        self.per_proof_bytes
    }

    pub fn per_proof_bits(&self) -> u64 {
        self.per_proof_bits
    }

    /// Bytes needed to store every node hash of the tree.
    pub fn total_commitment_bytes(&self) -> u64 {
        self.total_commitment_bytes
    }
}

/// Stateless calculator for [`LayoutResult`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutCalculator;

impl LayoutCalculator {
    /// Computes the layout of the tree described by `input`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidInput`] with [`InputIssue::Overflow`] if
    /// a byte count does not fit in a `u64`.
    pub fn compute(input: &LayoutInput<'_>) -> Result<LayoutResult> {
        let leaves = input.leaves();
        let fanout = input.fanout();
        let style = input.style();
        let overflow = || LayoutError::from(InputIssue::Overflow { leaves });

        let nodes_per_level = level_sizes(leaves, fanout);
        let height = u32::try_from(nodes_per_level.len() - 1).map_err(|_| overflow())?;
        trace!(nodes_per_level:?; "Level sizes computed");

        let total_nodes = nodes_per_level
            .iter()
            .try_fold(0u64, |sum, &nodes| sum.checked_add(nodes))
            .ok_or_else(overflow)?;

        let hash_bytes = u64::from(style.hash_bytes());
        let proof_branch_length = height;
        let per_proof_bytes = u64::from(proof_branch_length)
            .checked_mul(u64::from(fanout.siblings()))
            .and_then(|siblings| siblings.checked_mul(hash_bytes))
            .ok_or_else(overflow)?;
        let per_proof_bits = per_proof_bytes.checked_mul(8).ok_or_else(overflow)?;
        let total_commitment_bytes = hash_bytes.checked_mul(total_nodes).ok_or_else(overflow)?;

        debug!(
            leaves = leaves,
            fanout = fanout.get(),
            style = style.key(),
            height = height,
            total_nodes = total_nodes;
            "Layout computed"
        );

        Ok(LayoutResult {
            style: StyleSummary::from(style),
            leaves,
            fanout,
            hash_bytes: style.hash_bytes(),
            height,
            total_nodes,
            nodes_per_level,
            proof_branch_length,
            per_proof_bytes,
            per_proof_bits,
            total_commitment_bytes,
        })
    }
}

/// Computes a layout from unvalidated inputs.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidInput`] if `leaves` is zero, `fanout` is not
/// 2, 4, or 8, or `style` is not registered in `registry`.
///
/// # Examples
///
/// ```
/// use state_layout::{compute, style::StyleRegistry};
///
/// let registry = StyleRegistry::builtin();
/// let layout = compute(65536, 2, "aztec", &registry).unwrap();
/// assert_eq!(layout.height(), 16);
/// assert_eq!(layout.per_proof_bytes(), 512);
///
/// assert!(compute(65536, 3, "aztec", &registry).is_err());
/// ```
pub fn compute(
    leaves: u64,
    fanout: u32,
    style: &str,
    registry: &StyleRegistry,
) -> Result<LayoutResult> {
    let fanout = Fanout::try_from(fanout)?;
    let style = registry.resolve(style)?;
    let input = LayoutInput::new(leaves, fanout, style)?;
    LayoutCalculator::compute(&input)
}

/// Returns the smallest `h` such that `fanout^h >= leaves`.
pub fn minimal_height(leaves: u64, fanout: Fanout) -> u32 {
    let fanout = u64::from(fanout.get());
    let mut height = 0;
    let mut capacity = 1u64;
    while capacity < leaves {
        height += 1;
        capacity = match capacity.checked_mul(fanout) {
            Some(capacity) => capacity,
            // Past u64::MAX, so certainly >= leaves
            None => break,
        };
    }
    height
}

/// Node counts of each level, from `leaves` down to the single root.
fn level_sizes(leaves: u64, fanout: Fanout) -> Vec<u64> {
    let fanout = u64::from(fanout.get());
    let mut levels = vec![leaves];
    let mut nodes = leaves;
    while nodes > 1 {
        nodes = nodes.div_ceil(fanout);
        levels.push(nodes);
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(hash_bytes: u32) -> StyleProfile {
        StyleProfile::new("test", "Test profile", hash_bytes, "").unwrap()
    }

    fn layout(leaves: u64, fanout: Fanout, hash_bytes: u32) -> LayoutResult {
        let style = style(hash_bytes);
        let input = LayoutInput::new(leaves, fanout, &style).unwrap();
        LayoutCalculator::compute(&input).unwrap()
    }

    #[test]
    fn test_single_leaf() {
        let result = layout(1, Fanout::Binary, 32);

        assert_eq!(result.height(), 0);
        assert_eq!(result.nodes_per_level(), &[1]);
        assert_eq!(result.total_nodes(), 1);
        assert_eq!(result.proof_branch_length(), 0);
        assert_eq!(result.per_proof_bytes(), 0);
        assert_eq!(result.per_proof_bits(), 0);
        assert_eq!(result.total_commitment_bytes(), 32);
    }

    #[test]
    fn test_binary_power_of_two() {
        let result = layout(65536, Fanout::Binary, 32);

        assert_eq!(result.height(), 16);
        assert_eq!(result.nodes_per_level().len(), 17);
        assert_eq!(result.nodes_per_level()[0], 65536);
        assert_eq!(result.nodes_per_level()[16], 1);
        assert_eq!(result.total_nodes(), 131071);
        assert_eq!(result.proof_branch_length(), 16);
        assert_eq!(result.per_proof_bytes(), 512);
        assert_eq!(result.per_proof_bits(), 4096);
        assert_eq!(result.total_commitment_bytes(), 131071 * 32);
    }

    #[test]
    fn test_quaternary_uneven() {
        let result = layout(100_000, Fanout::Quaternary, 32);

        assert_eq!(result.height(), 9);
        assert_eq!(result.proof_branch_length(), 9);
        assert_eq!(result.per_proof_bytes(), 9 * 3 * 32);
        assert_eq!(
            result.nodes_per_level(),
            &[100_000, 25_000, 6_250, 1_563, 391, 98, 25, 7, 2, 1]
        );
    }

    #[test]
    fn test_octal_rounds_up_each_level() {
        let result = layout(9, Fanout::Octal, 48);

        assert_eq!(result.nodes_per_level(), &[9, 2, 1]);
        assert_eq!(result.total_nodes(), 12);
        assert_eq!(result.per_proof_bytes(), 2 * 7 * 48);
        assert_eq!(result.total_commitment_bytes(), 12 * 48);
    }

    #[test]
    fn test_two_leaves() {
        let result = layout(2, Fanout::Octal, 32);
        assert_eq!(result.nodes_per_level(), &[2, 1]);
        assert_eq!(result.height(), 1);
    }

    #[test]
    fn test_zero_leaves_rejected() {
        let style = style(32);
        let err = LayoutInput::new(0, Fanout::Binary, &style).unwrap_err();
        assert_eq!(err.issue(), &InputIssue::ZeroLeaves);
    }

    #[test]
    fn test_compute_validates_inputs() {
        let registry = StyleRegistry::builtin();

        let err = compute(1024, 3, "aztec", &registry).unwrap_err();
        assert_eq!(err.issue(), &InputIssue::UnsupportedFanout(3));

        let err = compute(1024, 2, "unknown", &registry).unwrap_err();
        assert_eq!(err.issue(), &InputIssue::UnknownStyle("unknown".to_string()));

        let err = compute(0, 2, "aztec", &registry).unwrap_err();
        assert_eq!(err.issue(), &InputIssue::ZeroLeaves);
    }

    #[test]
    fn test_compute_uses_style_hash_size() {
        let registry = StyleRegistry::builtin();
        let result = compute(65536, 2, "zama", &registry).unwrap();

        assert_eq!(result.hash_bytes(), 48);
        assert_eq!(result.per_proof_bytes(), 16 * 48);
        assert_eq!(result.style().key(), "zama");
        assert_eq!(result.style().name(), "Zama-style FHE compute stack");
    }

    #[test]
    fn test_huge_leaf_count_reports_overflow() {
        let result = LayoutCalculator::compute(
            &LayoutInput::new(u64::MAX, Fanout::Binary, &style(32)).unwrap(),
        );
        let err = result.unwrap_err();
        assert_eq!(err.issue(), &InputIssue::Overflow { leaves: u64::MAX });
    }

    #[test]
    fn test_minimal_height() {
        assert_eq!(minimal_height(1, Fanout::Binary), 0);
        assert_eq!(minimal_height(2, Fanout::Binary), 1);
        assert_eq!(minimal_height(65536, Fanout::Binary), 16);
        assert_eq!(minimal_height(65537, Fanout::Binary), 17);
        assert_eq!(minimal_height(100_000, Fanout::Quaternary), 9);
        assert_eq!(minimal_height(u64::MAX, Fanout::Binary), 64);
        assert_eq!(minimal_height(u64::MAX, Fanout::Octal), 22);
    }
}
