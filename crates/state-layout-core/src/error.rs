//! Input-validation errors.
//!
//! Every layout computation is total once its inputs are valid, so the only
//! error this crate reports is [`LayoutError::InvalidInput`]. The attached
//! [`InputIssue`] says which input was rejected.

use std::fmt;

use thiserror::Error;

/// A type alias for `Result<T, LayoutError>`.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// The error type for layout computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: InputIssue },
}

impl LayoutError {
    /// Returns the rejected input.
    pub fn issue(&self) -> &InputIssue {
        match self {
            LayoutError::InvalidInput { reason } => reason,
        }
    }
}

impl From<InputIssue> for LayoutError {
    fn from(reason: InputIssue) -> Self {
        LayoutError::InvalidInput { reason }
    }
}

/// The specific input that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIssue {
    /// Leaf count was zero.
    ZeroLeaves,

    /// Fanout outside the supported set.
    UnsupportedFanout(u32),

    /// Fanout text that is not an integer.
    MalformedFanout(String),

    /// No style profile is registered under this key.
    UnknownStyle(String),

    /// A style profile was declared with an empty key.
    EmptyStyleKey,

    /// A style profile declared a zero hash size.
    ZeroHashBytes(String),

    /// Leaf range with a zero lower bound or an upper bound below it.
    InvalidLeafRange { min: u64, max: u64 },

    /// Sweep step of zero.
    ZeroStep,

    /// An empty list of fanouts was supplied.
    NoFanouts,

    /// Metric name that is not recognised.
    UnknownMetric(String),

    /// Leaf count too large to size without overflowing `u64`.
    Overflow { leaves: u64 },
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputIssue::ZeroLeaves => write!(f, "leaf count must be positive"),
            InputIssue::UnsupportedFanout(fanout) => {
                write!(f, "fanout must be one of 2, 4, or 8 (got {fanout})")
            }
            InputIssue::MalformedFanout(text) => write!(f, "fanout `{text}` is not an integer"),
            InputIssue::UnknownStyle(key) => write!(f, "unknown style profile `{key}`"),
            InputIssue::EmptyStyleKey => write!(f, "style profile key must not be empty"),
            InputIssue::ZeroHashBytes(key) => {
                write!(f, "style profile `{key}` must use a positive hash size")
            }
            InputIssue::InvalidLeafRange { min, max } => write!(
                f,
                "leaf range must satisfy 0 < min <= max (got min={min}, max={max})"
            ),
            InputIssue::ZeroStep => write!(f, "sweep step must be positive"),
            InputIssue::NoFanouts => write!(f, "at least one fanout is required"),
            InputIssue::UnknownMetric(name) => write!(f, "unknown metric `{name}`"),
            InputIssue::Overflow { leaves } => {
                write!(f, "leaf count {leaves} is too large to size")
            }
        }
    }
}
