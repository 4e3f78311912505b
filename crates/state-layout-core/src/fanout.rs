//! Tree fanout.
//!
//! Only binary, quaternary, and octal trees are supported. [`Fanout`] makes
//! that restriction part of the type so that a validated fanout can never
//! hold another value.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{InputIssue, LayoutError};

/// Number of children per internal node.
///
/// Serializes as a plain integer (`2`, `4`, or `8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Fanout {
    /// Two children per node.
    #[default]
    Binary,
    /// Four children per node.
    Quaternary,
    /// Eight children per node.
    Octal,
}

impl Fanout {
    /// All supported fanouts in ascending order.
    pub const ALL: [Fanout; 3] = [Fanout::Binary, Fanout::Quaternary, Fanout::Octal];

    /// Returns the number of children per node.
    pub fn get(self) -> u32 {
        match self {
            Fanout::Binary => 2,
            Fanout::Quaternary => 4,
            Fanout::Octal => 8,
        }
    }

    /// Returns the number of sibling hashes a proof needs per level.
    pub fn siblings(self) -> u32 {
        self.get() - 1
    }
}

impl TryFrom<u32> for Fanout {
    type Error = LayoutError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(Fanout::Binary),
            4 => Ok(Fanout::Quaternary),
            8 => Ok(Fanout::Octal),
            other => Err(InputIssue::UnsupportedFanout(other).into()),
        }
    }
}

impl From<Fanout> for u32 {
    fn from(fanout: Fanout) -> Self {
        fanout.get()
    }
}

impl FromStr for Fanout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| LayoutError::from(InputIssue::MalformedFanout(s.to_string())))?;
        Fanout::try_from(value)
    }
}

impl fmt::Display for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_values() {
        for fanout in Fanout::ALL {
            assert_eq!(Fanout::try_from(fanout.get()), Ok(fanout));
        }
    }

    #[test]
    fn test_unsupported_values() {
        for value in [0, 1, 3, 5, 16] {
            let err = Fanout::try_from(value).unwrap_err();
            assert_eq!(err.issue(), &InputIssue::UnsupportedFanout(value));
        }
    }

    #[test]
    fn test_siblings() {
        assert_eq!(Fanout::Binary.siblings(), 1);
        assert_eq!(Fanout::Quaternary.siblings(), 3);
        assert_eq!(Fanout::Octal.siblings(), 7);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<Fanout>(), Ok(Fanout::Quaternary));
        assert!("3".parse::<Fanout>().is_err());
        assert!("eight".parse::<Fanout>().is_err());
    }

    #[test]
    fn test_default_is_binary() {
        assert_eq!(Fanout::default(), Fanout::Binary);
    }
}
