//! Error adapter for converting CliError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use state_layout::InputIssue;

use crate::{config::ConfigError, error::CliError};

/// Adapter giving a [`CliError`] a diagnostic code and help text.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "state_layout::io",
            CliError::Config(_) => "state_layout::config",
            CliError::Layout(_) => "state_layout::invalid_input",
            CliError::Json(_) => "state_layout::json",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "check the path passed to --config"
            }
            CliError::Layout(err) => match err.issue() {
                InputIssue::UnsupportedFanout(_) | InputIssue::MalformedFanout(_) => {
                    "use a fanout of 2, 4, or 8"
                }
                InputIssue::UnknownStyle(_) => {
                    "run `state-layout styles` to list the available profiles"
                }
                InputIssue::UnknownMetric(_) => {
                    "use one of height, totalNodes, proofBranchLength, perProofBytes, totalCommitmentBytes"
                }
                InputIssue::InvalidLeafRange { .. } => "pass 0 < --leaf-min <= --leaf-max",
                _ => return None,
            },
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
