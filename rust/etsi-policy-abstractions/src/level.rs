// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

/// Severity applied when a constraint is not satisfied.
///
/// Levels are not ordered for comparison; each one maps to a distinct reporting behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// The check fails and the outcome is not passing.
    Fail,
    /// The outcome stays passing, with a warning attached.
    Warn,
    /// The outcome stays passing, with an informational message attached.
    Inform,
    /// The check is not executed.
    Ignore,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
            Self::Inform => "INFORM",
            Self::Ignore => "IGNORE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}' (expected FAIL, WARN, INFORM or IGNORE)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "FAIL" => Ok(Self::Fail),
            "WARN" => Ok(Self::Warn),
            "INFORM" => Ok(Self::Inform),
            "IGNORE" => Ok(Self::Ignore),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}
