use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// How much history a time-series request returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSize {
    /// The entire available history.
    #[default]
    Full,
    /// Only the most recent window (100 points on the remote side).
    Compact,
}

impl OutputSize {
    pub const ALLOWED: &'static [&'static str] = &["full", "compact"];

    pub const fn as_str(self) -> &'static str {
        match self {
            OutputSize::Full => "full",
            OutputSize::Compact => "compact",
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(OutputSize::Full),
            "compact" => Ok(OutputSize::Compact),
            other => Err(UnknownVariant::new(other, Self::ALLOWED)),
        }
    }
}
