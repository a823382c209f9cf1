use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Price field an indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesType {
    #[default]
    Close,
    Open,
    High,
    Low,
}

impl SeriesType {
    pub const ALLOWED: &'static [&'static str] = &["close", "open", "high", "low"];

    pub const fn as_str(self) -> &'static str {
        match self {
            SeriesType::Close => "close",
            SeriesType::Open => "open",
            SeriesType::High => "high",
            SeriesType::Low => "low",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close" => Ok(SeriesType::Close),
            "open" => Ok(SeriesType::Open),
            "high" => Ok(SeriesType::High),
            "low" => Ok(SeriesType::Low),
            other => Err(UnknownVariant::new(other, Self::ALLOWED)),
        }
    }
}
