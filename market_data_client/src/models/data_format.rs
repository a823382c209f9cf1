use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// Response encoding requested through the `datatype` query parameter.
///
/// The response is decoded according to this value, never by sniffing the
/// `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    #[default]
    Csv,
    Json,
}

impl DataFormat {
    pub const ALLOWED: &'static [&'static str] = &["json", "csv"];

    pub const fn as_str(self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            other => Err(UnknownVariant::new(other, Self::ALLOWED)),
        }
    }
}
