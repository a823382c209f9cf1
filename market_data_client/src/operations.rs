//! Static descriptors for every analytic function the client exposes.
//!
//! Each [`Operation`] maps to one [`OperationDescriptor`]: the function code
//! understood by the remote service and the ordered list of parameters it
//! accepts. The order of [`OperationDescriptor::params`] is the order the
//! parameters appear in the query string.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::models::{DataFormat, Interval, OutputSize, SeriesType};

/// How the request builder treats one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Constrained to [`Interval::ALLOWED`].
    Interval,
    /// Constrained to [`SeriesType::ALLOWED`].
    SeriesType,
    /// Constrained to [`OutputSize::ALLOWED`].
    OutputSize,
    /// Constrained to [`DataFormat::ALLOWED`].
    DataFormat,
    /// Numeric window length, forwarded unchecked.
    Period,
    /// Boolean that switches the function code to its `_ADJUSTED` variant.
    /// Never sent as a query parameter.
    AdjustedFlag,
}

impl ParamKind {
    /// The closed set of accepted values, for enumerated kinds.
    pub const fn allowed(self) -> Option<&'static [&'static str]> {
        match self {
            ParamKind::Interval => Some(Interval::ALLOWED),
            ParamKind::SeriesType => Some(SeriesType::ALLOWED),
            ParamKind::OutputSize => Some(OutputSize::ALLOWED),
            ParamKind::DataFormat => Some(DataFormat::ALLOWED),
            ParamKind::Period | ParamKind::AdjustedFlag => None,
        }
    }
}

/// One accepted parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Query-parameter name on the wire.
    pub name: &'static str,
    pub kind: ParamKind,
    /// Value used when the caller omits the parameter.
    pub default: &'static str,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }

    const fn period(name: &'static str, default: &'static str) -> Self {
        Self::new(name, ParamKind::Period, default)
    }
}

/// Name of the required equity symbol argument.
pub const SYMBOL: &str = "symbol";

/// Accepted by every operation, always emitted right before the credential.
pub const DATATYPE: ParamSpec = ParamSpec::new("datatype", ParamKind::DataFormat, "csv");

/// Suffix appended to the function code when the adjusted flag is set.
pub const ADJUSTED_SUFFIX: &str = "_ADJUSTED";

const INTERVAL: ParamSpec = ParamSpec::new("interval", ParamKind::Interval, "daily");
const SERIES_TYPE: ParamSpec = ParamSpec::new("series_type", ParamKind::SeriesType, "close");

/// Static metadata for one analytic function.
#[derive(Debug, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Function code recognized by the remote service.
    pub function: &'static str,
    /// Operation-specific parameters in query-string order. `symbol` and
    /// `datatype` are shared by every operation and not listed here.
    pub params: &'static [ParamSpec],
}

impl OperationDescriptor {
    /// Looks up an operation-specific parameter, `datatype` included.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.all_params().find(|spec| spec.name == name)
    }

    /// Whether `name` is a valid argument for this operation.
    pub fn accepts(&self, name: &str) -> bool {
        name == SYMBOL || self.param(name).is_some()
    }

    /// Operation parameters followed by `datatype`.
    pub fn all_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter().chain(std::iter::once(&DATATYPE))
    }
}

static TIME_SERIES_DAILY: OperationDescriptor = OperationDescriptor {
    function: "TIME_SERIES_DAILY",
    params: &[
        ParamSpec::new("adjusted", ParamKind::AdjustedFlag, "true"),
        ParamSpec::new("outputsize", ParamKind::OutputSize, "full"),
    ],
};

static SMA: OperationDescriptor = OperationDescriptor {
    function: "SMA",
    params: &[INTERVAL, ParamSpec::period("time_period", "15"), SERIES_TYPE],
};

static EMA: OperationDescriptor = OperationDescriptor {
    function: "EMA",
    params: &[INTERVAL, ParamSpec::period("time_period", "15"), SERIES_TYPE],
};

static WMA: OperationDescriptor = OperationDescriptor {
    function: "WMA",
    params: &[INTERVAL, ParamSpec::period("time_period", "15"), SERIES_TYPE],
};

static MACD: OperationDescriptor = OperationDescriptor {
    function: "MACD",
    params: &[
        INTERVAL,
        ParamSpec::period("fastperiod", "12"),
        ParamSpec::period("slowperiod", "26"),
        ParamSpec::period("signalperiod", "9"),
        SERIES_TYPE,
    ],
};

static STOCH: OperationDescriptor = OperationDescriptor {
    function: "STOCH",
    params: &[
        INTERVAL,
        ParamSpec::period("fastkperiod", "5"),
        ParamSpec::period("slowkperiod", "3"),
        ParamSpec::period("slowdperiod", "3"),
    ],
};

static RSI: OperationDescriptor = OperationDescriptor {
    function: "RSI",
    params: &[INTERVAL, ParamSpec::period("time_period", "14"), SERIES_TYPE],
};

static MOM: OperationDescriptor = OperationDescriptor {
    function: "MOM",
    params: &[INTERVAL, ParamSpec::period("time_period", "14"), SERIES_TYPE],
};

static PPO: OperationDescriptor = OperationDescriptor {
    function: "PPO",
    params: &[
        INTERVAL,
        ParamSpec::period("fastperiod", "12"),
        ParamSpec::period("slowperiod", "26"),
        SERIES_TYPE,
    ],
};

static AD: OperationDescriptor = OperationDescriptor {
    function: "AD",
    params: &[INTERVAL],
};

static ADX: OperationDescriptor = OperationDescriptor {
    function: "ADX",
    params: &[INTERVAL, ParamSpec::period("time_period", "14")],
};

static CCI: OperationDescriptor = OperationDescriptor {
    function: "CCI",
    params: &[INTERVAL, ParamSpec::period("time_period", "20")],
};

static AROON: OperationDescriptor = OperationDescriptor {
    function: "AROON",
    params: &[INTERVAL, ParamSpec::period("time_period", "20")],
};

static AROONOSC: OperationDescriptor = OperationDescriptor {
    function: "AROONOSC",
    params: &[INTERVAL, ParamSpec::period("time_period", "20")],
};

static ULTOSC: OperationDescriptor = OperationDescriptor {
    function: "ULTOSC",
    params: &[
        INTERVAL,
        ParamSpec::period("timeperiod1", "7"),
        ParamSpec::period("timeperiod2", "14"),
        ParamSpec::period("timeperiod3", "28"),
    ],
};

static HT_SINE: OperationDescriptor = OperationDescriptor {
    function: "HT_SINE",
    params: &[INTERVAL, SERIES_TYPE],
};

static HT_TRENDMODE: OperationDescriptor = OperationDescriptor {
    function: "HT_TRENDMODE",
    params: &[INTERVAL, SERIES_TYPE],
};

static HT_DCPERIOD: OperationDescriptor = OperationDescriptor {
    function: "HT_DCPERIOD",
    params: &[INTERVAL, SERIES_TYPE],
};

/// Identifier of a supported analytic function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    TimeSeriesDaily,
    Sma,
    Ema,
    Wma,
    Macd,
    Stoch,
    Rsi,
    Momentum,
    Ppo,
    Ad,
    Adx,
    Cci,
    Aroon,
    AroonOsc,
    UltimateOsc,
    HtSine,
    HtTrendMode,
    HtDcPeriod,
}

impl Operation {
    pub const ALL: [Operation; 18] = [
        Operation::TimeSeriesDaily,
        Operation::Sma,
        Operation::Ema,
        Operation::Wma,
        Operation::Macd,
        Operation::Stoch,
        Operation::Rsi,
        Operation::Momentum,
        Operation::Ppo,
        Operation::Ad,
        Operation::Adx,
        Operation::Cci,
        Operation::Aroon,
        Operation::AroonOsc,
        Operation::UltimateOsc,
        Operation::HtSine,
        Operation::HtTrendMode,
        Operation::HtDcPeriod,
    ];

    pub fn descriptor(self) -> &'static OperationDescriptor {
        match self {
            Operation::TimeSeriesDaily => &TIME_SERIES_DAILY,
            Operation::Sma => &SMA,
            Operation::Ema => &EMA,
            Operation::Wma => &WMA,
            Operation::Macd => &MACD,
            Operation::Stoch => &STOCH,
            Operation::Rsi => &RSI,
            Operation::Momentum => &MOM,
            Operation::Ppo => &PPO,
            Operation::Ad => &AD,
            Operation::Adx => &ADX,
            Operation::Cci => &CCI,
            Operation::Aroon => &AROON,
            Operation::AroonOsc => &AROONOSC,
            Operation::UltimateOsc => &ULTOSC,
            Operation::HtSine => &HT_SINE,
            Operation::HtTrendMode => &HT_TRENDMODE,
            Operation::HtDcPeriod => &HT_DCPERIOD,
        }
    }

    /// Snake-case name, as accepted by the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::TimeSeriesDaily => "ts_daily",
            Operation::Sma => "sma",
            Operation::Ema => "ema",
            Operation::Wma => "wma",
            Operation::Macd => "macd",
            Operation::Stoch => "stoch",
            Operation::Rsi => "rsi",
            Operation::Momentum => "momentum",
            Operation::Ppo => "ppo",
            Operation::Ad => "ad",
            Operation::Adx => "adx",
            Operation::Cci => "cci",
            Operation::Aroon => "aroon",
            Operation::AroonOsc => "aroon_osc",
            Operation::UltimateOsc => "ultimate_osc",
            Operation::HtSine => "hilbert_transform_sine",
            Operation::HtTrendMode => "hilbert_transform_trendmode",
            Operation::HtDcPeriod => "hilbert_transform_dcperiod",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// No operation has the given name or function code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the snake-case name (`aroon_osc`) or the function code
    /// (`AROONOSC`, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s || op.descriptor().function.eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
