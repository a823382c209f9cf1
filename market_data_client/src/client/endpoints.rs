//! Typed wrappers, one per analytic function.
//!
//! Each method takes typed enumerations (so out-of-set values cannot be
//! expressed) and integer periods, then delegates to [`Client::query`].

use crate::{
    errors::ClientError,
    models::{DataFormat, Interval, OutputSize, SeriesType},
    operations::Operation,
    request::Args,
    response::Response,
    transport::Transport,
};

use super::Client;

impl<T: Transport> Client<T> {
    /// Daily time series; `adjusted` selects `TIME_SERIES_DAILY_ADJUSTED`.
    pub async fn ts_daily(
        &self,
        symbol: &str,
        adjusted: bool,
        output_size: OutputSize,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("adjusted", adjusted)
            .with("outputsize", output_size)
            .with("datatype", format);
        self.query(Operation::TimeSeriesDaily, &args).await
    }

    /// Simple moving average.
    pub async fn sma(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed_series(Operation::Sma, symbol, interval, time_period, series_type, format)
            .await
    }

    /// Exponential moving average.
    pub async fn ema(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed_series(Operation::Ema, symbol, interval, time_period, series_type, format)
            .await
    }

    /// Weighted moving average.
    pub async fn wma(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed_series(Operation::Wma, symbol, interval, time_period, series_type, format)
            .await
    }

    /// Moving average convergence/divergence.
    #[allow(clippy::too_many_arguments)]
    pub async fn macd(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
        fast: u32,
        slow: u32,
        signal: u32,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("fastperiod", fast)
            .with("slowperiod", slow)
            .with("signalperiod", signal)
            .with("series_type", series_type)
            .with("datatype", format);
        self.query(Operation::Macd, &args).await
    }

    /// Stochastic oscillator.
    pub async fn stoch(
        &self,
        symbol: &str,
        interval: Interval,
        format: DataFormat,
        fastk: u32,
        slowk: u32,
        slowd: u32,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("fastkperiod", fastk)
            .with("slowkperiod", slowk)
            .with("slowdperiod", slowd)
            .with("datatype", format);
        self.query(Operation::Stoch, &args).await
    }

    /// Relative strength index.
    pub async fn rsi(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed_series(Operation::Rsi, symbol, interval, time_period, series_type, format)
            .await
    }

    pub async fn momentum(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed_series(Operation::Momentum, symbol, interval, time_period, series_type, format)
            .await
    }

    /// Percentage price oscillator.
    pub async fn ppo(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
        fast: u32,
        slow: u32,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("fastperiod", fast)
            .with("slowperiod", slow)
            .with("series_type", series_type)
            .with("datatype", format);
        self.query(Operation::Ppo, &args).await
    }

    /// Chaikin accumulation/distribution line.
    pub async fn ad(
        &self,
        symbol: &str,
        interval: Interval,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("datatype", format);
        self.query(Operation::Ad, &args).await
    }

    /// Average directional movement index.
    pub async fn adx(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed(Operation::Adx, symbol, interval, time_period, format)
            .await
    }

    /// Commodity channel index.
    pub async fn cci(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed(Operation::Cci, symbol, interval, time_period, format)
            .await
    }

    pub async fn aroon(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed(Operation::Aroon, symbol, interval, time_period, format)
            .await
    }

    pub async fn aroon_osc(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.windowed(Operation::AroonOsc, symbol, interval, time_period, format)
            .await
    }

    /// Ultimate oscillator over three windows.
    pub async fn ultimate_osc(
        &self,
        symbol: &str,
        interval: Interval,
        time_periods: [u32; 3],
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let [first, second, third] = time_periods;
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("timeperiod1", first)
            .with("timeperiod2", second)
            .with("timeperiod3", third)
            .with("datatype", format);
        self.query(Operation::UltimateOsc, &args).await
    }

    /// Hilbert transform, sine wave.
    pub async fn hilbert_transform_sine(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.hilbert(Operation::HtSine, symbol, interval, series_type, format)
            .await
    }

    /// Hilbert transform, trend vs cycle mode.
    pub async fn hilbert_transform_trendmode(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.hilbert(Operation::HtTrendMode, symbol, interval, series_type, format)
            .await
    }

    /// Hilbert transform, dominant cycle period.
    pub async fn hilbert_transform_dcperiod(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        self.hilbert(Operation::HtDcPeriod, symbol, interval, series_type, format)
            .await
    }

    async fn windowed_series(
        &self,
        operation: Operation,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("time_period", time_period)
            .with("series_type", series_type)
            .with("datatype", format);
        self.query(operation, &args).await
    }

    async fn windowed(
        &self,
        operation: Operation,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("time_period", time_period)
            .with("datatype", format);
        self.query(operation, &args).await
    }

    async fn hilbert(
        &self,
        operation: Operation,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        format: DataFormat,
    ) -> Result<Response, ClientError> {
        let args = Args::for_symbol(symbol)
            .with("interval", interval)
            .with("series_type", series_type)
            .with("datatype", format);
        self.query(operation, &args).await
    }
}
