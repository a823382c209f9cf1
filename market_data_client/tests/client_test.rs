mod common;
use common::{RecordingTransport, client};

use market_data_client::{
    Args, ClientError, Operation, Response,
    models::{DataFormat, Interval, OutputSize, SeriesType},
    response::DecodeError,
};
use reqwest::StatusCode;
use serde_json::json;

const DAILY_CSV: &str = "timestamp,open,high,low,close,adjusted_close,volume\r\n\
2024-05-03,186.65,187.00,182.66,183.38,183.38,163224109\r\n\
2024-05-02,172.51,173.42,170.89,173.03,173.03,94214915\r\n";

#[tokio::test]
async fn ts_daily_csv_round_trip() {
    let client = client(RecordingTransport::ok(DAILY_CSV));

    let response = client
        .ts_daily("aapl", true, OutputSize::Compact, DataFormat::Csv)
        .await
        .unwrap();

    let table = response.as_table().expect("csv yields a table");
    assert_eq!(table.columns()[0], "time");
    assert_eq!(table.times().collect::<Vec<_>>(), ["2024-05-03", "2024-05-02"]);
    assert_eq!(table.row("2024-05-02").unwrap().get("volume"), Some("94214915"));

    assert_eq!(
        client.transport().calls(),
        ["https://av.test/query?function=TIME_SERIES_DAILY_ADJUSTED&symbol=AAPL\
          &outputsize=compact&datatype=csv&apikey=demo"]
    );
}

#[tokio::test]
async fn json_payload_is_returned_unchanged() {
    let body = json!({
        "Meta Data": {"1: Symbol": "IBM", "2: Indicator": "Relative Strength Index (RSI)"},
        "Technical Analysis: RSI": {"2024-05-03": {"RSI": "41.7"}}
    });
    let client = client(RecordingTransport::ok(body.to_string()));

    let response = client
        .rsi("ibm", Interval::Weekly, 10, SeriesType::Open, DataFormat::Json)
        .await
        .unwrap();

    assert_eq!(response, Response::Structured(body));
    let calls = client.transport().calls();
    assert!(calls[0].contains("function=RSI&symbol=IBM&interval=weekly&time_period=10&series_type=open&datatype=json"));
}

#[tokio::test]
async fn every_typed_method_sends_its_function_code() {
    let client = client(RecordingTransport::ok("{}"));
    let (i, s, f) = (Interval::Daily, SeriesType::Close, DataFormat::Json);

    client.sma("x", i, 15, s, f).await.unwrap();
    client.ema("x", i, 15, s, f).await.unwrap();
    client.wma("x", i, 15, s, f).await.unwrap();
    client.macd("x", i, s, f, 12, 26, 9).await.unwrap();
    client.stoch("x", i, f, 5, 3, 3).await.unwrap();
    client.rsi("x", i, 14, s, f).await.unwrap();
    client.momentum("x", i, 14, s, f).await.unwrap();
    client.ppo("x", i, s, f, 12, 26).await.unwrap();
    client.ad("x", i, f).await.unwrap();
    client.adx("x", i, 14, f).await.unwrap();
    client.cci("x", i, 20, f).await.unwrap();
    client.aroon("x", i, 20, f).await.unwrap();
    client.aroon_osc("x", i, 20, f).await.unwrap();
    client.ultimate_osc("x", i, [7, 14, 28], f).await.unwrap();
    client.hilbert_transform_sine("x", i, s, f).await.unwrap();
    client.hilbert_transform_trendmode("x", i, s, f).await.unwrap();
    client.hilbert_transform_dcperiod("x", i, s, f).await.unwrap();
    client.ts_daily("x", false, OutputSize::Full, f).await.unwrap();

    let functions: Vec<String> = client
        .transport()
        .calls()
        .iter()
        .map(|url| {
            let url = url::Url::parse(url).unwrap();
            url.query_pairs()
                .find(|(name, _)| name == "function")
                .map(|(_, value)| value.into_owned())
                .unwrap()
        })
        .collect();

    assert_eq!(
        functions,
        [
            "SMA", "EMA", "WMA", "MACD", "STOCH", "RSI", "MOM", "PPO", "AD", "ADX", "CCI", "AROON",
            "AROONOSC", "ULTOSC", "HT_SINE", "HT_TRENDMODE", "HT_DCPERIOD", "TIME_SERIES_DAILY",
        ]
    );
}

#[tokio::test]
async fn ultimate_osc_sends_three_windows() {
    let client = client(RecordingTransport::ok("time,ULTOSC\n"));
    client
        .ultimate_osc("spy", Interval::SixtyMinutes, [5, 10, 20], DataFormat::Csv)
        .await
        .unwrap();
    assert!(client.transport().calls()[0].contains("timeperiod1=5&timeperiod2=10&timeperiod3=20"));
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_transport() {
    let client = client(RecordingTransport::ok("{}"));
    let bad = [
        (Operation::Sma, Args::for_symbol("ibm").with("interval", "90min")),
        (Operation::Ema, Args::for_symbol("ibm").with("series_type", "mid")),
        (Operation::Macd, Args::for_symbol("ibm").with("datatype", "xlsx")),
        (Operation::TimeSeriesDaily, Args::for_symbol("ibm").with("outputsize", "medium")),
        (Operation::Ad, Args::for_symbol("ibm").with("series_type", "close")),
        (Operation::Cci, Args::new()),
    ];

    for (operation, args) in bad {
        let err = client.query(operation, &args).await.unwrap_err();
        assert!(err.is_invalid_argument(), "{operation}: {err}");
    }
    assert!(client.transport().calls().is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let client = client(RecordingTransport::status(
        StatusCode::INTERNAL_SERVER_ERROR,
        "upstream exploded",
    ));

    let err = client
        .query(Operation::Aroon, &Args::for_symbol("ibm"))
        .await
        .unwrap_err();

    match err {
        ClientError::Transport { source, .. } => {
            assert_eq!(source.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    // One attempt only, regardless of max_attempts.
    assert_eq!(client.transport().calls().len(), 1);
    assert_eq!(client.max_attempts(), 3);
}

#[tokio::test]
async fn ragged_csv_is_a_decode_error() {
    let client = client(RecordingTransport::ok("date,open\n2020-01-01,100\n2020-01-02\n"));

    let err = client
        .query(Operation::Wma, &Args::for_symbol("ibm"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Decode { source: DecodeError::Csv(_), .. }
    ));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let client = client(RecordingTransport::ok("<html>rate limited</html>"));

    let err = client
        .query(Operation::Adx, &Args::for_symbol("ibm").with("datatype", "json"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Decode { source: DecodeError::Json(_), .. }
    ));
}
