//! Response normalizer: decodes a raw body according to its declared format.
//!
//! CSV bodies become a [`TimeSeriesTable`] whose first column is renamed to
//! `time`; JSON bodies are parsed into a [`serde_json::Value`] without any
//! schema checks. Either decode succeeds as a whole or fails with a
//! [`DecodeError`]; no partial table is ever returned.

mod errors;
mod table;

pub use errors::DecodeError;
pub use table::{Record, TIME_COLUMN, TimeSeriesTable};

use serde_json::Value;

use crate::models::DataFormat;

/// A decoded response, shaped by the declared format.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// CSV body.
    Table(TimeSeriesTable),
    /// JSON body, mirroring the remote document as-is.
    Structured(Value),
}

impl Response {
    pub fn format(&self) -> DataFormat {
        match self {
            Response::Table(_) => DataFormat::Csv,
            Response::Structured(_) => DataFormat::Json,
        }
    }

    pub fn as_table(&self) -> Option<&TimeSeriesTable> {
        match self {
            Response::Table(table) => Some(table),
            Response::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Response::Structured(value) => Some(value),
            Response::Table(_) => None,
        }
    }

    pub fn into_table(self) -> Option<TimeSeriesTable> {
        match self {
            Response::Table(table) => Some(table),
            Response::Structured(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            Response::Structured(value) => Some(value),
            Response::Table(_) => None,
        }
    }
}

/// Decodes `body` as `format`.
pub fn normalize(body: &[u8], format: DataFormat) -> Result<Response, DecodeError> {
    match format {
        DataFormat::Csv => decode_csv(body).map(Response::Table),
        DataFormat::Json => decode_json(body).map(Response::Structured),
    }
}

/// Strict CSV decode: a header row is required and every record must have
/// exactly as many fields as the header.
pub fn decode_csv(body: &[u8]) -> Result<TimeSeriesTable, DecodeError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(body);

    let mut columns: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    match columns.first_mut() {
        Some(first) => *first = TIME_COLUMN.to_string(),
        None => return Err(DecodeError::MissingHeader),
    }

    let rows = reader
        .records()
        .map(|record| {
            record.map(|record| record.iter().map(str::to_owned).collect::<Vec<String>>())
        })
        .collect::<Result<Vec<Vec<String>>, csv::Error>>()?;

    Ok(TimeSeriesTable::from_parts(columns, rows))
}

pub fn decode_json(body: &[u8]) -> Result<Value, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn csv_first_column_becomes_time() {
        let body = b"date,open\n2020-01-01,100\n2020-01-02,101\n";
        let table = normalize(body, DataFormat::Csv).unwrap().into_table().unwrap();
        assert_eq!(table.columns(), ["time", "open"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.record(0).unwrap().values(), ["2020-01-01", "100"]);
        assert_eq!(table.record(1).unwrap().values(), ["2020-01-02", "101"]);
    }

    #[test]
    fn csv_time_header_is_left_as_is() {
        let body = b"time,SMA\r\n2024-05-01 16:00,170.3\r\n";
        let table = decode_csv(body).unwrap();
        assert_eq!(table.columns(), ["time", "SMA"]);
        assert_eq!(table.row("2024-05-01 16:00").unwrap().get("SMA"), Some("170.3"));
    }

    #[test]
    fn csv_values_are_not_typecast() {
        let body = b"timestamp,close\n2024-01-02,0100.500\n";
        let table = decode_csv(body).unwrap();
        assert_eq!(table.column("close").unwrap(), ["0100.500"]);
    }

    #[test]
    fn csv_header_only_yields_empty_table() {
        let table = decode_csv(b"timestamp,open,high\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 3);
    }

    #[test]
    fn ragged_csv_is_rejected() {
        let body = b"date,open\n2020-01-01,100\n2020-01-02,101,7\n";
        let err = normalize(body, DataFormat::Csv).unwrap_err();
        assert!(matches!(err, DecodeError::Csv(_)));

        let short = b"date,open,close\n2020-01-01,100\n";
        assert!(decode_csv(short).is_err());
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let in_row = normalize(b"date,open\n2020-01-01,\xff\n", DataFormat::Csv);
        assert!(matches!(in_row, Err(DecodeError::Csv(_))));

        let in_header = normalize(b"date,\xffopen\n2020-01-01,100\n", DataFormat::Csv);
        assert!(matches!(in_header, Err(DecodeError::Csv(_))));
    }

    #[test]
    fn empty_body_has_no_header() {
        assert!(matches!(decode_csv(b""), Err(DecodeError::MissingHeader)));
    }

    #[test]
    fn json_is_passed_through() {
        let response = normalize(br#"{"a": 1}"#, DataFormat::Json).unwrap();
        assert_eq!(response.format(), DataFormat::Json);
        assert_eq!(response.into_structured().unwrap(), json!({"a": 1}));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = normalize(b"{\"a\": ", DataFormat::Json).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
