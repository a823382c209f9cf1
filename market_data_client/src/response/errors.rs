use thiserror::Error;

/// The response body could not be decoded in its declared format.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed delimited text, including rows whose column count differs
    /// from the header and invalid UTF-8.
    #[error("invalid CSV body: {0}")]
    Csv(#[from] csv::Error),

    /// The body held no header row.
    #[error("CSV body has no header row")]
    MissingHeader,

    /// Malformed JSON text.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}
