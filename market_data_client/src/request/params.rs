use std::fmt;

use indexmap::IndexMap;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::models::DataFormat;

/// Query-parameter name carrying the credential.
pub const APIKEY: &str = "apikey";

/// Fully validated query parameters for one request.
///
/// Iteration order is `function`, `symbol`, the operation parameters in
/// descriptor order, `datatype`, and finally `apikey`. Two builds from the
/// same inputs produce byte-identical query strings.
///
/// The credential never shows up in `Debug` output.
pub struct RequestParams {
    entries: IndexMap<&'static str, String>,
    format: DataFormat,
    api_key: SecretString,
}

impl RequestParams {
    pub(crate) fn new(
        entries: IndexMap<&'static str, String>,
        format: DataFormat,
        api_key: SecretString,
    ) -> Self {
        Self {
            entries,
            format,
            api_key,
        }
    }

    /// Looks up a non-credential parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn function(&self) -> &str {
        self.get("function").unwrap_or_default()
    }

    pub fn symbol(&self) -> &str {
        self.get("symbol").unwrap_or_default()
    }

    /// The declared response format, i.e. the parsed `datatype` value.
    pub fn format(&self) -> DataFormat {
        self.format
    }

    /// Parameter names in query-string order, `apikey` included.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied().chain(std::iter::once(APIKEY))
    }

    /// Name/value pairs in query-string order, credential last.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .chain(std::iter::once((APIKEY, self.api_key.expose_secret())))
            .collect()
    }

    /// The full request URL against `base_url`.
    pub fn to_url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(base_url, self.pairs())
    }
}

impl fmt::Debug for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter())
            .entry(&APIKEY, &"[REDACTED]")
            .finish()
    }
}
