use indexmap::IndexMap;

/// Caller-supplied arguments for [`Client::query`](crate::client::Client::query).
///
/// Values are kept as text, the form they take on the wire. Anything that
/// implements `Display` can be inserted, so typed enums and integers work
/// directly:
///
/// ```
/// use market_data_client::{models::Interval, request::Args};
///
/// let args = Args::for_symbol("ibm")
///     .with("interval", Interval::Weekly)
///     .with("time_period", 30);
/// assert_eq!(args.get("time_period"), Some("30"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(IndexMap<String, String>);

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an argument set with the required `symbol`.
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        let mut args = Self::new();
        args.set("symbol", symbol.into());
        args
    }

    /// Builder-style [`Args::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Inserts or replaces an argument. A replaced argument keeps its
    /// original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}
