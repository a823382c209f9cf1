//! Client configuration: credential, endpoint, and transport knobs.
//!
//! A [`ClientConfig`] can be built in code, read from the environment
//! ([`ClientConfig::from_env`]), or loaded from a TOML file
//! ([`ClientConfig::from_toml_path`]):
//!
//! ```toml
//! api_key = "demo"
//! base_url = "https://www.alphavantage.co/query"   # optional
//! max_attempts = 3                                  # optional, stored only
//! timeout_secs = 30                                 # optional
//! ```
//!
//! When the file has no `api_key`, the `ALPHAVANTAGE_API_KEY` environment
//! variable is used instead.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use secrecy::SecretString;
use serde::Deserialize;
use shared_utils::env::{MissingEnvVarError, get_env_var, get_optional_env_var};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
pub const BASE_URL_ENV: &str = "ALPHAVANTAGE_BASE_URL";

/// Errors that can occur while assembling a client configuration.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ConfigError {
    /// missed environment variable.
    #[snafu(display("{source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to read config file {}: {source}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Invalid config file: {source}"))]
    ParseToml {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    /// Neither the config file nor the environment supplied a key.
    #[snafu(display("No API key configured: set `api_key` or {API_KEY_ENV}"))]
    MissingApiKey { backtrace: Backtrace },

    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Settings for a [`Client`](super::Client).
#[derive(Debug)]
pub struct ClientConfig {
    /// Credential sent as the `apikey` query parameter.
    pub api_key: SecretString,
    pub base_url: String,
    /// Accepted for compatibility with existing configurations. Requests are
    /// never retried, whatever this is set to.
    pub max_attempts: u32,
    /// Overall per-request timeout handed to the HTTP transport.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_key: Option<String>,
    base_url: Option<String>,
    max_attempts: Option<u32>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads `ALPHAVANTAGE_API_KEY` (required) and `ALPHAVANTAGE_BASE_URL`
    /// (optional).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = get_env_var(API_KEY_ENV).context(MissingEnvVarSnafu)?;
        let mut config = Self::new(api_key);
        if let Some(base_url) = get_optional_env_var(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents).context(ParseTomlSnafu)?;
        Self::from_file(file)
    }

    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_file(read_config_file(path.as_ref())?)
    }

    /// Resolves only the endpoint, without requiring a credential.
    ///
    /// With a config file its `base_url` is used; otherwise
    /// `ALPHAVANTAGE_BASE_URL`. Both fall back to [`DEFAULT_BASE_URL`].
    pub fn resolve_base_url(path: Option<&Path>) -> Result<String, ConfigError> {
        let base_url = match path {
            Some(path) => read_config_file(path)?.base_url,
            None => get_optional_env_var(BASE_URL_ENV),
        };
        Ok(base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()))
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let api_key = file
            .api_key
            .filter(|key| !key.trim().is_empty())
            .or_else(|| get_optional_env_var(API_KEY_ENV))
            .context(MissingApiKeySnafu)?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(max_attempts) = file.max_attempts {
            config.max_attempts = max_attempts;
        }
        config.timeout = file.timeout_secs.map(Duration::from_secs);
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).context(ReadFileSnafu { path })?;
    toml::from_str(&contents).context(ParseTomlSnafu)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;
    use serial_test::serial;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("demo");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_attempts, 3);
        assert!(config.timeout.is_none());
        assert!(!format!("{config:?}").contains("demo"));
    }

    #[test]
    #[serial]
    fn loads_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_key = \"file-key\"\nbase_url = \"http://localhost:9000/query\"\nmax_attempts = 5\ntimeout_secs = 12"
        )
        .unwrap();

        let config = ClientConfig::from_toml_path(file.path()).unwrap();
        assert_eq!(config.api_key.expose_secret(), "file-key");
        assert_eq!(config.base_url, "http://localhost:9000/query");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    #[serial]
    fn toml_without_key_falls_back_to_env() {
        unsafe { std::env::set_var(API_KEY_ENV, "env-key") };
        let config = ClientConfig::from_toml_str("max_attempts = 1").unwrap();
        assert_eq!(config.api_key.expose_secret(), "env-key");
        unsafe { std::env::remove_var(API_KEY_ENV) };

        let err = ClientConfig::from_toml_str("").unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = ClientConfig::from_toml_str("api_key = \"k\"\nretries = 4").unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
    }

    #[test]
    fn missing_file_names_path() {
        let err = ClientConfig::from_toml_path("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    #[serial]
    fn base_url_resolves_without_a_key() {
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
        assert_eq!(ClientConfig::resolve_base_url(None).unwrap(), DEFAULT_BASE_URL);

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:9000/query\"").unwrap();
        assert_eq!(
            ClientConfig::resolve_base_url(Some(file.path())).unwrap(),
            "http://localhost:9000/query"
        );

        unsafe { std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:1/query") };
        assert_eq!(
            ClientConfig::resolve_base_url(None).unwrap(),
            "http://127.0.0.1:1/query"
        );
        unsafe { std::env::remove_var(BASE_URL_ENV) };
    }

    #[test]
    #[serial]
    fn from_env_requires_key() {
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
        assert!(matches!(ClientConfig::from_env(), Err(ConfigError::MissingEnvVar { .. })));

        unsafe {
            std::env::set_var(API_KEY_ENV, "env-key");
            std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:1/query");
        }
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:1/query");
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
    }
}
