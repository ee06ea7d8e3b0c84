use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::net::SocketAddr;
use std::str::FromStr;
use thiserror::Error;

/// Listen address used in local mode when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Set by the Lambda runtime in every function execution environment
pub const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    /// Invocations arrive through the Lambda runtime API
    Lambda,
    /// Plain HTTP listener on `bind_address`
    Local,
}

impl FromStr for RuntimeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lambda" => Ok(RuntimeMode::Lambda),
            "local" => Ok(RuntimeMode::Local),
            _ => Err(ConfigError::InvalidValue {
                var: "JWKS_RUNTIME".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                var: "LOG_FORMAT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub runtime: RuntimeMode,
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: String, value: String },

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(#[from] std::net::AddrParseError),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&utf8_vars(env::vars_os()))
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let runtime = match vars.get("JWKS_RUNTIME") {
            Some(value) => value.parse()?,
            None if vars.contains_key(LAMBDA_RUNTIME_API_VAR) => RuntimeMode::Lambda,
            None => RuntimeMode::Local,
        };

        let bind_address = vars
            .get("BIND_ADDRESS")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_ADDRESS)
            .parse()?;

        let log_format = match vars.get("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None if runtime == RuntimeMode::Lambda => LogFormat::Json,
            None => LogFormat::Text,
        };

        Ok(Config {
            runtime,
            bind_address,
            log_format,
        })
    }
}

/// Keep only variables whose name and value are valid UTF-8
///
/// Non-UTF-8 entries are dropped instead of aborting startup.
fn utf8_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
