use lambda_runtime::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_LEVEL_ENV: &str = "AWS_LAMBDA_LOG_LEVEL";
pub const RUST_LOG_ENV: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV: &str = "AWS_LAMBDA_LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info";

const LEVEL_NAMES: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key lookup.
    ///
    /// Lambda's own log level control wins over `RUST_LOG`. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let filter = non_blank(LOG_LEVEL_ENV)
            .or_else(|| non_blank(RUST_LOG_ENV))
            .map(|value| normalize_level(&value))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = match non_blank(LOG_FORMAT_ENV) {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self { filter, format }
    }

    /// Parsed filter, falling back to the default level when the directive
    /// does not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

fn normalize_level(value: &str) -> String {
    let lowered = value.to_ascii_lowercase();
    if LEVEL_NAMES.contains(&lowered.as_str()) {
        lowered
    } else {
        value.to_string()
    }
}

/// Installs the global subscriber. CloudWatch stamps ingestion time, so lines
/// carry neither timestamps nor module targets.
pub fn init_tracing(config: &LogConfig) -> Result<(), Error> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(false)
        .without_time();

    match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(false).try_init(),
    }
}
