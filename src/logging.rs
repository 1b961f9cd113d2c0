use anyhow::{anyhow, Result};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| Self::default().level),
            format,
        }
    }

    /// Installs the global subscriber. Logs go to stderr so stdout stays
    /// reserved for results.
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match self.format {
            LogFormat::Json => registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init(),
            LogFormat::Pretty => registry.with(fmt::layer().pretty().with_writer(std::io::stderr)).try_init(),
            LogFormat::Compact => registry.with(fmt::layer().compact().with_writer(std::io::stderr)).try_init(),
        };
        result.map_err(|e| anyhow!("Failed to initialize logging: {}", e))
    }
}
