// src/logging.rs
use anyhow::anyhow;
use clap::{Args, ValueEnum};
use tracing::level_filters::LevelFilter;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LoggingOpts {
    /// ログ出力形式
    #[arg(
        long,
        value_enum,
        env = "TEXT_ANALYZER_LOG_FORMAT",
        default_value = "json",
        global = true
    )]
    pub log_format: LogFormat,

    /// ログレベル
    #[arg(
        long,
        value_enum,
        env = "TEXT_ANALYZER_LOG_LEVEL",
        default_value = "info",
        global = true
    )]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl LoggingOpts {
    /// Installs the global subscriber. Output goes to stderr without timestamps
    /// (CloudWatch stamps every line) and without ANSI colour.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber is already installed.
    pub fn init(&self) -> anyhow::Result<()> {
        let builder = tracing_subscriber::fmt()
            .with_max_level(self.log_level.to_level_filter())
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .without_time();

        let installed = match self.log_format {
            LogFormat::Json => builder.json().flatten_event(true).with_current_span(true).try_init(),
            LogFormat::Text => builder.compact().try_init(),
        };

        installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
    }
}
