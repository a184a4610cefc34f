//! Logging setup for the folio site.
//!
//! Installs a `tracing` subscriber with an `EnvFilter`, a console layer
//! (pretty or JSONL) and an optional rolling JSONL file layer.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! // Keep the guard alive for as long as file output is needed.
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//!
//! tracing::info!("site starting");
//! ```

pub mod config;

pub use config::{ConsoleConfig, FileConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{
    self,
    format::{Format, Json, JsonFields},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LogInitError {
    /// The log directory or file could not be created
    #[error("Failed to prepare log file: {0}")]
    File(#[from] std::io::Error),

    /// A global subscriber is already installed
    #[error("Global subscriber already set: {0}")]
    AlreadySet(String),
}

/// Builder for configuring and initializing the folio logging subscriber
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty_console(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Returns the configuration the subscriber will be built from
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Initialize the subscriber globally
    ///
    /// Returns the file writer guard, which must be kept alive for the
    /// duration of the program when file output is enabled. Failures are
    /// reported on stderr and leave logging disabled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }

    /// Try to initialize the subscriber globally
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LogInitError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let registry = Registry::default().with(env_filter);
        let console = &self.config.console;

        let (file_writer, guard) = match self.config.file.as_ref() {
            Some(file_config) => {
                let (writer, guard) = create_file_writer(file_config)?;
                (Some(writer), Some(guard))
            }
            None => (None, None),
        };

        // Separate arms keep each layer stack a concrete type
        let result = match (console.enabled, console.pretty, file_writer) {
            (true, true, Some(writer)) => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(console.ansi)
                        .with_target(true),
                )
                .with(json_file_layer(writer))
                .try_init(),
            (true, false, Some(writer)) => registry
                .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
                .with(json_file_layer(writer))
                .try_init(),
            (true, true, None) => registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(console.ansi)
                        .with_target(true),
                )
                .try_init(),
            (true, false, None) => registry
                .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
                .try_init(),
            (false, _, Some(writer)) => registry.with(json_file_layer(writer)).try_init(),
            (false, _, None) => registry.try_init(),
        };

        result.map_err(|e| LogInitError::AlreadySet(e.to_string()))?;
        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL file layer shared by every arm that writes to disk
fn json_file_layer<S>(writer: NonBlocking) -> fmt::Layer<S, JsonFields, Format<Json>, NonBlocking> {
    fmt::layer()
        .json()
        .with_current_span(true)
        .flatten_event(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(writer)
}

/// Creates the non-blocking writer for file output.
///
/// `Never` truncates a single `<prefix>.log`, the other strategies append to
/// rolling files.
fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LogInitError> {
    fs::create_dir_all(&file_config.directory)?;
    let pair = match file_config.rotation {
        RotationStrategy::Never => {
            let file_path = file_config
                .directory
                .join(format!("{}.log", file_config.prefix));
            let file = File::create(&file_path)?;
            tracing_appender::non_blocking(file)
        }
        RotationStrategy::Daily => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::DAILY,
            &file_config.directory,
            &file_config.prefix,
        )),
        RotationStrategy::Hourly => tracing_appender::non_blocking(RollingFileAppender::new(
            Rotation::HOURLY,
            &file_config.directory,
            &file_config.prefix,
        )),
    };
    Ok(pair)
}

/// Initialize logging for development (verbose, pretty console output)
pub fn init_development() -> Option<WorkerGuard> {
    FolioSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .init()
}

/// Initialize logging for tests; repeated calls are harmless
pub fn init_testing() {
    let _ = FolioSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}
