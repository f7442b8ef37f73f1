//! Configuration loading and logging setup for the `schedule` binary.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `schedule.toml` (or `.json`) in the working directory, if present
//! 3. the file given with `--config`
//! 4. environment variables: `SCHEDULE_LOG_LEVEL`,
//!    `SCHEDULE_ENGINE__LESSON_MINUTES`, `SCHEDULE_ENGINE__FEED__LESSON_COLOR`, ...

use std::io::IsTerminal;
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use schedule_engine::ScheduleConfig;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive, e.g. "warn" or "schedule_engine=debug".
    pub log_level: String,
    pub engine: ScheduleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            engine: ScheduleConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(File::with_name("schedule").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("SCHEDULE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Install the global `tracing` subscriber, writing to stderr so stdout stays
/// clean JSON.
///
/// `RUST_LOG` wins over the configured level unless `explicit` is set.
pub fn init_logging(configured: &str, explicit: Option<&str>, json: bool) {
    let directive = match explicit {
        Some(level) => level.to_string(),
        None => std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string()),
    };
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
