//! Diagnostic logging setup for `search_radar`.
//!
//! stdout carries the JSON result, so diagnostics go to stderr or to the file
//! named by `SEARCH_RADAR_LOG_FILE`.

use crate::constants;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::str::FromStr;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Event encoding selected by `SEARCH_RADAR_LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unrecognized {} '{other}'. Valid values: 'json', 'text'.",
                constants::ENV_LOG_FORMAT
            )),
        }
    }
}

/// Destination for formatted events.
#[derive(Debug)]
enum LogSink {
    Stderr,
    File(File),
}

impl LogSink {
    /// Opens `path` for appending; stderr is used when it is unset or cannot be opened.
    fn open(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::Stderr;
        };
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self::File(file),
            Err(e) => {
                eprintln!("Warning: Could not open log file '{path}': {e}. Using stderr.");
                Self::Stderr
            }
        }
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = Box<dyn Write + 'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            Self::Stderr => Box::new(io::stderr()),
            Self::File(file) => Box::new(file),
        }
    }
}

/// Picks the filter directive: `-v` flags win over `SEARCH_RADAR_LOG`.
#[must_use]
pub fn log_level(verbosity: u8, env_level: Option<String>) -> String {
    match verbosity {
        0 => env_level.unwrap_or_else(|| "error".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

type FilteredRegistry = Layered<EnvFilter, Registry>;

fn output_layer(format: LogFormat, sink: LogSink) -> Box<dyn Layer<FilteredRegistry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer().with_writer(sink);
    match format {
        LogFormat::Text => layer.with_target(true).boxed(),
        LogFormat::Json => layer
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed(),
    }
}

/// Installs the global subscriber from `-v` and the `SEARCH_RADAR_LOG*` variables.
pub fn init_tracing(verbosity: u8) {
    let directive = log_level(verbosity, std::env::var(constants::ENV_LOG).ok());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("error"));

    let format = std::env::var(constants::ENV_LOG_FORMAT)
        .ok()
        .map_or(Ok(LogFormat::default()), |value| value.parse())
        .unwrap_or_else(|warning| {
            // No subscriber exists yet to carry this message.
            eprintln!("Warning: {warning} Using 'text'.");
            LogFormat::Text
        });

    let sink = LogSink::open(std::env::var(constants::ENV_LOG_FILE).ok().as_deref());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(output_layer(format, sink))
        .init();
}
