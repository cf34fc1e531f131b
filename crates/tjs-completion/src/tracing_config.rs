//! Tracing setup for hosts embedding the completion engine.
//!
//! `TJS_LOG` (or, failing that, `RUST_LOG`) holds the filter directives and
//! `TJS_LOG_FORMAT` picks the output:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented spans via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! TJS_LOG=tjs_completion=debug TJS_LOG_FORMAT=tree my-editor-server
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "TJS_LOG";
pub const FALLBACK_LOG_ENV: &str = "RUST_LOG";
pub const LOG_FORMAT_ENV: &str = "TJS_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Subscriber settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl TracingSettings {
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// `None` when no filter variable is set: logging stays off.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(LOG_ENV).or_else(|| lookup(FALLBACK_LOG_ENV))?;
        let format = lookup(LOG_FORMAT_ENV)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Some(TracingSettings { directives, format })
    }

    /// Invalid directives are skipped rather than rejected.
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }

    /// Install a global subscriber writing to stderr. Returns `false` when
    /// one is already installed; that subscriber is left in place.
    pub fn install(&self) -> bool {
        let filter = self.filter();
        let installed = match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        };
        installed.is_ok()
    }
}

/// Install the subscriber described by the process environment.
///
/// Returns whether a subscriber was installed by this call.
pub fn init_tracing() -> bool {
    TracingSettings::from_env().is_some_and(|settings| settings.install())
}
