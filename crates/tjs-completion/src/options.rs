//! Completion options.
//!
//! Options are read from a JSON object (usually a section of the editor
//! server's configuration file); every field is optional.
//!
//! ```json
//! { "signatureDetails": false, "excludedMembers": ["$$typeof"] }
//! ```
//!
//! `TJS_SIGNATURE_DETAILS=0|1` overrides `signatureDetails`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const SIGNATURE_DETAILS_ENV: &str = "TJS_SIGNATURE_DETAILS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompletionOptions {
    /// Split function types into parameters and return type.
    pub signature_details: bool,
    /// Offer members inherited through the prototype chain on member
    /// completion. JSX attribute completion never does.
    pub include_proto_members: bool,
    /// Appended to an attribute name to form its insert text.
    pub jsx_insert_suffix: String,
    /// Member names never offered.
    pub excluded_members: Vec<String>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        CompletionOptions {
            signature_details: true,
            include_proto_members: true,
            jsx_insert_suffix: "=".to_string(),
            excluded_members: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub enum OptionsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidEnv {
        var: &'static str,
        value: String,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            OptionsError::Parse(err) => write!(f, "invalid completion options: {err}"),
            OptionsError::InvalidEnv { var, value } => {
                write!(f, "{var} must be 0 or 1, got {value:?}")
            }
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Io { source, .. } => Some(source),
            OptionsError::Parse(err) => Some(err),
            OptionsError::InvalidEnv { .. } => None,
        }
    }
}

impl CompletionOptions {
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        serde_json::from_str(text).map_err(OptionsError::Parse)
    }

    pub fn from_path(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), OptionsError> {
        self.apply_env_overrides_with(|var| std::env::var(var).ok())
    }

    /// Apply overrides read through `lookup`.
    pub fn apply_env_overrides_with(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), OptionsError> {
        if let Some(value) = lookup(SIGNATURE_DETAILS_ENV) {
            self.signature_details = match value.trim() {
                "1" => true,
                "0" => false,
                _ => {
                    return Err(OptionsError::InvalidEnv {
                        var: SIGNATURE_DETAILS_ENV,
                        value,
                    });
                }
            };
        }
        Ok(())
    }
}
