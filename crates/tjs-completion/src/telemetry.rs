//! Per-request diagnostic record.

use serde::Serialize;
use serde_json::{Map, Value};

/// Values of the `result` key.
pub mod tags {
    pub const SUCCESS: &str = "SUCCESS";
    pub const SUCCESS_MODULE: &str = "SUCCESS_MODULE";
    pub const PARTIAL: &str = "PARTIAL";
    pub const FAILURE_NORMALIZER: &str = "FAILURE_NORMALIZER";
    pub const FAILURE_NULLABLE: &str = "FAILURE_NULLABLE";
    pub const FAILURE_NO_COVERAGE: &str = "FAILURE_NO_COVERAGE";
    pub const FAILURE_UNHANDLED_TYPE: &str = "FAILURE_UNHANDLED_TYPE";
    pub const FAILURE_UNHANDLED_MEMBERS: &str = "FAILURE_UNHANDLED_MEMBERS";
}

/// Values of the `ac_type` key.
pub mod ac_type {
    pub const IDENTIFIER: &str = "Acid";
    pub const MEMBER: &str = "Acmem";
    pub const JSX: &str = "Acjsx";
    pub const NONE: &str = "None";
}

/// An insertion-ordered JSON object attached to every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Telemetry(Map<String, Value>);

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `result` tag, if one was recorded.
    pub fn result(&self) -> Option<&str> {
        self.get("result").and_then(Value::as_str)
    }

    /// Copy every key of `other` into `self`; keys of `other` win.
    pub fn merge(&mut self, other: Telemetry) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
