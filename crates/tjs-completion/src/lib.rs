//! Completion-context resolution for statically-typed JavaScript.
//!
//! Given a cursor position this crate:
//! 1. Splices a sentinel identifier into the source at the cursor
//! 2. Has the type engine re-check the modified text
//! 3. Classifies the completion context (identifier, member, JSX attribute)
//! 4. Collects candidates from the scope chain or the receiver's members
//! 5. Normalizes each candidate's type and formats completion items
//!
//! Every response carries a [`Telemetry`] record, success or failure.

// Sentinel injection and location correction
pub mod token;
pub use token::{
    InjectedText, inject_sentinel, remove_sentinel_before_loc, remove_sentinel_from_loc,
};

// Completion context classification
pub mod request;
pub use request::{CompletionRequest, IdKind};
pub mod classify;

// Completion items and legacy serialization
pub mod item;
pub use item::{CompletionItem, CompletionKind, FuncDetails, FuncParam};

pub mod error;
pub use error::CompletionError;

pub mod telemetry;
pub use telemetry::Telemetry;

// Resolvers
pub mod identifier;
pub mod member;
pub mod jsx;

// Entry points
pub mod dispatch;
pub use dispatch::{CompletionResponse, get_completions};
pub mod pipeline;
pub use pipeline::autocomplete;

pub mod options;
pub use options::{CompletionOptions, OptionsError};

pub mod tracing_config;

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod token_tests;

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod item_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
