//! Common types shared by the tjs crates.
//!
//! This crate provides:
//! - Line/column source locations (`Position`, `Loc`)
//! - The completion sentinel token and its fixed width

// Position/Loc types for line/column source locations
pub mod position;
pub use position::{Loc, Position};

// Sentinel token spliced into the source at the cursor
pub mod sentinel;
pub use sentinel::{SENTINEL_TOKEN, SENTINEL_WIDTH, is_sentinel_name};
