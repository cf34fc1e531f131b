//! Position and location types.
//!
//! Editors talk to us in 1-based lines and 0-based columns, and so does
//! every location stored in the program tree. Keeping one coordinate space
//! end to end means the only adjustment ever applied to a location is the
//! sentinel-width correction done by the completion crate.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// A position in a source file (1-indexed line, 0-indexed column).
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Position {
    /// 1-indexed line number
    pub line: u32,
    /// 0-indexed column
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A range in a source file, optionally tagged with the file it belongs to.
///
/// Ordering compares the source key first, then the start position, then the
/// end position. "Declared before the cursor" is therefore `decl < cursor`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Loc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Arc<str>>,
    pub start: Position,
    pub end: Position,
}

impl Loc {
    pub fn new(source: Option<Arc<str>>, start: Position, end: Position) -> Self {
        Loc { source, start, end }
    }

    /// A location with no source key, from `(line, column)` pairs.
    pub fn span(start: (u32, u32), end: (u32, u32)) -> Self {
        Loc {
            source: None,
            start: Position::new(start.0, start.1),
            end: Position::new(end.0, end.1),
        }
    }

    /// Same location attached to `source`.
    pub fn with_source(mut self, source: Arc<str>) -> Self {
        self.source = Some(source);
        self
    }

    /// Copy of this location with only the end column replaced.
    pub fn with_end_column(&self, column: u32) -> Self {
        Loc {
            source: self.source.clone(),
            start: self.start,
            end: Position::new(self.end.line, column),
        }
    }

    /// Whether `other` lies entirely within this range (bounds inclusive).
    pub fn contains(&self, other: &Loc) -> bool {
        self.source == other.source && self.start <= other.start && other.end <= self.end
    }

    /// Whether `pos` lies within this range (bounds inclusive).
    pub fn contains_position(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl PartialOrd for Loc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Loc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl fmt::Display for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}:")?;
        }
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line,
                self.start.column + 1,
                self.end.column
            )
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start.line,
                self.start.column + 1,
                self.end.line,
                self.end.column
            )
        }
    }
}
