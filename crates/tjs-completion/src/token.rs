//! Sentinel injection and location correction.
//!
//! The type engine is re-run on a copy of the file where the sentinel has
//! been spliced in at the cursor, so `foo.|` becomes `foo.AUTO332` and the
//! parser always finds an identifier to attach a completion context to.
//! Locations reported against that copy are off by the sentinel's width at
//! their end, which [`remove_sentinel_from_loc`] undoes.

use tjs_common::{Loc, Position, SENTINEL_TOKEN, SENTINEL_WIDTH};

/// Source text with the sentinel spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedText {
    /// Full file contents, sentinel included.
    pub text: String,
    /// The line above the cursor, the modified line and the line below,
    /// each with its own line terminator. Missing neighbours contribute
    /// nothing.
    pub context: String,
}

/// Split into lines, keeping terminators. A trailing newline (or an empty
/// file) yields a final empty line so the cursor can sit on it.
fn split_lines(contents: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = contents.split_inclusive('\n').collect();
    if contents.is_empty() || contents.ends_with('\n') {
        lines.push("");
    }
    lines
}

fn split_terminator(line: &str) -> (&str, &str) {
    let content = line.strip_suffix('\n').unwrap_or(line);
    let content = content.strip_suffix('\r').unwrap_or(content);
    line.split_at(content.len())
}

/// Insert the sentinel at `column` (0-based, in bytes) of `line` (1-based).
///
/// A column past the end of the line, or one that does not fall on a
/// character boundary, leaves the line untouched.
pub fn inject_sentinel(contents: &str, line: u32, column: u32) -> InjectedText {
    let target = (line as usize).checked_sub(1);
    let column = column as usize;

    let lines: Vec<String> = split_lines(contents)
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            if Some(idx) != target {
                return raw.to_string();
            }
            let (content, terminator) = split_terminator(raw);
            if column > content.len() || !content.is_char_boundary(column) {
                return raw.to_string();
            }
            let (before, after) = content.split_at(column);
            let mut modified = String::with_capacity(raw.len() + SENTINEL_TOKEN.len());
            modified.push_str(before);
            modified.push_str(SENTINEL_TOKEN);
            modified.push_str(after);
            modified.push_str(terminator);
            modified
        })
        .collect();

    let mut context = String::new();
    if let Some(target) = target {
        for idx in target.saturating_sub(1)..=target + 1 {
            if let Some(text) = lines.get(idx) {
                context.push_str(text);
            }
        }
    }

    InjectedText {
        text: lines.concat(),
        context,
    }
}

/// Map a range computed against sentinel-bearing text back to the editor's
/// coordinates by shortening its end column by the sentinel width.
///
/// Only the end moves: the sentinel sits at or after the start of any range
/// that covers it. Must be applied exactly once per range.
pub fn remove_sentinel_from_loc(loc: &Loc) -> Loc {
    loc.with_end_column(loc.end.column.saturating_sub(SENTINEL_WIDTH))
}

/// Map a range that lies after the sentinel on the cursor's line back to the
/// editor's coordinates. `cursor` is where the sentinel was inserted; ranges
/// starting anywhere else come back unchanged.
pub fn remove_sentinel_before_loc(loc: &Loc, cursor: Position) -> Loc {
    let shifted = loc.start.line == cursor.line
        && loc.start.column >= cursor.column + SENTINEL_WIDTH;
    if !shifted {
        return loc.clone();
    }
    let mut corrected = loc.clone();
    corrected.start.column -= SENTINEL_WIDTH;
    if corrected.end.line == cursor.line {
        corrected.end.column = corrected.end.column.saturating_sub(SENTINEL_WIDTH);
    }
    corrected
}
