//! Completion requests.

use rustc_hash::FxHashSet;
use tjs_common::Loc;

/// What kind of identifier is being completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// An identifier in expression or binding position.
    Ordinary,
    /// The tag name of a JSX element (`<Fo|`).
    JsxName,
}

/// The completion context found at the cursor.
///
/// Locations are those of the sentinel-bearing identifier, as reported by the
/// re-checked tree; the dispatcher corrects them before resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionRequest<T> {
    Identifier {
        loc: Loc,
        trigger_char: Option<String>,
        id_kind: IdKind,
    },
    Member {
        name: String,
        loc: Loc,
        receiver_type: T,
    },
    Jsx {
        name: String,
        used_attrs: FxHashSet<String>,
        loc: Loc,
        component_type: T,
    },
}

impl<T> CompletionRequest<T> {
    pub fn loc(&self) -> &Loc {
        match self {
            CompletionRequest::Identifier { loc, .. }
            | CompletionRequest::Member { loc, .. }
            | CompletionRequest::Jsx { loc, .. } => loc,
        }
    }

    /// Telemetry label for the request kind.
    pub fn kind_label(&self) -> &'static str {
        match self {
            CompletionRequest::Identifier { .. } => "Acid",
            CompletionRequest::Member { .. } => "Acmem",
            CompletionRequest::Jsx { .. } => "Acjsx",
        }
    }
}
