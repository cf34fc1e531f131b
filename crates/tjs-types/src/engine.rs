//! The type-engine interface.
//!
//! Everything the completion engine needs from the checker goes through
//! [`TypeEngine`]. All calls are synchronous; a request owns the typed tree
//! it got from [`TypeEngine::recheck`] and nothing here is shared across
//! requests.

use crate::file_sig::FileSig;
use crate::printer;
use crate::ty::Ty;
use indexmap::IndexMap;
use std::fmt;
use tjs_ast::TypedProgram;
use tjs_common::Loc;

/// Members of a receiver type, keyed by member name, in declaration order.
pub type MemberMap<T> = IndexMap<String, T>;

/// Outcome of asking the engine for the members of a receiver type.
#[derive(Debug, Clone)]
pub enum MemberExtraction<T> {
    Success(MemberMap<T>),
    /// Members of a module object (`import * as m`, `require(...)`).
    SuccessModule(MemberMap<T>),
    /// Receiver may be `null` or `undefined`.
    FailureNullishType(T),
    /// Receiver is `any`; there is nothing useful to offer.
    FailureAnyType(T),
    /// The engine cannot enumerate members of this kind of type.
    FailureUnhandledType(T),
    /// The type is understood but its member shape is not.
    FailureUnhandledMembers(T),
}

/// Why a type could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    UnsupportedType(String),
    UnresolvedName(String),
    RecursionLimit,
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizationError::UnsupportedType(desc) => write!(f, "Unsupported type: {desc}"),
            NormalizationError::UnresolvedName(name) => write!(f, "Unresolved name: {name}"),
            NormalizationError::RecursionLimit => write!(f, "Recursion limit exceeded"),
        }
    }
}

impl std::error::Error for NormalizationError {}

/// Services the completion engine consumes from the type checker.
pub trait TypeEngine {
    /// The checker's internal type representation.
    type Type: Clone + fmt::Debug;

    /// Re-check the file with the sentinel spliced in. `None` when no typed
    /// tree could be produced.
    fn recheck(&self, text: &str) -> Option<TypedProgram<Self::Type>>;

    /// Members of `ty`, optionally including those inherited through a
    /// prototype chain.
    fn extract_members(
        &self,
        ty: &Self::Type,
        include_proto: bool,
    ) -> MemberExtraction<Self::Type>;

    /// Declared props type of a component type.
    fn component_config(&self, component: &Self::Type) -> Self::Type;

    /// Location the type (or the member it describes) was defined at.
    fn type_loc(&self, ty: &Self::Type) -> Loc;

    fn normalize(&self, sig: &FileSig, ty: &Self::Type, loc: &Loc)
    -> Result<Ty, NormalizationError>;

    /// Normalize several types at once so the engine can share work between
    /// them. Results come back in input order.
    fn normalize_batch(
        &self,
        sig: &FileSig,
        types: Vec<(Loc, Self::Type)>,
    ) -> Vec<(Loc, Result<Ty, NormalizationError>)> {
        types
            .into_iter()
            .map(|(loc, ty)| {
                let result = self.normalize(sig, &ty, &loc);
                (loc, result)
            })
            .collect()
    }

    fn stringify(&self, ty: &Ty) -> String {
        printer::print(ty)
    }

    /// Short description of a raw type for diagnostics.
    fn describe(&self, ty: &Self::Type) -> String {
        format!("{ty:?}")
    }
}
