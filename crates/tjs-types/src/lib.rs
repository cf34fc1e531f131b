//! Normalized types and the type-engine interface.
//!
//! The completion engine never looks inside the checker's own type
//! representation. It only:
//! - asks the engine for member maps and component configs ([`TypeEngine`])
//! - normalizes engine types into the client-facing [`Ty`] tree
//! - prints [`Ty`] values for display ([`printer`])

pub mod ty;
pub use ty::{
    AliasT, ArrT, FunParam, FunT, GenericKind, InterfaceT, ObjT, Prop, RestParam, Symbol, Ty,
    TypeParam, Utility,
};

pub mod printer;

// Module-level facts threaded to the normalizer
pub mod file_sig;
pub use file_sig::FileSig;

pub mod engine;
pub use engine::{MemberExtraction, MemberMap, NormalizationError, TypeEngine};

#[cfg(test)]
#[path = "tests/printer_tests.rs"]
mod printer_tests;
