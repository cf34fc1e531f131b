//! Program tree and scope analysis for the tjs completion engine.
//!
//! The tree is generic over the annotation carried by each node:
//! - `Program<(Loc, T)>` is the typed tree produced by the type engine
//! - `Program<Loc>` is the location-only projection scope analysis runs on
//!
//! Type information is recovered after scope analysis through a
//! location-indexed [`TypeTable`] built from the typed tree.

pub mod ast;
pub use ast::{
    Annotation, Block, Class, ClassMember, Expression, Function, FunctionBody, Identifier,
    JsxAttribute, JsxElement, Literal, ObjectProperty, Param, Program, Statement, TypedProgram,
    UntypedProgram, VarKind, VariableDeclarator,
};

// Type-erasing projection (typed tree -> location-only tree)
pub mod map;

// Identifier collection and location-indexed type recovery
pub mod walk;
pub use walk::TypeTable;

// Scope analysis over location-only trees
pub mod scope;
pub use scope::{Def, DefKind, Scope, ScopeId, ScopeInfo, ScopeKind};

#[cfg(test)]
#[path = "tests/scope_tests.rs"]
mod scope_tests;

#[cfg(test)]
#[path = "tests/walk_tests.rs"]
mod walk_tests;
