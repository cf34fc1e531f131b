//! Identifier collection and type recovery.
//!
//! Scope analysis runs on the location-only projection, so it can tell us
//! *where* each visible binding was declared but not *what type* it has.
//! [`TypeTable`] closes that gap: one full walk over the typed tree indexes
//! the types of the identifiers whose locations we asked for.

use crate::ast::*;
use rustc_hash::{FxHashMap, FxHashSet};
use tjs_common::Loc;

impl<A> Program<A> {
    /// Every identifier in the tree (binding and reference positions), in
    /// source order.
    pub fn identifiers(&self) -> Vec<&Identifier<A>> {
        let mut out = Vec::new();
        for stmt in &self.body {
            collect_statement(stmt, &mut out);
        }
        out
    }
}

fn collect_function<'a, A>(func: &'a Function<A>, out: &mut Vec<&'a Identifier<A>>) {
    if let Some(id) = &func.id {
        out.push(id);
    }
    for param in &func.params {
        out.push(&param.id);
        if let Some(default) = &param.default {
            collect_expression(default, out);
        }
    }
    match &func.body {
        FunctionBody::Block(block) => {
            for stmt in &block.body {
                collect_statement(stmt, out);
            }
        }
        FunctionBody::Expression(expr) => collect_expression(expr, out),
    }
}

fn collect_statement<'a, A>(stmt: &'a Statement<A>, out: &mut Vec<&'a Identifier<A>>) {
    match stmt {
        Statement::VariableDeclaration { declarations, .. } => {
            for decl in declarations {
                out.push(&decl.id);
                if let Some(init) = &decl.init {
                    collect_expression(init, out);
                }
            }
        }
        Statement::FunctionDeclaration(func) => collect_function(func, out),
        Statement::ClassDeclaration(class) => {
            if let Some(id) = &class.id {
                out.push(id);
            }
            if let Some(super_class) = &class.super_class {
                collect_expression(super_class, out);
            }
            for member in &class.body {
                match member {
                    ClassMember::Method { key, value } => {
                        out.push(key);
                        collect_function(value, out);
                    }
                    ClassMember::Property { key, value } => {
                        out.push(key);
                        if let Some(value) = value {
                            collect_expression(value, out);
                        }
                    }
                }
            }
        }
        Statement::ImportDeclaration { specifiers, .. } => out.extend(specifiers.iter()),
        Statement::Block(block) => {
            for stmt in &block.body {
                collect_statement(stmt, out);
            }
        }
        Statement::If {
            test,
            consequent,
            alternate,
            ..
        } => {
            collect_expression(test, out);
            collect_statement(consequent, out);
            if let Some(alternate) = alternate {
                collect_statement(alternate, out);
            }
        }
        Statement::For {
            init,
            test,
            update,
            body,
            ..
        } => {
            if let Some(init) = init {
                collect_statement(init, out);
            }
            if let Some(test) = test {
                collect_expression(test, out);
            }
            if let Some(update) = update {
                collect_expression(update, out);
            }
            collect_statement(body, out);
        }
        Statement::Return { argument, .. } => {
            if let Some(argument) = argument {
                collect_expression(argument, out);
            }
        }
        Statement::Expression { expression, .. } => collect_expression(expression, out),
    }
}

fn collect_expression<'a, A>(expr: &'a Expression<A>, out: &mut Vec<&'a Identifier<A>>) {
    match expr {
        Expression::Identifier(id) => out.push(id),
        Expression::Literal { .. } => {}
        Expression::Member {
            object, property, ..
        } => {
            collect_expression(object, out);
            out.push(property);
        }
        Expression::Call {
            callee, arguments, ..
        } => {
            collect_expression(callee, out);
            for arg in arguments {
                collect_expression(arg, out);
            }
        }
        Expression::Function { function, .. } => collect_function(function, out),
        Expression::Object { properties, .. } => {
            for prop in properties {
                out.push(&prop.key);
                collect_expression(&prop.value, out);
            }
        }
        Expression::Assignment { left, right, .. } => {
            collect_expression(left, out);
            collect_expression(right, out);
        }
        Expression::Jsx(element) => {
            out.push(&element.name);
            for attr in &element.attributes {
                out.push(&attr.name);
                if let Some(value) = &attr.value {
                    collect_expression(value, out);
                }
            }
            for child in &element.children {
                collect_expression(child, out);
            }
        }
    }
}

/// Types of identifiers in a typed tree, indexed by identifier location.
#[derive(Debug, Clone)]
pub struct TypeTable<T> {
    types: FxHashMap<Loc, T>,
}

impl<T: Clone> TypeTable<T> {
    /// Index the types of all identifiers whose location is in `targets`.
    ///
    /// When several identifiers share a location (which a well-formed tree
    /// never produces) the first one in source order wins.
    pub fn collect(program: &TypedProgram<T>, targets: &FxHashSet<Loc>) -> Self {
        let mut types = FxHashMap::default();
        for id in program.identifiers() {
            let (loc, ty) = &id.annot;
            if targets.contains(loc) && !types.contains_key(loc) {
                types.insert(loc.clone(), ty.clone());
            }
        }
        TypeTable { types }
    }
}

impl<T> TypeTable<T> {
    pub fn get(&self, loc: &Loc) -> Option<&T> {
        self.types.get(loc)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
