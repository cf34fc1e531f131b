//! Completion context classification.
//!
//! Finds the identifier carrying the sentinel in the re-checked tree and
//! decides what is being completed from where that identifier sits:
//! - the property of a member expression: members of the object's type
//! - an attribute name of a JSX element: props of the element's component
//! - the tag name of a JSX element: identifiers, without call signatures
//! - anywhere else: identifiers in scope

use crate::request::{CompletionRequest, IdKind};
use tjs_ast::*;
use tjs_common::{Loc, is_sentinel_name};

/// Classify the completion context in `program`, or `None` when the sentinel
/// is not in a recognised position.
pub fn classify<T: Clone>(
    program: &TypedProgram<T>,
    trigger_char: Option<&str>,
) -> Option<CompletionRequest<T>> {
    let finder = Finder { trigger_char };
    program
        .body
        .iter()
        .find_map(|stmt| finder.statement(stmt))
}

struct Finder<'a> {
    trigger_char: Option<&'a str>,
}

type Typed<T> = (Loc, T);

impl Finder<'_> {
    fn identifier_request<T>(
        &self,
        id: &Identifier<Typed<T>>,
        id_kind: IdKind,
    ) -> Option<CompletionRequest<T>> {
        is_sentinel_name(&id.name).then(|| CompletionRequest::Identifier {
            loc: id.annot.0.clone(),
            trigger_char: self.trigger_char.map(str::to_string),
            id_kind,
        })
    }

    fn statement<T: Clone>(&self, stmt: &Statement<Typed<T>>) -> Option<CompletionRequest<T>> {
        match stmt {
            Statement::VariableDeclaration { declarations, .. } => {
                declarations.iter().find_map(|decl| {
                    self.identifier_request(&decl.id, IdKind::Ordinary)
                        .or_else(|| decl.init.as_ref().and_then(|init| self.expression(init)))
                })
            }
            Statement::FunctionDeclaration(func) => self.function(func),
            Statement::ClassDeclaration(class) => self.class(class),
            Statement::ImportDeclaration { specifiers, .. } => specifiers
                .iter()
                .find_map(|id| self.identifier_request(id, IdKind::Ordinary)),
            Statement::Block(block) => self.statements(&block.body),
            Statement::If {
                test,
                consequent,
                alternate,
                ..
            } => self
                .expression(test)
                .or_else(|| self.statement(consequent))
                .or_else(|| alternate.as_ref().and_then(|alt| self.statement(alt))),
            Statement::For {
                init,
                test,
                update,
                body,
                ..
            } => init
                .as_ref()
                .and_then(|init| self.statement(init))
                .or_else(|| test.as_ref().and_then(|test| self.expression(test)))
                .or_else(|| update.as_ref().and_then(|update| self.expression(update)))
                .or_else(|| self.statement(body)),
            Statement::Return { argument, .. } => {
                argument.as_ref().and_then(|arg| self.expression(arg))
            }
            Statement::Expression { expression, .. } => self.expression(expression),
        }
    }

    fn statements<T: Clone>(
        &self,
        stmts: &[Statement<Typed<T>>],
    ) -> Option<CompletionRequest<T>> {
        stmts.iter().find_map(|stmt| self.statement(stmt))
    }

    fn function<T: Clone>(&self, func: &Function<Typed<T>>) -> Option<CompletionRequest<T>> {
        if let Some(request) = func
            .id
            .as_ref()
            .and_then(|id| self.identifier_request(id, IdKind::Ordinary))
        {
            return Some(request);
        }
        for param in &func.params {
            if let Some(request) = self
                .identifier_request(&param.id, IdKind::Ordinary)
                .or_else(|| param.default.as_ref().and_then(|d| self.expression(d)))
            {
                return Some(request);
            }
        }
        match &func.body {
            FunctionBody::Block(block) => self.statements(&block.body),
            FunctionBody::Expression(expr) => self.expression(expr),
        }
    }

    fn class<T: Clone>(&self, class: &Class<Typed<T>>) -> Option<CompletionRequest<T>> {
        if let Some(request) = class
            .id
            .as_ref()
            .and_then(|id| self.identifier_request(id, IdKind::Ordinary))
            .or_else(|| class.super_class.as_ref().and_then(|s| self.expression(s)))
        {
            return Some(request);
        }
        class.body.iter().find_map(|member| match member {
            ClassMember::Method { value, .. } => self.function(value),
            ClassMember::Property { value, .. } => {
                value.as_ref().and_then(|value| self.expression(value))
            }
        })
    }

    fn expression<T: Clone>(
        &self,
        expr: &Expression<Typed<T>>,
    ) -> Option<CompletionRequest<T>> {
        match expr {
            Expression::Identifier(id) => self.identifier_request(id, IdKind::Ordinary),
            Expression::Literal { .. } => None,
            Expression::Member {
                object, property, ..
            } => {
                if is_sentinel_name(&property.name) {
                    let (_, receiver_type) = object.annot();
                    return Some(CompletionRequest::Member {
                        name: property.name.clone(),
                        loc: property.annot.0.clone(),
                        receiver_type: receiver_type.clone(),
                    });
                }
                self.expression(object)
            }
            Expression::Call {
                callee, arguments, ..
            } => self
                .expression(callee)
                .or_else(|| arguments.iter().find_map(|arg| self.expression(arg))),
            Expression::Function { function, .. } => self.function(function),
            Expression::Object { properties, .. } => properties
                .iter()
                .find_map(|prop| self.expression(&prop.value)),
            Expression::Assignment { left, right, .. } => {
                self.expression(left).or_else(|| self.expression(right))
            }
            Expression::Jsx(element) => self.jsx(element),
        }
    }

    fn jsx<T: Clone>(&self, element: &JsxElement<Typed<T>>) -> Option<CompletionRequest<T>> {
        if let Some(request) = self.identifier_request(&element.name, IdKind::JsxName) {
            return Some(request);
        }
        if let Some(attr) = element
            .attributes
            .iter()
            .find(|attr| is_sentinel_name(&attr.name.name))
        {
            let used_attrs = element
                .attributes
                .iter()
                .filter(|other| !is_sentinel_name(&other.name.name))
                .map(|other| other.name.name.clone())
                .collect();
            return Some(CompletionRequest::Jsx {
                name: attr.name.name.clone(),
                used_attrs,
                loc: attr.name.annot.0.clone(),
                component_type: element.name.annot.1.clone(),
            });
        }
        element
            .attributes
            .iter()
            .find_map(|attr| attr.value.as_ref().and_then(|value| self.expression(value)))
            .or_else(|| element.children.iter().find_map(|child| self.expression(child)))
    }
}
