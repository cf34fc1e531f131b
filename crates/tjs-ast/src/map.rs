//! Annotation mapping.
//!
//! `map_annot` rebuilds a tree with every annotation replaced by `f(annot)`,
//! keeping structure and structural locations untouched. `erase_types` is the
//! one case the completion engine needs: scope analysis only understands
//! locations, so the typed tree is projected down to `Program<Loc>` before
//! analysis and the original typed tree is kept for the recovery pass.

use crate::ast::*;
use tjs_common::Loc;

impl<A> Program<A> {
    pub fn map_annot<B, F>(&self, f: &mut F) -> Program<B>
    where
        F: FnMut(&A) -> B,
    {
        Program {
            loc: self.loc.clone(),
            body: map_statements(&self.body, f),
        }
    }
}

impl<T> Program<(Loc, T)> {
    /// Drop the type component of every annotation, keeping its location.
    pub fn erase_types(&self) -> UntypedProgram {
        self.map_annot(&mut |annot: &(Loc, T)| annot.0.clone())
    }
}

fn map_identifier<A, B, F: FnMut(&A) -> B>(id: &Identifier<A>, f: &mut F) -> Identifier<B> {
    Identifier {
        annot: f(&id.annot),
        name: id.name.clone(),
    }
}

fn map_statements<A, B, F: FnMut(&A) -> B>(stmts: &[Statement<A>], f: &mut F) -> Vec<Statement<B>> {
    stmts.iter().map(|stmt| map_statement(stmt, f)).collect()
}

fn map_block<A, B, F: FnMut(&A) -> B>(block: &Block<A>, f: &mut F) -> Block<B> {
    Block {
        loc: block.loc.clone(),
        body: map_statements(&block.body, f),
    }
}

fn map_function<A, B, F: FnMut(&A) -> B>(func: &Function<A>, f: &mut F) -> Function<B> {
    Function {
        loc: func.loc.clone(),
        id: func.id.as_ref().map(|id| map_identifier(id, f)),
        params: func
            .params
            .iter()
            .map(|param| Param {
                id: map_identifier(&param.id, f),
                default: param.default.as_ref().map(|expr| map_expression(expr, f)),
                rest: param.rest,
            })
            .collect(),
        body: match &func.body {
            FunctionBody::Block(block) => FunctionBody::Block(map_block(block, f)),
            FunctionBody::Expression(expr) => {
                FunctionBody::Expression(Box::new(map_expression(expr, f)))
            }
        },
    }
}

fn map_class<A, B, F: FnMut(&A) -> B>(class: &Class<A>, f: &mut F) -> Class<B> {
    Class {
        loc: class.loc.clone(),
        id: class.id.as_ref().map(|id| map_identifier(id, f)),
        super_class: class.super_class.as_ref().map(|expr| map_expression(expr, f)),
        body: class
            .body
            .iter()
            .map(|member| match member {
                ClassMember::Method { key, value } => ClassMember::Method {
                    key: map_identifier(key, f),
                    value: map_function(value, f),
                },
                ClassMember::Property { key, value } => ClassMember::Property {
                    key: map_identifier(key, f),
                    value: value.as_ref().map(|expr| map_expression(expr, f)),
                },
            })
            .collect(),
    }
}

fn map_statement<A, B, F: FnMut(&A) -> B>(stmt: &Statement<A>, f: &mut F) -> Statement<B> {
    match stmt {
        Statement::VariableDeclaration {
            loc,
            kind,
            declarations,
        } => Statement::VariableDeclaration {
            loc: loc.clone(),
            kind: *kind,
            declarations: declarations
                .iter()
                .map(|decl| VariableDeclarator {
                    id: map_identifier(&decl.id, f),
                    init: decl.init.as_ref().map(|expr| map_expression(expr, f)),
                })
                .collect(),
        },
        Statement::FunctionDeclaration(func) => Statement::FunctionDeclaration(map_function(func, f)),
        Statement::ClassDeclaration(class) => Statement::ClassDeclaration(map_class(class, f)),
        Statement::ImportDeclaration {
            loc,
            specifiers,
            source,
        } => Statement::ImportDeclaration {
            loc: loc.clone(),
            specifiers: specifiers.iter().map(|id| map_identifier(id, f)).collect(),
            source: source.clone(),
        },
        Statement::Block(block) => Statement::Block(map_block(block, f)),
        Statement::If {
            loc,
            test,
            consequent,
            alternate,
        } => Statement::If {
            loc: loc.clone(),
            test: map_expression(test, f),
            consequent: Box::new(map_statement(consequent, f)),
            alternate: alternate
                .as_ref()
                .map(|stmt| Box::new(map_statement(stmt, f))),
        },
        Statement::For {
            loc,
            init,
            test,
            update,
            body,
        } => Statement::For {
            loc: loc.clone(),
            init: init.as_ref().map(|stmt| Box::new(map_statement(stmt, f))),
            test: test.as_ref().map(|expr| map_expression(expr, f)),
            update: update.as_ref().map(|expr| map_expression(expr, f)),
            body: Box::new(map_statement(body, f)),
        },
        Statement::Return { loc, argument } => Statement::Return {
            loc: loc.clone(),
            argument: argument.as_ref().map(|expr| map_expression(expr, f)),
        },
        Statement::Expression { loc, expression } => Statement::Expression {
            loc: loc.clone(),
            expression: map_expression(expression, f),
        },
    }
}

fn map_expression<A, B, F: FnMut(&A) -> B>(expr: &Expression<A>, f: &mut F) -> Expression<B> {
    match expr {
        Expression::Identifier(id) => Expression::Identifier(map_identifier(id, f)),
        Expression::Literal { annot, value } => Expression::Literal {
            annot: f(annot),
            value: value.clone(),
        },
        Expression::Member {
            annot,
            object,
            property,
        } => Expression::Member {
            annot: f(annot),
            object: Box::new(map_expression(object, f)),
            property: map_identifier(property, f),
        },
        Expression::Call {
            annot,
            callee,
            arguments,
        } => Expression::Call {
            annot: f(annot),
            callee: Box::new(map_expression(callee, f)),
            arguments: arguments.iter().map(|arg| map_expression(arg, f)).collect(),
        },
        Expression::Function {
            annot,
            function,
            arrow,
        } => Expression::Function {
            annot: f(annot),
            function: Box::new(map_function(function, f)),
            arrow: *arrow,
        },
        Expression::Object { annot, properties } => Expression::Object {
            annot: f(annot),
            properties: properties
                .iter()
                .map(|prop| ObjectProperty {
                    key: map_identifier(&prop.key, f),
                    value: map_expression(&prop.value, f),
                })
                .collect(),
        },
        Expression::Assignment { annot, left, right } => Expression::Assignment {
            annot: f(annot),
            left: Box::new(map_expression(left, f)),
            right: Box::new(map_expression(right, f)),
        },
        Expression::Jsx(element) => Expression::Jsx(Box::new(JsxElement {
            annot: f(&element.annot),
            name: map_identifier(&element.name, f),
            attributes: element
                .attributes
                .iter()
                .map(|attr| JsxAttribute {
                    name: map_identifier(&attr.name, f),
                    value: attr.value.as_ref().map(|expr| map_expression(expr, f)),
                })
                .collect(),
            children: element
                .children
                .iter()
                .map(|child| map_expression(child, f))
                .collect(),
        })),
    }
}
