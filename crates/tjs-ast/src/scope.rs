//! Scope analysis.
//!
//! Builds the scope tree of a program and records, per scope, the names it
//! declares together with every location they are declared at. Analysis only
//! needs node locations, so it runs over any `Program<A: Annotation>`; the
//! completion engine feeds it the type-erased projection of the typed tree.
//!
//! Binding rules:
//! - program and function scopes are non-lexical (hoisting targets)
//! - blocks and `for` heads open lexical scopes
//! - `var` hoists to the nearest non-lexical scope
//! - `let`, `const`, classes and function declarations bind in the current scope
//! - parameters (and a named function expression's own name) bind in the
//!   function's scope; a function's body block shares that scope
//! - imports bind in the program scope
//!
//! Scopes live in an arena owned by [`ScopeInfo`]. A scope refers to its
//! parent by [`ScopeId`]; parents are always allocated before their children,
//! so following parent links strictly decreases the id and a chain walk
//! terminates without revisiting a scope.

use crate::ast::*;
use indexmap::IndexMap;
use smallvec::SmallVec;
use tjs_common::Loc;
use tracing::{debug, trace};

/// Index of a scope in [`ScopeInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const ROOT: ScopeId = ScopeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Program,
    Function,
    Block,
    For,
}

impl ScopeKind {
    pub const fn is_lexical(self) -> bool {
        matches!(self, ScopeKind::Block | ScopeKind::For)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Param,
    Import,
}

impl From<VarKind> for DefKind {
    fn from(kind: VarKind) -> Self {
        match kind {
            VarKind::Var => DefKind::Var,
            VarKind::Let => DefKind::Let,
            VarKind::Const => DefKind::Const,
        }
    }
}

impl DefKind {
    /// Bindings in the temporal dead zone until their declaration runs.
    pub const fn is_block_scoped(self) -> bool {
        matches!(self, DefKind::Let | DefKind::Const | DefKind::Class)
    }
}

/// A name declared in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Def {
    /// Declaration locations in source order; never empty.
    pub locs: SmallVec<[Loc; 1]>,
    /// Kind of the first declaration.
    pub kind: DefKind,
}

impl Def {
    pub fn first_loc(&self) -> &Loc {
        &self.locs[0]
    }
}

#[derive(Debug, Clone)]
pub struct Scope {
    pub kind: ScopeKind,
    pub loc: Loc,
    pub lexical: bool,
    pub parent: Option<ScopeId>,
    pub defs: IndexMap<String, Def>,
}

/// Result of scope analysis for one program.
#[derive(Debug, Clone)]
pub struct ScopeInfo {
    scopes: Vec<Scope>,
}

impl ScopeInfo {
    pub fn root(&self) -> ScopeId {
        ScopeId::ROOT
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn get(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(idx, scope)| (ScopeId(idx as u32), scope))
    }

    /// The innermost scope whose range contains `loc`.
    ///
    /// Containing scopes of a location are always nested, so the deepest one
    /// is the one every other candidate contains. Falls back to the root when
    /// nothing contains `loc`.
    pub fn closest_enclosing_scope(&self, loc: &Loc) -> ScopeId {
        let mut best: Option<(ScopeId, &Scope)> = None;
        for (id, scope) in self.iter() {
            if !scope.loc.contains(loc) {
                continue;
            }
            match best {
                Some((_, current)) if !current.loc.contains(&scope.loc) => {}
                _ => best = Some((id, scope)),
            }
        }
        best.map_or(ScopeId::ROOT, |(id, _)| id)
    }

    /// Walk from `id` outward to the root scope.
    pub fn scope_chain(&self, id: ScopeId) -> ScopeChain<'_> {
        ScopeChain {
            info: self,
            next: self.get(id).map(|_| id),
        }
    }
}

/// Iterator over a scope and its ancestors, innermost first.
pub struct ScopeChain<'a> {
    info: &'a ScopeInfo,
    next: Option<ScopeId>,
}

impl<'a> Iterator for ScopeChain<'a> {
    type Item = (ScopeId, &'a Scope);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let scope = self.info.get(id)?;
        debug_assert!(scope.parent.is_none_or(|parent| parent < id));
        self.next = scope.parent;
        Some((id, scope))
    }
}

/// Run scope analysis over `program`.
pub fn analyze<A: Annotation>(program: &Program<A>) -> ScopeInfo {
    let mut builder = ScopeBuilder::default();
    builder.enter_scope(ScopeKind::Program, program.loc.clone());
    for stmt in &program.body {
        builder.bind_statement(stmt);
    }
    builder.exit_scope();
    debug!(scopes = builder.scopes.len(), "scope analysis complete");
    ScopeInfo {
        scopes: builder.scopes,
    }
}

#[derive(Default)]
struct ScopeBuilder {
    scopes: Vec<Scope>,
    stack: Vec<ScopeId>,
}

impl ScopeBuilder {
    fn enter_scope(&mut self, kind: ScopeKind, loc: Loc) {
        let id = ScopeId(self.scopes.len() as u32);
        trace!(?kind, %loc, id = id.0, "enter scope");
        self.scopes.push(Scope {
            kind,
            loc,
            lexical: kind.is_lexical(),
            parent: self.stack.last().copied(),
            defs: IndexMap::new(),
        });
        self.stack.push(id);
    }

    fn exit_scope(&mut self) {
        self.stack.pop();
    }

    fn current(&self) -> ScopeId {
        self.stack.last().copied().unwrap_or(ScopeId::ROOT)
    }

    /// Nearest enclosing non-lexical scope (`var` hoisting target).
    fn hoist_target(&self) -> ScopeId {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|id| !self.scopes[id.index()].lexical)
            .unwrap_or(ScopeId::ROOT)
    }

    fn declare_in(&mut self, scope: ScopeId, name: &str, loc: &Loc, kind: DefKind) {
        let Some(scope) = self.scopes.get_mut(scope.index()) else {
            return;
        };
        match scope.defs.get_mut(name) {
            Some(def) => def.locs.push(loc.clone()),
            None => {
                let mut locs = SmallVec::new();
                locs.push(loc.clone());
                scope.defs.insert(name.to_string(), Def { locs, kind });
            }
        }
    }

    fn declare<A: Annotation>(&mut self, id: &Identifier<A>, kind: DefKind) {
        self.declare_in(self.current(), &id.name, id.loc(), kind);
    }

    fn bind_statement<A: Annotation>(&mut self, stmt: &Statement<A>) {
        match stmt {
            Statement::VariableDeclaration {
                kind, declarations, ..
            } => {
                let target = if kind.is_block_scoped() {
                    self.current()
                } else {
                    self.hoist_target()
                };
                for decl in declarations {
                    self.declare_in(target, &decl.id.name, decl.id.loc(), DefKind::from(*kind));
                    if let Some(init) = &decl.init {
                        self.bind_expression(init);
                    }
                }
            }
            Statement::FunctionDeclaration(func) => {
                if let Some(id) = &func.id {
                    self.declare(id, DefKind::Function);
                }
                self.bind_function(func, false);
            }
            Statement::ClassDeclaration(class) => {
                if let Some(id) = &class.id {
                    self.declare(id, DefKind::Class);
                }
                self.bind_class(class);
            }
            Statement::ImportDeclaration { specifiers, .. } => {
                for id in specifiers {
                    self.declare_in(ScopeId::ROOT, &id.name, id.loc(), DefKind::Import);
                }
            }
            Statement::Block(block) => {
                self.enter_scope(ScopeKind::Block, block.loc.clone());
                for stmt in &block.body {
                    self.bind_statement(stmt);
                }
                self.exit_scope();
            }
            Statement::If {
                test,
                consequent,
                alternate,
                ..
            } => {
                self.bind_expression(test);
                self.bind_statement(consequent);
                if let Some(alternate) = alternate {
                    self.bind_statement(alternate);
                }
            }
            Statement::For {
                loc,
                init,
                test,
                update,
                body,
            } => {
                self.enter_scope(ScopeKind::For, loc.clone());
                if let Some(init) = init {
                    self.bind_statement(init);
                }
                if let Some(test) = test {
                    self.bind_expression(test);
                }
                if let Some(update) = update {
                    self.bind_expression(update);
                }
                self.bind_statement(body);
                self.exit_scope();
            }
            Statement::Return { argument, .. } => {
                if let Some(argument) = argument {
                    self.bind_expression(argument);
                }
            }
            Statement::Expression { expression, .. } => self.bind_expression(expression),
        }
    }

    /// Enter a function scope, bind its parameters and body.
    ///
    /// `bind_own_name` is set for function expressions, whose name is only
    /// visible inside the function itself.
    fn bind_function<A: Annotation>(&mut self, func: &Function<A>, bind_own_name: bool) {
        self.enter_scope(ScopeKind::Function, func.loc.clone());
        if bind_own_name && let Some(id) = &func.id {
            self.declare(id, DefKind::Function);
        }
        for param in &func.params {
            self.declare(&param.id, DefKind::Param);
            if let Some(default) = &param.default {
                self.bind_expression(default);
            }
        }
        match &func.body {
            FunctionBody::Block(block) => {
                for stmt in &block.body {
                    self.bind_statement(stmt);
                }
            }
            FunctionBody::Expression(expr) => self.bind_expression(expr),
        }
        self.exit_scope();
    }

    fn bind_class<A: Annotation>(&mut self, class: &Class<A>) {
        if let Some(super_class) = &class.super_class {
            self.bind_expression(super_class);
        }
        for member in &class.body {
            match member {
                ClassMember::Method { value, .. } => self.bind_function(value, false),
                ClassMember::Property { value, .. } => {
                    if let Some(value) = value {
                        self.bind_expression(value);
                    }
                }
            }
        }
    }

    fn bind_expression<A: Annotation>(&mut self, expr: &Expression<A>) {
        match expr {
            Expression::Identifier(_) | Expression::Literal { .. } => {}
            Expression::Member { object, .. } => self.bind_expression(object),
            Expression::Call {
                callee, arguments, ..
            } => {
                self.bind_expression(callee);
                for arg in arguments {
                    self.bind_expression(arg);
                }
            }
            Expression::Function { function, .. } => self.bind_function(function, true),
            Expression::Object { properties, .. } => {
                for prop in properties {
                    self.bind_expression(&prop.value);
                }
            }
            Expression::Assignment { left, right, .. } => {
                self.bind_expression(left);
                self.bind_expression(right);
            }
            Expression::Jsx(element) => {
                for attr in &element.attributes {
                    if let Some(value) = &attr.value {
                        self.bind_expression(value);
                    }
                }
                for child in &element.children {
                    self.bind_expression(child);
                }
            }
        }
    }
}
