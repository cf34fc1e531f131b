//! Node definitions.
//!
//! Every node that can carry a type stores an annotation `A`. Structural
//! nodes that never carry a type (statements, blocks, functions) store a
//! plain `Loc`.

use tjs_common::Loc;

/// Per-node payload that always exposes a source location.
pub trait Annotation {
    fn loc(&self) -> &Loc;
}

impl Annotation for Loc {
    fn loc(&self) -> &Loc {
        self
    }
}

impl<T> Annotation for (Loc, T) {
    fn loc(&self) -> &Loc {
        &self.0
    }
}

/// Tree produced by the type engine: every annotated node carries its type.
pub type TypedProgram<T> = Program<(Loc, T)>;

/// Location-only tree consumed by scope analysis.
pub type UntypedProgram = Program<Loc>;

#[derive(Debug, Clone, PartialEq)]
pub struct Program<A> {
    pub loc: Loc,
    pub body: Vec<Statement<A>>,
}

impl<A> Program<A> {
    pub fn new(loc: Loc, body: Vec<Statement<A>>) -> Self {
        Program { loc, body }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier<A> {
    pub annot: A,
    pub name: String,
}

impl<A> Identifier<A> {
    pub fn new(name: impl Into<String>, annot: A) -> Self {
        Identifier {
            annot,
            name: name.into(),
        }
    }
}

impl<A: Annotation> Identifier<A> {
    pub fn loc(&self) -> &Loc {
        self.annot.loc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    /// `let` and `const` bind in the enclosing block; `var` hoists.
    pub const fn is_block_scoped(self) -> bool {
        matches!(self, VarKind::Let | VarKind::Const)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator<A> {
    pub id: Identifier<A>,
    pub init: Option<Expression<A>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block<A> {
    pub loc: Loc,
    pub body: Vec<Statement<A>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param<A> {
    pub id: Identifier<A>,
    pub default: Option<Expression<A>>,
    pub rest: bool,
}

impl<A> Param<A> {
    pub fn simple(id: Identifier<A>) -> Self {
        Param {
            id,
            default: None,
            rest: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionBody<A> {
    Block(Block<A>),
    /// Concise arrow body: `x => x + 1`
    Expression(Box<Expression<A>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function<A> {
    pub loc: Loc,
    pub id: Option<Identifier<A>>,
    pub params: Vec<Param<A>>,
    pub body: FunctionBody<A>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember<A> {
    Method {
        key: Identifier<A>,
        value: Function<A>,
    },
    Property {
        key: Identifier<A>,
        value: Option<Expression<A>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class<A> {
    pub loc: Loc,
    pub id: Option<Identifier<A>>,
    pub super_class: Option<Expression<A>>,
    pub body: Vec<ClassMember<A>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement<A> {
    VariableDeclaration {
        loc: Loc,
        kind: VarKind,
        declarations: Vec<VariableDeclarator<A>>,
    },
    FunctionDeclaration(Function<A>),
    ClassDeclaration(Class<A>),
    /// `import a, {b, c} from "source"`; each specifier is the local binding.
    ImportDeclaration {
        loc: Loc,
        specifiers: Vec<Identifier<A>>,
        source: String,
    },
    Block(Block<A>),
    If {
        loc: Loc,
        test: Expression<A>,
        consequent: Box<Statement<A>>,
        alternate: Option<Box<Statement<A>>>,
    },
    For {
        loc: Loc,
        init: Option<Box<Statement<A>>>,
        test: Option<Expression<A>>,
        update: Option<Expression<A>>,
        body: Box<Statement<A>>,
    },
    Return {
        loc: Loc,
        argument: Option<Expression<A>>,
    },
    Expression {
        loc: Loc,
        expression: Expression<A>,
    },
}

impl<A> Statement<A> {
    /// Single-declarator variable declaration.
    pub fn var(loc: Loc, kind: VarKind, id: Identifier<A>, init: Option<Expression<A>>) -> Self {
        Statement::VariableDeclaration {
            loc,
            kind,
            declarations: vec![VariableDeclarator { id, init }],
        }
    }

    pub fn expression(loc: Loc, expression: Expression<A>) -> Self {
        Statement::Expression { loc, expression }
    }

    pub fn loc(&self) -> &Loc {
        match self {
            Statement::VariableDeclaration { loc, .. }
            | Statement::ImportDeclaration { loc, .. }
            | Statement::If { loc, .. }
            | Statement::For { loc, .. }
            | Statement::Return { loc, .. }
            | Statement::Expression { loc, .. } => loc,
            Statement::FunctionDeclaration(function) => &function.loc,
            Statement::ClassDeclaration(class) => &class.loc,
            Statement::Block(block) => &block.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty<A> {
    pub key: Identifier<A>,
    pub value: Expression<A>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute<A> {
    pub name: Identifier<A>,
    pub value: Option<Expression<A>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement<A> {
    pub annot: A,
    /// Element name; its annotation carries the component's type.
    pub name: Identifier<A>,
    pub attributes: Vec<JsxAttribute<A>>,
    pub children: Vec<Expression<A>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<A> {
    Identifier(Identifier<A>),
    Literal {
        annot: A,
        value: Literal,
    },
    Member {
        annot: A,
        object: Box<Expression<A>>,
        property: Identifier<A>,
    },
    Call {
        annot: A,
        callee: Box<Expression<A>>,
        arguments: Vec<Expression<A>>,
    },
    Function {
        annot: A,
        function: Box<Function<A>>,
        arrow: bool,
    },
    Object {
        annot: A,
        properties: Vec<ObjectProperty<A>>,
    },
    Assignment {
        annot: A,
        left: Box<Expression<A>>,
        right: Box<Expression<A>>,
    },
    Jsx(Box<JsxElement<A>>),
}

impl<A> Expression<A> {
    pub fn annot(&self) -> &A {
        match self {
            Expression::Identifier(id) => &id.annot,
            Expression::Literal { annot, .. }
            | Expression::Member { annot, .. }
            | Expression::Call { annot, .. }
            | Expression::Function { annot, .. }
            | Expression::Object { annot, .. }
            | Expression::Assignment { annot, .. } => annot,
            Expression::Jsx(element) => &element.annot,
        }
    }
}

impl<A: Annotation> Expression<A> {
    pub fn loc(&self) -> &Loc {
        self.annot().loc()
    }
}
