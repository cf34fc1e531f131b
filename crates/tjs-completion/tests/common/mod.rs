//! A small in-memory type engine and tree builders shared by the
//! integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use tjs_ast::*;
use tjs_common::Loc;
use tjs_types::*;

/// Raw types of the test universe.
#[derive(Debug, Clone)]
pub enum TestType {
    /// Normalizes to the given type; defined at the given location.
    Ty(Ty, Loc),
    Object {
        own: Vec<(String, TestType)>,
        proto: Vec<(String, TestType)>,
    },
    Module(Vec<(String, TestType)>),
    /// Fails normalization with the given message.
    Broken(String),
    Any,
    Nullish,
    Unhandled,
    UnhandledMembers,
    /// A component whose props type is the boxed type.
    Component(Box<TestType>),
}

impl TestType {
    pub fn object(own: Vec<(&str, TestType)>) -> Self {
        TestType::Object {
            own: named(own),
            proto: Vec::new(),
        }
    }

    pub fn with_proto(self, proto: Vec<(&str, TestType)>) -> Self {
        match self {
            TestType::Object { own, .. } => TestType::Object {
                own,
                proto: named(proto),
            },
            other => other,
        }
    }
}

fn named(members: Vec<(&str, TestType)>) -> Vec<(String, TestType)> {
    members
        .into_iter()
        .map(|(name, ty)| (name.to_string(), ty))
        .collect()
}

/// Shorthand for a type defined nowhere in particular.
pub fn ty(ty: Ty) -> TestType {
    TestType::Ty(ty, Loc::default())
}

#[derive(Default)]
pub struct TestEngine {
    pub program: Option<TypedProgram<TestType>>,
    /// Every text handed to `recheck`.
    pub rechecked: RefCell<Vec<String>>,
    pub batch_calls: Cell<usize>,
}

impl TestEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_program(program: TypedProgram<TestType>) -> Self {
        TestEngine {
            program: Some(program),
            ..Self::default()
        }
    }
}

impl TypeEngine for TestEngine {
    type Type = TestType;

    fn recheck(&self, text: &str) -> Option<TypedProgram<TestType>> {
        self.rechecked.borrow_mut().push(text.to_string());
        self.program.clone()
    }

    fn extract_members(&self, ty: &TestType, include_proto: bool) -> MemberExtraction<TestType> {
        match ty {
            TestType::Object { own, proto } => {
                let mut members = MemberMap::new();
                let inherited = if include_proto { proto.as_slice() } else { &[] };
                for (name, member) in own.iter().chain(inherited) {
                    members.entry(name.clone()).or_insert_with(|| member.clone());
                }
                MemberExtraction::Success(members)
            }
            TestType::Module(exports) => {
                MemberExtraction::SuccessModule(exports.iter().cloned().collect())
            }
            TestType::Nullish => MemberExtraction::FailureNullishType(ty.clone()),
            TestType::Any => MemberExtraction::FailureAnyType(ty.clone()),
            TestType::UnhandledMembers => MemberExtraction::FailureUnhandledMembers(ty.clone()),
            _ => MemberExtraction::FailureUnhandledType(ty.clone()),
        }
    }

    fn component_config(&self, component: &TestType) -> TestType {
        match component {
            TestType::Component(props) => (**props).clone(),
            other => other.clone(),
        }
    }

    fn type_loc(&self, ty: &TestType) -> Loc {
        match ty {
            TestType::Ty(_, loc) => loc.clone(),
            _ => Loc::default(),
        }
    }

    fn normalize(&self, _sig: &FileSig, ty: &TestType, _loc: &Loc) -> Result<Ty, NormalizationError> {
        match ty {
            TestType::Ty(ty, _) => Ok(ty.clone()),
            TestType::Broken(msg) => Err(NormalizationError::UnsupportedType(msg.clone())),
            other => Err(NormalizationError::UnsupportedType(self.describe(other))),
        }
    }

    fn normalize_batch(
        &self,
        sig: &FileSig,
        types: Vec<(Loc, TestType)>,
    ) -> Vec<(Loc, Result<Ty, NormalizationError>)> {
        self.batch_calls.set(self.batch_calls.get() + 1);
        types
            .into_iter()
            .map(|(loc, ty)| {
                let result = self.normalize(sig, &ty, &loc);
                (loc, result)
            })
            .collect()
    }

    fn describe(&self, ty: &TestType) -> String {
        match ty {
            TestType::Ty(ty, _) => self.stringify(ty),
            TestType::Any => "any".to_string(),
            TestType::Nullish => "?Object".to_string(),
            other => format!("{other:?}"),
        }
    }
}

pub type Annot = (Loc, TestType);

pub fn span(line: u32, col: u32, len: usize) -> Loc {
    Loc::span((line, col), (line, col + len as u32))
}

/// Identifier at `line:col` spanning its own name.
pub fn ident(name: &str, line: u32, col: u32, ty: TestType) -> Identifier<Annot> {
    Identifier::new(name, (span(line, col, name.len()), ty))
}

/// Binding whose type is defined at the binding itself.
pub fn decl(name: &str, line: u32, col: u32, normalized: Ty) -> Identifier<Annot> {
    let loc = span(line, col, name.len());
    Identifier::new(name, (loc.clone(), TestType::Ty(normalized, loc)))
}

pub fn var(kind: VarKind, id: Identifier<Annot>) -> Statement<Annot> {
    let loc = id.annot.0.clone();
    Statement::var(loc, kind, id, None)
}

pub fn expr_stmt(expression: Expression<Annot>) -> Statement<Annot> {
    let loc = expression.loc().clone();
    Statement::expression(loc, expression)
}

pub fn block(start: (u32, u32), end: (u32, u32), body: Vec<Statement<Annot>>) -> Block<Annot> {
    Block {
        loc: Loc::span(start, end),
        body,
    }
}

pub fn program(last_line: u32, body: Vec<Statement<Annot>>) -> TypedProgram<TestType> {
    Program::new(Loc::span((1, 0), (last_line, 80)), body)
}

/// `object.property` with both sides given.
pub fn member(object: Identifier<Annot>, property: Identifier<Annot>) -> Expression<Annot> {
    let loc = Loc::new(None, object.annot.0.start, property.annot.0.end);
    Expression::Member {
        annot: (loc, TestType::Any),
        object: Box::new(Expression::Identifier(object)),
        property,
    }
}
