//! The normalized type tree.
//!
//! `Ty` is what the type engine hands back after normalizing one of its
//! internal types: a self-contained, printable description of a type with
//! no references into checker state.

use tjs_common::Loc;

/// A named entity (class, interface, alias, module) referenced by a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            loc: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GenericKind {
    Class,
    Interface,
    TypeAlias,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub bound: Option<Box<Ty>>,
    pub default: Option<Box<Ty>>,
}

impl TypeParam {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParam {
            name: name.into(),
            bound: None,
            default: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunParam {
    pub name: Option<String>,
    pub ty: Ty,
    pub optional: bool,
}

impl FunParam {
    pub fn new(name: impl Into<String>, ty: Ty) -> Self {
        FunParam {
            name: Some(name.into()),
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RestParam {
    pub name: Option<String>,
    pub ty: Ty,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunT {
    pub type_params: Option<Vec<TypeParam>>,
    pub params: Vec<FunParam>,
    pub rest: Option<Box<RestParam>>,
    pub return_ty: Box<Ty>,
}

impl FunT {
    pub fn new(params: Vec<FunParam>, return_ty: Ty) -> Self {
        FunT {
            type_params: None,
            params,
            rest: None,
            return_ty: Box::new(return_ty),
        }
    }

    pub fn with_rest(mut self, name: impl Into<String>, ty: Ty) -> Self {
        self.rest = Some(Box::new(RestParam {
            name: Some(name.into()),
            ty,
        }));
        self
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Prop {
    Named {
        name: String,
        ty: Ty,
        optional: bool,
    },
    Indexer {
        key: Ty,
        value: Ty,
    },
    Call(FunT),
    Spread(Ty),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjT {
    pub exact: bool,
    pub props: Vec<Prop>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArrT {
    pub readonly: bool,
    pub elem: Box<Ty>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AliasT {
    pub name: Symbol,
    pub type_params: Option<Vec<TypeParam>>,
    /// Right-hand side, when the normalizer chose to expand it.
    pub body: Option<Box<Ty>>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterfaceT {
    pub extends: Vec<Ty>,
    pub body: ObjT,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Utility {
    Keys(Box<Ty>),
    Values(Box<Ty>),
    ReadOnly(Box<Ty>),
    Exact(Box<Ty>),
    Shape(Box<Ty>),
    Diff(Box<Ty>, Box<Ty>),
    Class(Box<Ty>),
    ElementType(Box<Ty>, Box<Ty>),
}

impl Utility {
    pub fn name(&self) -> &'static str {
        match self {
            Utility::Keys(_) => "$Keys",
            Utility::Values(_) => "$Values",
            Utility::ReadOnly(_) => "$ReadOnly",
            Utility::Exact(_) => "$Exact",
            Utility::Shape(_) => "$Shape",
            Utility::Diff(..) => "$Diff",
            Utility::Class(_) => "Class",
            Utility::ElementType(..) => "$ElementType",
        }
    }

    pub fn args(&self) -> Vec<&Ty> {
        match self {
            Utility::Keys(t)
            | Utility::Values(t)
            | Utility::ReadOnly(t)
            | Utility::Exact(t)
            | Utility::Shape(t)
            | Utility::Class(t) => vec![&**t],
            Utility::Diff(a, b) | Utility::ElementType(a, b) => vec![&**a, &**b],
        }
    }
}

/// A normalized type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ty {
    /// Reference to an enclosing recursive type (see [`Ty::Mu`]).
    TVar(u32),
    /// A type parameter in scope.
    Bound(String),
    Generic(Symbol, GenericKind, Option<Vec<Ty>>),
    Any,
    /// `mixed`
    Top,
    /// `empty`
    Bot,
    Void,
    Null,
    Num,
    Str,
    Bool,
    NumLit(String),
    StrLit(String),
    BoolLit(bool),
    Fun(FunT),
    Obj(ObjT),
    Arr(ArrT),
    Tup(Vec<Ty>),
    Union(Vec<Ty>),
    Inter(Vec<Ty>),
    TypeAlias(AliasT),
    InlineInterface(InterfaceT),
    TypeOf(String),
    ClassDecl(Symbol, Option<Vec<TypeParam>>),
    InterfaceDecl(Symbol, Option<Vec<TypeParam>>),
    Utility(Utility),
    Module(Symbol),
    /// Recursive type binder; `TVar(id)` inside the body refers back to it.
    Mu(u32, Box<Ty>),
}

impl Ty {
    pub fn fun(params: Vec<FunParam>, return_ty: Ty) -> Ty {
        Ty::Fun(FunT::new(params, return_ty))
    }

    pub fn generic(name: impl Into<String>, kind: GenericKind, args: Vec<Ty>) -> Ty {
        let args = if args.is_empty() { None } else { Some(args) };
        Ty::Generic(Symbol::new(name), kind, args)
    }

    pub fn object(props: Vec<(&str, Ty)>) -> Ty {
        Ty::Obj(ObjT {
            exact: false,
            props: props
                .into_iter()
                .map(|(name, ty)| Prop::Named {
                    name: name.to_string(),
                    ty,
                    optional: false,
                })
                .collect(),
        })
    }

    pub fn array(elem: Ty) -> Ty {
        Ty::Arr(ArrT {
            readonly: false,
            elem: Box::new(elem),
        })
    }
}
