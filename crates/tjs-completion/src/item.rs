//! Completion items and the legacy JSON shape.

use serde::Serialize;
use serde_json::{Value, json};
use tjs_common::Loc;
use tjs_types::{FunT, Ty, TypeEngine};

/// Editor icon category for a completion item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKind {
    Interface,
    Class,
    Value,
    Function,
    Enum,
    Module,
    Variable,
}

/// Editor kind of a normalized type.
pub fn completion_kind(ty: &Ty) -> CompletionKind {
    match ty {
        Ty::InterfaceDecl(..) | Ty::InlineInterface(_) => CompletionKind::Interface,
        Ty::ClassDecl(..) => CompletionKind::Class,
        Ty::StrLit(_) | Ty::NumLit(_) | Ty::BoolLit(_) => CompletionKind::Value,
        Ty::Fun(_) => CompletionKind::Function,
        Ty::TypeAlias(_) | Ty::Union(_) => CompletionKind::Enum,
        Ty::Module(_) => CompletionKind::Module,
        Ty::Tup(_)
        | Ty::Bot
        | Ty::Null
        | Ty::Obj(_)
        | Ty::Inter(_)
        | Ty::TVar(_)
        | Ty::Bound(_)
        | Ty::Generic(..)
        | Ty::Any
        | Ty::Top
        | Ty::Void
        | Ty::Num
        | Ty::Str
        | Ty::Bool
        | Ty::Arr(_)
        | Ty::TypeOf(_)
        | Ty::Utility(_)
        | Ty::Mu(..) => CompletionKind::Variable,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A function signature split into printable parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncDetails {
    pub return_type: String,
    pub params: Vec<FuncParam>,
}

impl FuncDetails {
    pub fn from_fun<E: TypeEngine + ?Sized>(engine: &E, fun: &FunT) -> Self {
        let mut params: Vec<FuncParam> = fun
            .params
            .iter()
            .map(|param| {
                let mut name = param.name.clone().unwrap_or_else(|| "_".to_string());
                if param.optional {
                    name.push('?');
                }
                FuncParam {
                    name,
                    ty: engine.stringify(&param.ty),
                }
            })
            .collect();
        if let Some(rest) = &fun.rest {
            params.push(FuncParam {
                name: format!("...{}", rest.name.as_deref().unwrap_or("_")),
                ty: engine.stringify(&rest.ty),
            });
        }
        FuncDetails {
            return_type: engine.stringify(&fun.return_ty),
            params,
        }
    }
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub name: String,
    /// Declaration (identifiers) or definition (members) range.
    pub location: Loc,
    pub kind: CompletionKind,
    /// Text to insert when it differs from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    pub type_text: String,
    pub type_location: Loc,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub func_details: Option<FuncDetails>,
}

impl CompletionItem {
    /// Build an item from a normalized type. Function details are only
    /// computed for function types and when `show_func_details` is set.
    pub fn from_ty<E: TypeEngine + ?Sized>(
        engine: &E,
        name: impl Into<String>,
        loc: Loc,
        ty: &Ty,
        show_func_details: bool,
    ) -> Self {
        let func_details = match ty {
            Ty::Fun(fun) if show_func_details => Some(FuncDetails::from_fun(engine, fun)),
            _ => None,
        };
        CompletionItem {
            name: name.into(),
            location: loc.clone(),
            kind: completion_kind(ty),
            insert_text: None,
            type_text: engine.stringify(ty),
            type_location: loc,
            func_details,
        }
    }

    #[must_use]
    pub fn with_insert_text(mut self, insert_text: String) -> Self {
        self.insert_text = Some(insert_text);
        self
    }

    /// Flat object for older clients: location fields are `path`, `line`,
    /// `endline`, `start` (1-based column) and `end`.
    pub fn to_legacy_json(&self) -> Value {
        let loc = &self.location;
        json!({
            "name": self.name,
            "type": self.type_text,
            "func_details": self.func_details,
            "path": loc.source.as_deref().unwrap_or(""),
            "line": loc.start.line,
            "endline": loc.end.line,
            "start": loc.start.column + 1,
            "end": loc.end.column,
        })
    }
}

/// Legacy shape of a whole result list.
pub fn results_to_legacy_json(items: &[CompletionItem]) -> Value {
    json!({
        "result": items.iter().map(CompletionItem::to_legacy_json).collect::<Vec<_>>(),
    })
}

/// Legacy shape of an error response.
pub fn error_to_legacy_json(message: &str) -> Value {
    json!({
        "error": message,
        "result": [],
    })
}
