use crate::item::*;
use std::sync::Arc;
use tjs_ast::TypedProgram;
use tjs_common::Loc;
use tjs_types::*;

/// Engine that only stringifies; items never need the rest.
struct PrintOnly;

impl TypeEngine for PrintOnly {
    type Type = ();

    fn recheck(&self, _text: &str) -> Option<TypedProgram<()>> {
        None
    }

    fn extract_members(&self, _ty: &(), _include_proto: bool) -> MemberExtraction<()> {
        MemberExtraction::FailureUnhandledType(())
    }

    fn component_config(&self, _component: &()) {}

    fn type_loc(&self, _ty: &()) -> Loc {
        Loc::default()
    }

    fn normalize(&self, _sig: &FileSig, _ty: &(), _loc: &Loc) -> Result<Ty, NormalizationError> {
        Err(NormalizationError::RecursionLimit)
    }
}

fn sym(name: &str) -> Symbol {
    Symbol::new(name)
}

#[test]
fn test_kind_covers_every_variant() {
    let cases = vec![
        (Ty::InterfaceDecl(sym("I"), None), CompletionKind::Interface),
        (
            Ty::InlineInterface(InterfaceT {
                extends: vec![],
                body: ObjT {
                    exact: false,
                    props: vec![],
                },
            }),
            CompletionKind::Interface,
        ),
        (Ty::ClassDecl(sym("C"), None), CompletionKind::Class),
        (Ty::StrLit("a".into()), CompletionKind::Value),
        (Ty::NumLit("1".into()), CompletionKind::Value),
        (Ty::BoolLit(false), CompletionKind::Value),
        (Ty::fun(vec![], Ty::Void), CompletionKind::Function),
        (
            Ty::TypeAlias(AliasT {
                name: sym("A"),
                type_params: None,
                body: None,
            }),
            CompletionKind::Enum,
        ),
        (Ty::Union(vec![Ty::Num, Ty::Str]), CompletionKind::Enum),
        (Ty::Module(sym("m")), CompletionKind::Module),
        (Ty::Tup(vec![]), CompletionKind::Variable),
        (Ty::Bot, CompletionKind::Variable),
        (Ty::Null, CompletionKind::Variable),
        (Ty::object(vec![]), CompletionKind::Variable),
        (Ty::Inter(vec![]), CompletionKind::Variable),
        (Ty::TVar(0), CompletionKind::Variable),
        (Ty::Bound("T".into()), CompletionKind::Variable),
        (
            Ty::generic("G", GenericKind::Class, vec![]),
            CompletionKind::Variable,
        ),
        (Ty::Any, CompletionKind::Variable),
        (Ty::Top, CompletionKind::Variable),
        (Ty::Void, CompletionKind::Variable),
        (Ty::Num, CompletionKind::Variable),
        (Ty::Str, CompletionKind::Variable),
        (Ty::Bool, CompletionKind::Variable),
        (Ty::array(Ty::Num), CompletionKind::Variable),
        (Ty::TypeOf("x".into()), CompletionKind::Variable),
        (
            Ty::Utility(Utility::Keys(Box::new(Ty::Num))),
            CompletionKind::Variable,
        ),
        (Ty::Mu(0, Box::new(Ty::Null)), CompletionKind::Variable),
    ];
    for (ty, expected) in cases {
        assert_eq!(completion_kind(&ty), expected, "kind of {ty:?}");
    }
}

#[test]
fn test_function_details() {
    let fun = FunT::new(
        vec![
            FunParam::new("x", Ty::Num),
            FunParam {
                name: None,
                ty: Ty::Str,
                optional: true,
            },
        ],
        Ty::Bool,
    )
    .with_rest("rest", Ty::array(Ty::Num));
    let item = CompletionItem::from_ty(&PrintOnly, "f", Loc::default(), &Ty::Fun(fun), true);

    assert_eq!(item.kind, CompletionKind::Function);
    let details = item.func_details.expect("function details");
    assert_eq!(details.return_type, "boolean");
    let params: Vec<(&str, &str)> = details
        .params
        .iter()
        .map(|p| (p.name.as_str(), p.ty.as_str()))
        .collect();
    assert_eq!(
        params,
        vec![("x", "number"), ("_?", "string"), ("...rest", "Array<number>")]
    );
}

#[test]
fn test_function_details_suppressed() {
    let item = CompletionItem::from_ty(
        &PrintOnly,
        "f",
        Loc::default(),
        &Ty::fun(vec![], Ty::Void),
        false,
    );
    assert!(item.func_details.is_none());
    assert_eq!(item.type_text, "() => void");
}

#[test]
fn test_non_function_has_no_details() {
    let item = CompletionItem::from_ty(&PrintOnly, "n", Loc::default(), &Ty::Num, true);
    assert!(item.func_details.is_none());
    assert_eq!(item.kind, CompletionKind::Variable);
}

#[test]
fn test_legacy_json_shape() {
    let loc = Loc::span((3, 4), (3, 7)).with_source(Arc::from("a.js"));
    let items = vec![
        CompletionItem::from_ty(&PrintOnly, "foo", loc, &Ty::Num, true),
        CompletionItem::from_ty(
            &PrintOnly,
            "bar",
            Loc::span((1, 0), (1, 3)),
            &Ty::fun(vec![FunParam::new("x", Ty::Str)], Ty::Void),
            true,
        ),
    ];

    let json = results_to_legacy_json(&items);
    assert_eq!(
        json["result"][0],
        serde_json::json!({
            "name": "foo",
            "type": "number",
            "func_details": null,
            "path": "a.js",
            "line": 3,
            "endline": 3,
            "start": 5,
            "end": 7,
        })
    );
    assert_eq!(json["result"][1]["name"], "bar", "order is preserved");
    assert_eq!(
        json["result"][1]["func_details"],
        serde_json::json!({
            "return_type": "void",
            "params": [{"name": "x", "type": "string"}],
        })
    );
}

#[test]
fn test_legacy_error_shape() {
    let json = error_to_legacy_json("boom");
    assert_eq!(json, serde_json::json!({"error": "boom", "result": []}));
}
