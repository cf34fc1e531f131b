//! Default printer for normalized types.
//!
//! Produces the annotation-style text editors show next to a completion
//! (`number`, `(x: number, y?: string) => void`, `{|a: number|}`, ...).
//! Type engines with their own pretty-printer override
//! [`TypeEngine::stringify`](crate::TypeEngine::stringify) instead.

use crate::ty::*;
use std::fmt::Write;

/// Print `ty` to a string.
pub fn print(ty: &Ty) -> String {
    let mut out = String::new();
    write_ty(&mut out, ty);
    out
}

fn write_ty(out: &mut String, ty: &Ty) {
    match ty {
        Ty::TVar(id) => {
            let _ = write!(out, "T_{id}");
        }
        Ty::Bound(name) => out.push_str(name),
        Ty::Generic(symbol, _, args) => {
            out.push_str(&symbol.name);
            if let Some(args) = args {
                write_type_args(out, args.iter());
            }
        }
        Ty::Any => out.push_str("any"),
        Ty::Top => out.push_str("mixed"),
        Ty::Bot => out.push_str("empty"),
        Ty::Void => out.push_str("void"),
        Ty::Null => out.push_str("null"),
        Ty::Num => out.push_str("number"),
        Ty::Str => out.push_str("string"),
        Ty::Bool => out.push_str("boolean"),
        Ty::NumLit(text) => out.push_str(text),
        Ty::StrLit(text) => {
            out.push('"');
            for ch in text.chars() {
                match ch {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    _ => out.push(ch),
                }
            }
            out.push('"');
        }
        Ty::BoolLit(value) => {
            let _ = write!(out, "{value}");
        }
        Ty::Fun(fun) => write_fun(out, fun, " => "),
        Ty::Obj(obj) => write_obj(out, obj),
        Ty::Arr(arr) => {
            out.push_str(if arr.readonly {
                "$ReadOnlyArray"
            } else {
                "Array"
            });
            write_type_args(out, std::iter::once(arr.elem.as_ref()));
        }
        Ty::Tup(elems) => {
            out.push('[');
            write_separated(out, elems.iter(), ", ", write_ty);
            out.push(']');
        }
        Ty::Union(members) => write_separated(out, members.iter(), " | ", write_union_member),
        Ty::Inter(members) => write_separated(out, members.iter(), " & ", write_inter_member),
        Ty::TypeAlias(alias) => {
            out.push_str("type ");
            out.push_str(&alias.name.name);
            if let Some(params) = &alias.type_params {
                write_type_params(out, params);
            }
            if let Some(body) = &alias.body {
                out.push_str(" = ");
                write_ty(out, body);
            }
        }
        Ty::InlineInterface(iface) => {
            out.push_str("interface ");
            if !iface.extends.is_empty() {
                out.push_str("extends ");
                write_separated(out, iface.extends.iter(), ", ", write_ty);
                out.push(' ');
            }
            write_obj(out, &iface.body);
        }
        Ty::TypeOf(name) => {
            out.push_str("typeof ");
            out.push_str(name);
        }
        Ty::ClassDecl(symbol, params) => {
            out.push_str("class ");
            out.push_str(&symbol.name);
            if let Some(params) = params {
                write_type_params(out, params);
            }
        }
        Ty::InterfaceDecl(symbol, params) => {
            out.push_str("interface ");
            out.push_str(&symbol.name);
            if let Some(params) = params {
                write_type_params(out, params);
            }
        }
        Ty::Utility(utility) => {
            out.push_str(utility.name());
            write_type_args(out, utility.args().into_iter());
        }
        Ty::Module(symbol) => {
            out.push_str("module ");
            out.push_str(&symbol.name);
        }
        Ty::Mu(_, body) => write_ty(out, body),
    }
}

fn write_separated<'a, I>(out: &mut String, items: I, sep: &str, write: fn(&mut String, &Ty))
where
    I: Iterator<Item = &'a Ty>,
{
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        write(out, item);
    }
}

fn write_type_args<'a, I>(out: &mut String, args: I)
where
    I: Iterator<Item = &'a Ty>,
{
    out.push('<');
    write_separated(out, args, ", ", write_ty);
    out.push('>');
}

fn write_type_params(out: &mut String, params: &[TypeParam]) {
    out.push('<');
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&param.name);
        if let Some(bound) = &param.bound {
            out.push_str(": ");
            write_ty(out, bound);
        }
        if let Some(default) = &param.default {
            out.push_str(" = ");
            write_ty(out, default);
        }
    }
    out.push('>');
}

fn write_union_member(out: &mut String, ty: &Ty) {
    if matches!(ty, Ty::Fun(_)) {
        out.push('(');
        write_ty(out, ty);
        out.push(')');
    } else {
        write_ty(out, ty);
    }
}

fn write_inter_member(out: &mut String, ty: &Ty) {
    if matches!(ty, Ty::Fun(_) | Ty::Union(_)) {
        out.push('(');
        write_ty(out, ty);
        out.push(')');
    } else {
        write_ty(out, ty);
    }
}

/// `(a: A, b?: B, ...rest: R)<arrow>Ret`; `arrow` is `" => "` for function
/// types and `": "` for call properties and methods.
fn write_fun(out: &mut String, fun: &FunT, arrow: &str) {
    if let Some(params) = &fun.type_params {
        write_type_params(out, params);
    }
    out.push('(');
    let mut first = true;
    for param in &fun.params {
        if !first {
            out.push_str(", ");
        }
        first = false;
        if let Some(name) = &param.name {
            out.push_str(name);
            if param.optional {
                out.push('?');
            }
            out.push_str(": ");
        }
        write_ty(out, &param.ty);
    }
    if let Some(rest) = &fun.rest {
        if !first {
            out.push_str(", ");
        }
        out.push_str("...");
        if let Some(name) = &rest.name {
            out.push_str(name);
            out.push_str(": ");
        }
        write_ty(out, &rest.ty);
    }
    out.push(')');
    out.push_str(arrow);
    write_ty(out, &fun.return_ty);
}

fn write_obj(out: &mut String, obj: &ObjT) {
    out.push_str(if obj.exact { "{|" } else { "{" });
    for (i, prop) in obj.props.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match prop {
            Prop::Named { name, ty, optional } => {
                out.push_str(name);
                if *optional {
                    out.push('?');
                }
                out.push_str(": ");
                write_ty(out, ty);
            }
            Prop::Indexer { key, value } => {
                out.push_str("[key: ");
                write_ty(out, key);
                out.push_str("]: ");
                write_ty(out, value);
            }
            Prop::Call(fun) => write_fun(out, fun, ": "),
            Prop::Spread(ty) => {
                out.push_str("...");
                write_ty(out, ty);
            }
        }
    }
    out.push_str(if obj.exact { "|}" } else { "}" });
}
