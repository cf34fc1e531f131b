//! Identifier completion.
//!
//! Scope analysis runs on the type-erased tree; the types of the surviving
//! bindings are then looked up in the typed tree by declaration location.

use crate::item::CompletionItem;
use crate::options::CompletionOptions;
use crate::request::IdKind;
use crate::telemetry::{Telemetry, tags};
use crate::token::remove_sentinel_before_loc;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde_json::Value;
use tjs_ast::{TypeTable, TypedProgram, scope};
use tjs_common::{Loc, is_sentinel_name};
use tjs_types::{FileSig, TypeEngine};

/// Names visible at `ac_loc`, each with its innermost first declaration.
///
/// In the starting scope, bindings not declared before the cursor are
/// dropped when the scope is lexical or the binding itself is block-scoped
/// (`let`, `const`, `class`); a later `var` or function stays visible.
/// Only the binding's identifier location is compared, so `let x = |`
/// still offers `x`.
pub fn visible_bindings<T>(program: &TypedProgram<T>, ac_loc: &Loc) -> IndexMap<String, Loc> {
    let untyped = program.erase_types();
    let info = scope::analyze(&untyped);
    let start = info.closest_enclosing_scope(ac_loc);

    let mut bindings: IndexMap<String, Loc> = IndexMap::new();
    for (depth, (_, scope)) in info.scope_chain(start).enumerate() {
        for (name, def) in &scope.defs {
            if bindings.contains_key(name) || is_sentinel_name(name) {
                continue;
            }
            let loc = def.first_loc();
            let ordered = scope.lexical || def.kind.is_block_scoped();
            if depth == 0 && ordered && loc >= ac_loc {
                continue;
            }
            bindings.insert(name.clone(), loc.clone());
        }
    }
    bindings
}

/// Complete an identifier at `ac_loc` (already corrected).
///
/// Never fails: candidates whose type cannot be normalized are dropped and
/// their errors listed under `errors`.
pub fn autocomplete_id<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    program: &TypedProgram<E::Type>,
    sig: &FileSig,
    ac_loc: &Loc,
    id_kind: IdKind,
) -> (Vec<CompletionItem>, Telemetry) {
    let bindings = visible_bindings(program, ac_loc);
    let targets: FxHashSet<Loc> = bindings.values().cloned().collect();
    let types = TypeTable::collect(program, &targets);

    let show_func_details = options.signature_details && id_kind != IdKind::JsxName;
    let mut items = Vec::with_capacity(bindings.len());
    let mut errors: Vec<Value> = Vec::new();
    for (name, loc) in bindings {
        let Some(ty) = types.get(&loc) else {
            continue;
        };
        match engine.normalize(sig, ty, &loc) {
            Ok(normalized) => items.push(CompletionItem::from_ty(
                engine,
                name,
                remove_sentinel_before_loc(&loc, ac_loc.end),
                &normalized,
                show_func_details,
            )),
            Err(err) => errors.push(Value::String(err.to_string())),
        }
    }

    let result = match (errors.is_empty(), items.is_empty()) {
        (true, _) => tags::SUCCESS,
        (false, true) => tags::FAILURE_NORMALIZER,
        (false, false) => tags::PARTIAL,
    };
    let telemetry = Telemetry::new()
        .with("result", result)
        .with("count", items.len())
        .with("errors", errors);
    (items, telemetry)
}
