//! JSX attribute completion: member completion over a component's props.

use crate::member::{MemberQuery, MemberResult, autocomplete_member};
use crate::options::CompletionOptions;
use rustc_hash::FxHashSet;
use tjs_types::{FileSig, TypeEngine};

/// Passed implicitly through the element body, never written as an attribute.
pub const CHILDREN_PROP: &str = "children";

pub fn autocomplete_jsx<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    sig: &FileSig,
    component: &E::Type,
    used_attrs: &FxHashSet<String>,
) -> MemberResult {
    let config = engine.component_config(component);

    let mut exclude = used_attrs.clone();
    exclude.insert(CHILDREN_PROP.to_string());
    let suffix = options.jsx_insert_suffix.as_str();
    let insert_text = |name: &str| format!("{name}{suffix}");

    autocomplete_member(
        engine,
        options,
        sig,
        &config,
        MemberQuery {
            include_proto: false,
            exclude: Some(&exclude),
            insert_text: Some(&insert_text),
        },
    )
}
