//! Member completion.

use crate::error::CompletionError;
use crate::item::CompletionItem;
use crate::options::CompletionOptions;
use crate::telemetry::{Telemetry, tags};
use rustc_hash::FxHashSet;
use tjs_common::{Loc, is_sentinel_name};
use tjs_types::{FileSig, MemberExtraction, MemberMap, TypeEngine};

/// Name every class type carries; never offered as a member.
pub const CONSTRUCTOR_NAME: &str = "constructor";

/// Members the engine uses for its own bookkeeping.
pub fn is_internal_member(name: &str) -> bool {
    name.starts_with('.') || name == "__proto__"
}

/// Caller-side knobs for one member completion.
#[derive(Clone, Copy, Default)]
pub struct MemberQuery<'a> {
    pub include_proto: bool,
    /// Names never offered, on top of the built-in exclusions.
    pub exclude: Option<&'a FxHashSet<String>>,
    /// Maps a member name to the text inserted for it.
    pub insert_text: Option<&'a dyn Fn(&str) -> String>,
}

pub type MemberResult = Result<(Vec<CompletionItem>, Telemetry), (CompletionError, Telemetry)>;

/// Complete members of `receiver`.
///
/// Fails only when the receiver's members cannot be extracted. Members whose
/// type does not normalize are dropped without a trace.
pub fn autocomplete_member<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    sig: &FileSig,
    receiver: &E::Type,
    query: MemberQuery<'_>,
) -> MemberResult {
    let (members, result) = match engine.extract_members(receiver, query.include_proto) {
        MemberExtraction::Success(members) => (members, tags::SUCCESS),
        MemberExtraction::SuccessModule(members) => (members, tags::SUCCESS_MODULE),
        MemberExtraction::FailureNullishType(ty) => {
            return Err(failure(engine, CompletionError::NullishReceiver, &ty));
        }
        MemberExtraction::FailureAnyType(ty) => {
            return Err(failure(engine, CompletionError::NoCoverage, &ty));
        }
        MemberExtraction::FailureUnhandledType(ty) => {
            let desc = engine.describe(&ty);
            return Err(failure(engine, CompletionError::UnhandledType(desc), &ty));
        }
        MemberExtraction::FailureUnhandledMembers(ty) => {
            let desc = engine.describe(&ty);
            return Err(failure(engine, CompletionError::UnhandledMembers(desc), &ty));
        }
    };

    let candidates = filter_members(engine, options, members, query.exclude);
    let names: Vec<String> = candidates.iter().map(|(name, _, _)| name.clone()).collect();
    let batch: Vec<(Loc, E::Type)> = candidates
        .into_iter()
        .map(|(_, loc, ty)| (loc, ty))
        .collect();

    let items: Vec<CompletionItem> = names
        .into_iter()
        .zip(engine.normalize_batch(sig, batch))
        .filter_map(|(name, (loc, normalized))| {
            let normalized = normalized.ok()?;
            let insert_text = query.insert_text.map(|transform| transform(&name));
            let item = CompletionItem::from_ty(
                engine,
                name,
                loc,
                &normalized,
                options.signature_details,
            );
            Some(match insert_text {
                Some(text) => item.with_insert_text(text),
                None => item,
            })
        })
        .collect();

    let telemetry = Telemetry::new()
        .with("result", result)
        .with("count", items.len());
    Ok((items, telemetry))
}

fn failure<E: TypeEngine + ?Sized>(
    engine: &E,
    error: CompletionError,
    ty: &E::Type,
) -> (CompletionError, Telemetry) {
    let telemetry = Telemetry::new()
        .with("result", error.tag())
        .with("type", engine.describe(ty));
    (error, telemetry)
}

/// Members that may be offered, with their definition locations.
fn filter_members<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    members: MemberMap<E::Type>,
    exclude: Option<&FxHashSet<String>>,
) -> Vec<(String, Loc, E::Type)> {
    members
        .into_iter()
        .filter(|(name, _)| {
            !is_sentinel_name(name)
                && name != CONSTRUCTOR_NAME
                && !is_internal_member(name)
                && !exclude.is_some_and(|set| set.contains(name))
                && !options.excluded_members.iter().any(|ex| ex == name)
        })
        .map(|(name, ty)| {
            let loc = engine.type_loc(&ty);
            (name, loc, ty)
        })
        .collect()
}
