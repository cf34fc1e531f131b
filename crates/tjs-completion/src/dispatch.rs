//! Top-level completion entry point.

use crate::classify::classify;
use crate::error::CompletionError;
use crate::identifier::autocomplete_id;
use crate::item::{CompletionItem, error_to_legacy_json, results_to_legacy_json};
use crate::jsx::autocomplete_jsx;
use crate::member::{MemberQuery, autocomplete_member};
use crate::options::CompletionOptions;
use crate::request::CompletionRequest;
use crate::telemetry::{Telemetry, ac_type};
use crate::token::remove_sentinel_from_loc;
use serde_json::Value;
use tjs_ast::TypedProgram;
use tjs_common::SENTINEL_TOKEN;
use tjs_types::{FileSig, TypeEngine};
use tracing::debug;

/// Items or a request-level error, always with telemetry.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub result: Result<Vec<CompletionItem>, CompletionError>,
    pub telemetry: Telemetry,
}

impl CompletionResponse {
    pub fn items(&self) -> &[CompletionItem] {
        match &self.result {
            Ok(items) => items,
            Err(_) => &[],
        }
    }

    pub fn to_legacy_json(&self) -> Value {
        match &self.result {
            Ok(items) => results_to_legacy_json(items),
            Err(err) => error_to_legacy_json(&err.to_string()),
        }
    }
}

/// Classify the completion context in `program` and resolve it.
///
/// A program with no recognisable completion context yields an empty
/// successful response tagged `ac_type: "None"`.
pub fn get_completions<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    program: &TypedProgram<E::Type>,
    sig: &FileSig,
    trigger: Option<&str>,
    context: &str,
) -> CompletionResponse {
    let mut telemetry = Telemetry::new()
        .with("ac_trigger", trigger.map_or(Value::Null, Value::from))
        .with("ac_ctx", context);

    let Some(request) = classify(program, trigger) else {
        debug!("no completion context");
        telemetry.set("ac_type", ac_type::NONE);
        return CompletionResponse {
            result: Ok(Vec::new()),
            telemetry,
        };
    };

    let ac_loc = remove_sentinel_from_loc(request.loc());
    telemetry.set("ac_type", request.kind_label());
    telemetry.set("ac_loc", ac_loc.to_string());
    debug!(kind = request.kind_label(), loc = %ac_loc, "dispatching completion");

    let result = match request {
        CompletionRequest::Identifier { id_kind, .. } => {
            let (items, id_telemetry) =
                autocomplete_id(engine, options, program, sig, &ac_loc, id_kind);
            telemetry.merge(id_telemetry);
            Ok(items)
        }
        CompletionRequest::Member {
            name,
            receiver_type,
            ..
        } => {
            telemetry.set("ac_name", name.replace(SENTINEL_TOKEN, ""));
            let query = MemberQuery {
                include_proto: options.include_proto_members,
                ..MemberQuery::default()
            };
            absorb(
                &mut telemetry,
                autocomplete_member(engine, options, sig, &receiver_type, query),
            )
        }
        CompletionRequest::Jsx {
            name,
            used_attrs,
            component_type,
            ..
        } => {
            telemetry.set("ac_name", name.replace(SENTINEL_TOKEN, ""));
            absorb(
                &mut telemetry,
                autocomplete_jsx(engine, options, sig, &component_type, &used_attrs),
            )
        }
    };

    match &result {
        Ok(items) => debug!(count = items.len(), "completion done"),
        Err(err) => debug!(error = %err, "completion failed"),
    }
    CompletionResponse { result, telemetry }
}

fn absorb(
    telemetry: &mut Telemetry,
    result: Result<(Vec<CompletionItem>, Telemetry), (CompletionError, Telemetry)>,
) -> Result<Vec<CompletionItem>, CompletionError> {
    match result {
        Ok((items, extra)) => {
            telemetry.merge(extra);
            Ok(items)
        }
        Err((err, extra)) => {
            telemetry.merge(extra);
            Err(err)
        }
    }
}
