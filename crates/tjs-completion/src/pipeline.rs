//! Cursor-to-response completion pipeline.

use crate::dispatch::{CompletionResponse, get_completions};
use crate::options::CompletionOptions;
use crate::telemetry::{Telemetry, ac_type};
use crate::token::inject_sentinel;
use serde_json::Value;
use tjs_common::Position;
use tjs_types::{FileSig, TypeEngine};
use tracing::{debug, trace};

/// Complete at `cursor` in `contents`.
///
/// The sentinel is spliced in at the cursor, the engine re-checks the
/// modified text and the result is dispatched with the three lines around
/// the cursor as context. When the engine produces no tree the response is
/// an empty classification miss.
#[tracing::instrument(level = "debug", skip_all, fields(line = cursor.line, column = cursor.column))]
pub fn autocomplete<E: TypeEngine + ?Sized>(
    engine: &E,
    options: &CompletionOptions,
    contents: &str,
    cursor: Position,
    trigger: Option<&str>,
) -> CompletionResponse {
    let injected = inject_sentinel(contents, cursor.line, cursor.column);
    trace!(context = %injected.context, "injected sentinel");

    let Some(program) = engine.recheck(&injected.text) else {
        debug!("re-check produced no tree");
        let telemetry = Telemetry::new()
            .with("ac_trigger", trigger.map_or(Value::Null, Value::from))
            .with("ac_ctx", injected.context)
            .with("ac_type", ac_type::NONE);
        return CompletionResponse {
            result: Ok(Vec::new()),
            telemetry,
        };
    };

    let sig = FileSig::from_program(&program);
    get_completions(engine, options, &program, &sig, trigger, &injected.context)
}
