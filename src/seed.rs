//! The server-injected seed: reading it at boot and writing it into a shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server assigns one JSON context to `window.sentinelCtx` before the
//! client bundle runs. An absent slot is a valid state (the app renders a
//! "no context" notice); a present but malformed one is a contract breach
//! that is reported and then treated the same way.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use crate::context::{ContextError, SentinelCtx};

/// Name of the global slot on `window`.
pub const SEED_GLOBAL: &str = "sentinelCtx";

/// Parse the raw JSON found in the global slot, if any.
///
/// `null` counts as absent.
pub fn parse_seed(raw: Option<&str>) -> Result<Option<SentinelCtx>, ContextError> {
    match raw.map(str::trim) {
        None | Some("" | "null" | "undefined") => Ok(None),
        Some(json) => SentinelCtx::from_json(json).map(Some),
    }
}

/// `<script>` element assigning `ctx` to the global slot.
///
/// `<`, `>` and `&` are emitted as JSON unicode escapes so no string inside
/// the context can close the script element.
pub fn seed_script(ctx: &SentinelCtx) -> Result<String, ContextError> {
    let json = serde_json::to_string(ctx)?;
    let escaped = json.replace('<', "\\u003c").replace('>', "\\u003e").replace('&', "\\u0026");
    Ok(format!("<script>window.{SEED_GLOBAL} = {escaped};</script>"))
}

/// Read the seed from `window.sentinelCtx`.
#[cfg(feature = "csr")]
pub fn read_seed() -> Result<Option<SentinelCtx>, ContextError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let slot = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(SEED_GLOBAL)).ok();
    let raw = slot
        .filter(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| js_sys::JSON::stringify(&value).ok())
        .and_then(|json| json.as_string());
    parse_seed(raw.as_deref())
}
