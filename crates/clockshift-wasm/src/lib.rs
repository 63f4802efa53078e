//! WASM bindings for clockshift.
//!
//! Exposes UTC to local conversion, the DST window check and the JSON request
//! handler to JavaScript via `wasm-bindgen`. Structured results are passed as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p clockshift-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/clockshift-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/clockshift_wasm.wasm
//! ```

use clockshift::{is_dst_period, UtcTimestamp};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ReplyDto<'a> {
    status: u16,
    body: &'a serde_json::Value,
}

/// Convert a UTC timestamp to local date and time.
///
/// Returns a JSON string `{"date": "YYYY-MM-DD", "time": "HH:MM"}`.
///
/// # Arguments
/// - `utc` -- UTC timestamp (e.g., "2024-06-15 10:00")
/// - `offset` -- whole-hour offset in `[-12, 12]`
/// - `is_dst` -- add one hour when `utc` is inside the DST window
#[wasm_bindgen(js_name = "convertDatetime")]
pub fn convert_datetime(utc: &str, offset: i32, is_dst: bool) -> Result<String, JsValue> {
    let local = clockshift::convert_str(utc, i64::from(offset), is_dst)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&local)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Whether a UTC timestamp (`YYYY-MM-DD HH:MM`) is inside its year's DST window.
#[wasm_bindgen(js_name = "isDstPeriod")]
pub fn is_dst(utc: &str) -> Result<bool, JsValue> {
    let ts: UtcTimestamp = utc
        .parse()
        .map_err(|e: clockshift::ConvertError| JsValue::from_str(&e.to_string()))?;
    Ok(is_dst_period(ts.naive()))
}

/// Answer a JSON conversion request.
///
/// Never throws for bad requests: returns `{"status": 200|400, "body": {...}}`
/// where `body` is either `{"converted_datetime": ...}` or `{"error": ...}`.
#[wasm_bindgen(js_name = "handleRequest")]
pub fn handle_request(request_json: &str) -> Result<String, JsValue> {
    let reply = clockshift::handle_json(request_json);
    serde_json::to_string(&ReplyDto {
        status: reply.status,
        body: &reply.body,
    })
    .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
