//! WASM bindings for schedule-engine.
//!
//! Lets the agenda front end run the same occurrence expansion and conflict
//! check as the backend, e.g. to warn about a clash before the make-up form is
//! submitted. All records cross the boundary as JSON strings using the same
//! shapes the backend accepts (data store column names included).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_engine_wasm.wasm
//! ```

use schedule_engine::parse::format_local;
use schedule_engine::{Conflict, MakeUpLesson, MakeUpRequest, RecurringClass, ScheduleConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ConflictDto {
    status: u16,
    detail: String,
    class_code: String,
    occurrence_start: String,
    occurrence_end: String,
}

impl From<&Conflict> for ConflictDto {
    fn from(c: &Conflict) -> Self {
        Self {
            status: Conflict::STATUS,
            detail: c.to_string(),
            class_code: c.class_code.clone(),
            occurrence_start: format_local(c.occurrence.start),
            occurrence_end: format_local(c.occurrence.end),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Optional config JSON; `None` or empty means defaults.
fn parse_config(config_json: Option<String>) -> Result<ScheduleConfig, JsValue> {
    match config_json.as_deref() {
        None | Some("") => Ok(ScheduleConfig::default()),
        Some(json) => parse_json(json, "config"),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Expand one class record into its lesson start times.
///
/// Returns a JSON array of local `YYYY-MM-DDTHH:MM:SS` strings; empty when the
/// class is inactive or not yet schedulable.
#[wasm_bindgen(js_name = "generateOccurrences")]
pub fn generate_occurrences(
    class_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let class: RecurringClass = parse_json(class_json, "class")?;
    let config = parse_config(config_json)?;

    let starts: Vec<String> = class.occurrences(&config).map(format_local).collect();

    to_json(&starts)
}

/// Check a proposed make-up lesson against an instructor's classes.
///
/// `request_json` is `{instructor_id, start}`; `classes_json` is an array of
/// class records. Returns `null` when there is no conflict, otherwise an object
/// with `status` (409), `detail`, `class_code` and the clashing lesson's times.
#[wasm_bindgen(js_name = "checkConflict")]
pub fn check_conflict(
    request_json: &str,
    classes_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let request: MakeUpRequest = parse_json(request_json, "request")?;
    let classes: Vec<RecurringClass> = parse_json(classes_json, "classes")?;
    let config = parse_config(config_json)?;

    let conflict = schedule_engine::check_request(&request, &classes, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_json(&conflict.as_ref().map(ConflictDto::from))
}

/// Build the agenda feed from class records and make-up lesson records.
#[wasm_bindgen(js_name = "assembleFeed")]
pub fn assemble_feed(
    classes_json: &str,
    make_ups_json: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let classes: Vec<RecurringClass> = parse_json(classes_json, "classes")?;
    let make_ups: Vec<MakeUpLesson> = parse_json(make_ups_json, "make-ups")?;
    let config = parse_config(config_json)?;

    to_json(&schedule_engine::assemble_feed(&classes, &make_ups, &config))
}

/// Date of a class's last lesson (`YYYY-MM-DD`), or `undefined` when it
/// cannot be projected.
#[wasm_bindgen(js_name = "projectedEndDate")]
pub fn projected_end_date(
    start_date: Option<String>,
    lesson_count: Option<i32>,
) -> Option<String> {
    schedule_engine::projected_end_date(start_date.as_deref(), lesson_count.map(i64::from))
        .map(|date| date.format("%Y-%m-%d").to_string())
}
