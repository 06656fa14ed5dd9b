//! WASM bindings for weekslot.
//!
//! Lets the browser calendar widget drive a [`SlotPicker`] through
//! `wasm-bindgen`. Complex values cross the boundary as JSON strings; instants
//! are ISO 8601 strings. The picker's confirm/alert dialogs are JavaScript
//! callbacks supplied by the host, and the host performs the HTTP POST between
//! `beginSubmission()` and `finishSubmission()`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p weekslot-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/weekslot-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/weekslot_wasm.wasm
//! ```

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use weekslot::{parse_instant, CalendarView, Interval, Prompter, SlotPicker, WeekSlotError};

// ---------------------------------------------------------------------------
// Prompter backed by JavaScript callbacks
// ---------------------------------------------------------------------------

/// `confirm(message) -> boolean` and `alert(message)` supplied by the page,
/// typically `window.confirm` / `window.alert` or an async-dialog shim.
struct JsPrompter {
    confirm: Function,
    alert: Function,
}

impl Prompter for JsPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirm
            .call1(&JsValue::NULL, &JsValue::from_str(message))
            .map(|answer| answer.is_truthy())
            .unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.alert.call1(&JsValue::NULL, &JsValue::from_str(message)) {
            tracing::warn!(error = ?e, "alert callback threw");
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_js_error(e: WeekSlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Calendar display settings (visible hours, default view, toolbar) as JSON.
#[wasm_bindgen(js_name = "calendarView")]
pub fn calendar_view() -> Result<String, JsValue> {
    to_json(&CalendarView::default())
}

/// A weekly slot picker owned by one calendar instance.
#[wasm_bindgen]
pub struct WeekSlotPicker {
    inner: SlotPicker<JsPrompter>,
}

#[wasm_bindgen]
impl WeekSlotPicker {
    /// Create a picker. `confirm` must return a truthy value to accept.
    #[wasm_bindgen(constructor)]
    pub fn new(confirm: Function, alert: Function) -> WeekSlotPicker {
        WeekSlotPicker {
            inner: SlotPicker::new(JsPrompter { confirm, alert }),
        }
    }

    /// Handle `onSelectSlot`. Returns the outcome as JSON, e.g.
    /// `{"status":"committed","interval":{...},"absorbed":[...]}`.
    #[wasm_bindgen(js_name = "selectSlot")]
    pub fn select_slot(&mut self, start: &str, end: &str) -> Result<String, JsValue> {
        let start = parse_instant(start).map_err(to_js_error)?;
        let end = parse_instant(end).map_err(to_js_error)?;
        to_json(&self.inner.on_slot_selected(start, end))
    }

    /// Handle `onSelectEvent`. Returns `true` if the interval was deleted.
    ///
    /// Ids are millisecond timestamps, which fit losslessly in a JS number.
    #[wasm_bindgen(js_name = "clickEvent")]
    pub fn click_event(&mut self, id: f64) -> bool {
        self.inner.on_event_clicked(id as i64)
    }

    /// Intervals to render as JSON `[{id, start, end}]`.
    pub fn events(&self) -> Result<String, JsValue> {
        let intervals: &[Interval] = self.inner.intervals();
        to_json(&intervals)
    }

    #[wasm_bindgen(js_name = "isSubmitting")]
    pub fn is_submitting(&self) -> bool {
        self.inner.is_submitting()
    }

    /// Mark a submission in flight and return the request body to POST.
    #[wasm_bindgen(js_name = "beginSubmission")]
    pub fn begin_submission(&mut self) -> Result<String, JsValue> {
        self.inner
            .begin_submission()
            .to_json()
            .map_err(to_js_error)
    }

    /// Report the POST result; `detail` is the response body or the error text.
    #[wasm_bindgen(js_name = "finishSubmission")]
    pub fn finish_submission(&mut self, ok: bool, detail: String) -> bool {
        let result = if ok {
            Ok(detail)
        } else {
            Err(WeekSlotError::Transport(detail))
        };
        self.inner.finish_submission(result)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
