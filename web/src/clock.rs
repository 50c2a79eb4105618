//! Page clock backed by `js_sys::Date`.

use js_sys::Date;
use qa_desk::clock::Clock;
use qa_desk::message::Timestamp;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> Timestamp {
        Timestamp(Date::now())
    }

    // `getTimezoneOffset` is minutes *behind* UTC.
    #[allow(clippy::cast_possible_truncation)]
    fn utc_offset_minutes(&self, at: Timestamp) -> i32 {
        let date = Date::new(&JsValue::from_f64(at.as_millis()));
        -(date.get_timezone_offset() as i32)
    }
}
