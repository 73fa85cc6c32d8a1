//! Structured log lines shared by the site and the hosting shell.
//!
//! Every event is one JSON object carrying `ts`, `level` and `event`, followed
//! by event-specific fields. Natively the line goes to stdout; in the browser
//! it goes to the console.

use serde::Serialize;
use serde_json::{Map, Value};

const RESERVED_KEYS: [&str; 3] = ["ts", "level", "event"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    ts: u64,
    level: LogLevel,
    event: &'a str,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Renders one log line. Non-object `fields` are dropped, as are extra keys
/// that would shadow the envelope.
pub fn format_event(ts: u64, level: LogLevel, event: &str, fields: Value) -> String {
    let mut fields = match fields {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for key in RESERVED_KEYS {
        fields.remove(key);
    }

    let record = LogRecord {
        ts,
        level,
        event,
        fields,
    };

    serde_json::to_string(&record).unwrap_or_else(|_| format!("{{\"event\":\"{event}\"}}"))
}

pub fn log_event(min_level: LogLevel, level: LogLevel, event: &str, fields: Value) {
    if level < min_level {
        return;
    }

    let line = format_event(now_unix_seconds(), level, event, fields);
    emit(level, &line);
}

/// Minimum level for browser-side events.
#[cfg(any(target_arch = "wasm32", test))]
pub fn client_log_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Debug => web_sys::console::debug_1(&line),
        LogLevel::Info => web_sys::console::info_1(&line),
    }
}
