//! Shared helpers for WASM API operations
//!
//! Console logging, JS value conversion and error mapping used by every
//! exported function.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::errors::ConversionError;
use crate::settings::ConversionSettings;

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&format!("[WASM] {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_info(msg: &str) {
    web_sys::console::info_1(&format!("[WASM] {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&format!("[WASM] ⚠️ {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_error(msg: &str) {
    web_sys::console::error_1(&format!("[WASM] ❌ {}", msg).into());
}

// Native builds (tests, tools) have no console
#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(msg: &str) {
    log::warn!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(msg: &str) {
    log::error!("[WASM] {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Maps become plain objects so clue tables read as `clues.across["1"]`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let msg = format!("{}: {}", error_context, e);
            log_error(&msg);
            JsValue::from_str(&msg)
        })
}

/// Settings from JavaScript; `null` and `undefined` mean defaults
pub fn settings_from_js(value: JsValue) -> Result<ConversionSettings, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(ConversionSettings::default());
    }
    deserialize(value, "Invalid conversion settings")
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a conversion failure to a JsValue carrying its message
pub fn conversion_error(context: &str, err: ConversionError) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log_error(&msg);
    JsValue::from_str(&msg)
}
