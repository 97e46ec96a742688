//! WebAssembly module for lead registration forms
//!
//! Runs the same registration checks as the server so browser clients
//! can report field errors before submitting.

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Validate a registration payload.
///
/// Returns the normalised payload as JSON, or throws a JSON array of
/// `{ field, message }` objects.
#[wasm_bindgen]
pub fn validate_registration(request_json: &str) -> Result<String, JsValue> {
    validate_registration_json(request_json).map_err(|e| JsValue::from_str(&e))
}

/// Wire tokens of every offered service
#[wasm_bindgen]
pub fn service_tokens() -> js_sys::Array {
    Service::ALL
        .iter()
        .map(|service| JsValue::from_str(service.as_str()))
        .collect()
}

/// Check a single email address
#[wasm_bindgen]
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Log a validation failure to the browser console
#[wasm_bindgen]
pub fn log_validation_errors(errors_json: &str) {
    web_sys::console::warn_1(&JsValue::from_str(errors_json));
}

fn validate_registration_json(request_json: &str) -> Result<String, String> {
    let request: RegisterRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid registration JSON: {}", e))?;

    match validate_register_request(&request) {
        Ok(input) => serde_json::to_string(&input).map_err(|e| e.to_string()),
        Err(errors) => Err(serde_json::to_string(errors.errors()).map_err(|e| e.to_string())?),
    }
}
