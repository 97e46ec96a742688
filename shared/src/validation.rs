//! Boundary validation for lead registration
//!
//! The wire shape ([`RegisterRequest`]) and the rules applied to it are kept
//! apart: each field runs through a chain of small [`Rule`]s, and only a
//! request that passes every chain becomes a [`RegisterInput`].

use serde::Serialize;
use thiserror::Error;

use crate::models::{RegisterInput, RegisterRequest, Service};

/// A single check on a text field
pub type Rule = fn(&str) -> Result<(), &'static str>;

pub const NAME_RULES: &[Rule] = &[validate_required];
pub const EMAIL_RULES: &[Rule] = &[validate_required, validate_email];
pub const MOBILE_RULES: &[Rule] = &[validate_required];
pub const POSTCODE_RULES: &[Rule] = &[validate_required];

/// A validation failure on one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All validation failures found in one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("Validation failed: {}", summary(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Whether any failure was recorded against `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

// ============================================================================
// Field Rules
// ============================================================================

/// Reject empty or whitespace-only values
pub fn validate_required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err("must not be empty")
    } else {
        Ok(())
    }
}

/// Validate email syntax
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if validator::validate_email(email) {
        Ok(())
    } else {
        Err("must be a valid email address")
    }
}

/// Map service tokens onto the closed [`Service`] set.
///
/// Order and duplicates are kept as given.
pub fn validate_services(tokens: &[String]) -> Result<Vec<Service>, &'static str> {
    if tokens.is_empty() {
        return Err("must contain at least one service");
    }
    tokens
        .iter()
        .map(|token| Service::from_token(token))
        .collect::<Option<Vec<_>>>()
        .ok_or("must only contain delivery, pick-up or payment")
}

// ============================================================================
// Chains
// ============================================================================

/// Run `rules` in order against a field, recording the first failure.
///
/// Returns the value only when every rule passed.
pub fn check_field(
    field: &'static str,
    value: Option<&str>,
    rules: &[Rule],
    errors: &mut ValidationErrors,
) -> Option<String> {
    let Some(value) = value else {
        errors.add(field, "is required");
        return None;
    };
    for rule in rules {
        if let Err(message) = rule(value) {
            errors.add(field, message);
            return None;
        }
    }
    Some(value.to_string())
}

/// Validate a registration request and build the domain input.
///
/// All fields are checked so the caller sees every failure at once.
pub fn validate_register_request(
    request: &RegisterRequest,
) -> Result<RegisterInput, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = check_field("name", request.name.as_deref(), NAME_RULES, &mut errors);
    let email = check_field("email", request.email.as_deref(), EMAIL_RULES, &mut errors);
    let mobile = check_field("mobile", request.mobile.as_deref(), MOBILE_RULES, &mut errors);
    let postcode = check_field(
        "postcode",
        request.postcode.as_deref(),
        POSTCODE_RULES,
        &mut errors,
    );
    let services = match request.services.as_deref() {
        None => {
            errors.add("services", "is required");
            None
        }
        Some(tokens) => match validate_services(tokens) {
            Ok(services) => Some(services),
            Err(message) => {
                errors.add("services", message);
                None
            }
        },
    };

    match (name, email, mobile, postcode, services) {
        (Some(name), Some(email), Some(mobile), Some(postcode), Some(services))
            if errors.is_empty() =>
        {
            Ok(RegisterInput {
                name,
                email,
                mobile,
                postcode,
                services,
            })
        }
        _ => Err(errors),
    }
}
