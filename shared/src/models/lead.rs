//! Lead registration models

use serde::{Deserialize, Serialize};

use super::Service;

/// A prospective customer's registration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    /// Assigned by the store on creation
    pub id: i32,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    /// `None` when the stored record has no services value at all
    pub services: Option<Vec<Service>>,
}

/// Registration payload as it arrives on the wire.
///
/// Every field is optional so a missing field is reported by the
/// validation chain instead of failing deserialization. Services stay as
/// raw tokens for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<String>>,
}

/// Registration input that has passed boundary validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub postcode: String,
    /// Never empty
    pub services: Vec<Service>,
}

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Always true; failures are reported as errors
    pub success: bool,
    pub id: i32,
    pub email: String,
}

impl RegisterResponse {
    pub fn registered(id: i32, email: impl Into<String>) -> Self {
        Self {
            success: true,
            id,
            email: email.into(),
        }
    }
}

impl From<RegisterInput> for RegisterRequest {
    fn from(input: RegisterInput) -> Self {
        Self {
            name: Some(input.name),
            email: Some(input.email),
            mobile: Some(input.mobile),
            postcode: Some(input.postcode),
            services: Some(
                input
                    .services
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_serializes_null_services() {
        let lead = Lead {
            id: 3,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            mobile: "1234".to_string(),
            postcode: "4000".to_string(),
            services: None,
        };
        let value = serde_json::to_value(&lead).unwrap();
        assert!(value["services"].is_null());
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let request: RegisterRequest = serde_json::from_str(r#"{"name":"John"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("John"));
        assert!(request.email.is_none());
        assert!(request.services.is_none());
    }

    #[test]
    fn test_register_response_is_successful() {
        let response = RegisterResponse::registered(1, "johndoe@gmail.com");
        assert!(response.success);
        assert_eq!(response.id, 1);
        assert_eq!(response.email, "johndoe@gmail.com");
    }
}
