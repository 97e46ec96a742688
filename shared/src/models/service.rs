//! Service offerings a lead can express interest in

use serde::{Deserialize, Serialize};

/// Services offered to prospective customers.
///
/// Every wire (JSON, SQL, WASM) carries the fixed token returned by
/// [`Service::as_str`], never the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "delivery")]
    Delivery,
    #[serde(rename = "pick-up")]
    Pickup,
    #[serde(rename = "payment")]
    Payment,
}

impl Service {
    /// All members of the closed set, in declaration order
    pub const ALL: [Service; 3] = [Service::Delivery, Service::Pickup, Service::Payment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Delivery => "delivery",
            Service::Pickup => "pick-up",
            Service::Payment => "payment",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "delivery" => Some(Service::Delivery),
            "pick-up" => Some(Service::Pickup),
            "payment" => Some(Service::Payment),
            _ => None,
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
