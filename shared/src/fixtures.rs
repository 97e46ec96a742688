//! Sample leads used for seeding and compatibility testing

use crate::models::{RegisterInput, Service};

/// The three sample leads, in insertion order
pub fn sample_leads() -> Vec<RegisterInput> {
    vec![
        RegisterInput {
            name: "James Wilson".to_string(),
            email: "james.wilson@gmail.com".to_string(),
            mobile: "0412 345 678".to_string(),
            postcode: "2060".to_string(),
            services: vec![Service::Delivery, Service::Payment],
        },
        RegisterInput {
            name: "Sophie Taylor".to_string(),
            email: "sophie.taylor@outlook.com".to_string(),
            mobile: "0423 789 456".to_string(),
            postcode: "3143".to_string(),
            services: vec![Service::Pickup, Service::Payment],
        },
        RegisterInput {
            name: "Liam Nguyen".to_string(),
            email: "liam.nguyen@hotmail.com".to_string(),
            mobile: "0437 654 321".to_string(),
            postcode: "4000".to_string(),
            services: vec![Service::Delivery, Service::Pickup, Service::Payment],
        },
    ]
}
