//! Domain DTOs for the users API.
//!
//! # Design
//! `UserRecord` mirrors the remote service's JSON (camelCase keys) but is
//! defined independently from the mock-server crate. Integration tests catch
//! any schema drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier used by every step of the demo sequence.
pub const DEMO_USER_ID: i64 = 3;

/// A user as exchanged with the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
}

impl UserRecord {
    pub fn new(id: i64, first_name: &str, last_name: &str, age: u8) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }
}

/// Record sent by the create step.
pub fn demo_create_user() -> UserRecord {
    UserRecord::new(DEMO_USER_ID, "James", "Brown", 28)
}

/// Record sent by the update step. Same id, different payload.
pub fn demo_update_user() -> UserRecord {
    UserRecord::new(DEMO_USER_ID, "Thomas", "Shelby", 5)
}
