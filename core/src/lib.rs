//! Synchronous API client core for the users service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The host supplies a
//! [`Transport`]; [`UserService`] drives the session probe and the fixed
//! create/update/delete demo sequence through it.
//!
//! # Design
//! - `UsersClient` is stateless and holds only the endpoint URL.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - The session cookie is captured once by [`establish_session`] and passed
//!   by reference to every request builder afterwards.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod session;
pub mod types;

pub use client::{SequenceMode, UsersClient, USERS_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::{establish_session, UserService};
pub use session::Session;
pub use types::{demo_create_user, demo_update_user, UserRecord, DEMO_USER_ID};
