//! Stateless HTTP request builder and response parser for the users API.
//!
//! # Design
//! `UsersClient` holds only the resource URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The session cookie is passed in explicitly on every
//! `build_*` call that needs it.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::session::Session;
use crate::types::UserRecord;

/// Path of the users collection relative to the base URL.
pub const USERS_PATH: &str = "/api/users";

/// How non-2xx CRUD responses are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceMode {
    /// Keep the body whatever the status; it ends up in the combined text.
    #[default]
    Lenient,
    /// Turn the first non-2xx response into `ApiError::Remote`.
    FailFast,
}

/// Synchronous, stateless client for the users API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    endpoint: String,
}

impl UsersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}{USERS_PATH}", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL of the users collection.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Headers-only probe whose `set-cookie` values become the session.
    pub fn build_session_probe(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Head,
            path: self.endpoint.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_list_users(&self, session: &Session) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint.clone(),
            headers: vec![session.header()],
            body: None,
        }
    }

    pub fn build_create_user(
        &self,
        session: &Session,
        user: &UserRecord,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, session, user)
    }

    /// The record is addressed by the id in the body; the path stays the
    /// collection URL.
    pub fn build_update_user(
        &self,
        session: &Session,
        user: &UserRecord,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, session, user)
    }

    pub fn build_delete_user(&self, session: &Session, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.endpoint),
            headers: vec![session.header()],
            body: None,
        }
    }

    pub fn parse_session(&self, response: &HttpResponse) -> Result<Session, ApiError> {
        Session::from_set_cookie(response.header_values("set-cookie")).ok_or(
            ApiError::SessionEstablishment {
                status: response.status,
            },
        )
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<UserRecord>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Return the raw body of a create/update/delete response.
    pub fn parse_text(&self, response: HttpResponse, mode: SequenceMode) -> Result<String, ApiError> {
        if mode == SequenceMode::FailFast {
            check_status(&response)?;
        }
        Ok(response.body)
    }

    fn json_request(
        &self,
        method: HttpMethod,
        session: &Session,
        user: &UserRecord,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(user).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: self.endpoint.clone(),
            headers: vec![
                session.header(),
                ("content-type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }
}

/// Map non-2xx responses to `ApiError::Remote`, keeping the body as-is.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Remote {
        status: response.status,
        body: response.body.clone(),
    })
}
