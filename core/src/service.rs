//! Session bootstrap and the create/update/delete demo sequence.
//!
//! # Design
//! `UserService::connect` is the only way to get a service, so no CRUD
//! request can be built before the probe succeeded. The session is stored
//! once and only read afterwards. All I/O goes through the caller-supplied
//! [`Transport`].

use std::fmt;

use tracing::{debug, info};

use crate::client::{SequenceMode, UsersClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::session::Session;
use crate::types::{demo_create_user, demo_update_user, UserRecord, DEMO_USER_ID};

/// Probe the endpoint once and turn its `set-cookie` values into a session.
pub fn establish_session<T: Transport>(
    client: &UsersClient,
    transport: &mut T,
) -> Result<Session, ApiError> {
    let response = transport.execute(client.build_session_probe())?;
    let session = client.parse_session(&response)?;
    info!(endpoint = client.endpoint(), "session established");
    Ok(session)
}

/// Users API bound to an established session and a transport.
pub struct UserService<T> {
    client: UsersClient,
    transport: T,
    session: Session,
    mode: SequenceMode,
}

// Transports need not be `Debug`, so leave them out.
impl<T> fmt::Debug for UserService<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService")
            .field("client", &self.client)
            .field("session", &self.session)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> UserService<T> {
    /// Establish the session, then hand back a service ready for CRUD calls.
    pub fn connect(client: UsersClient, mut transport: T, mode: SequenceMode) -> Result<Self, ApiError> {
        let session = establish_session(&client, &mut transport)?;
        Ok(Self {
            client,
            transport,
            session,
            mode,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn list_users(&mut self) -> Result<Vec<UserRecord>, ApiError> {
        let req = self.client.build_list_users(&self.session);
        let response = self.send("list", req)?;
        for (name, value) in &response.headers {
            debug!(%name, %value, "list response header");
        }
        self.client.parse_list_users(response)
    }

    /// Create, update, then delete user 3 and concatenate the three bodies.
    pub fn run_demo_sequence(&mut self) -> Result<String, ApiError> {
        let created = self.create_user(&demo_create_user())?;
        let updated = self.update_user(&demo_update_user())?;
        let deleted = self.delete_user(DEMO_USER_ID)?;
        Ok(created + &updated + &deleted)
    }

    pub fn create_user(&mut self, user: &UserRecord) -> Result<String, ApiError> {
        let req = self.client.build_create_user(&self.session, user)?;
        let response = self.send("create", req)?;
        self.client.parse_text(response, self.mode)
    }

    pub fn update_user(&mut self, user: &UserRecord) -> Result<String, ApiError> {
        let req = self.client.build_update_user(&self.session, user)?;
        let response = self.send("update", req)?;
        self.client.parse_text(response, self.mode)
    }

    pub fn delete_user(&mut self, id: i64) -> Result<String, ApiError> {
        let req = self.client.build_delete_user(&self.session, id);
        let response = self.send("delete", req)?;
        self.client.parse_text(response, self.mode)
    }

    /// Give the transport back, e.g. to inspect a test double.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn send(&mut self, step: &str, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(step, method = req.method.as_str(), path = %req.path, "sending request");
        let response = self.transport.execute(req)?;
        debug!(step, status = response.status, "response received");
        Ok(response)
    }
}
