//! Error types for the users API client.
//!
//! # Design
//! `SessionEstablishment` is separate from `Remote` because a probe without
//! `set-cookie` is fatal for the whole program, while a non-2xx CRUD response
//! is only an error in fail-fast mode. Transport failures always surface as
//! `Network` with the underlying message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The session probe came back without any `set-cookie` header.
    #[error("session establishment failed: no set-cookie header in response (HTTP {status})")]
    SessionEstablishment { status: u16 },

    /// The request could not be completed by the transport.
    #[error("network error: {0}")]
    Network(String),

    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Remote { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
