//! Auth facade: login and user registration.
//!
//! Both endpoints wrap their payload in a `data` envelope. Neither call
//! establishes local session state; the returned token is the caller's to
//! store or discard.

use crate::api::transport::{ApiTransport, Envelope};
use crate::api::types::{LoginRequest, RegisterRequest, Token, User};
use crate::error::ApiError;

/// Client facade for the `/auth` endpoints.
#[derive(Debug, Clone)]
pub struct AuthApi {
    transport: ApiTransport,
}

impl AuthApi {
    /// Creates the facade on a shared transport.
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Submits credentials and returns the issued session token.
    ///
    /// The token is returned to the caller and NOT stored on the transport;
    /// call [`ApiTransport::set_bearer_token`] to use it on later requests.
    ///
    /// # Errors
    ///
    /// [`ApiError::Authentication`] on rejected credentials,
    /// [`ApiError::Validation`] on a malformed request body.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Token, ApiError> {
        let envelope: Envelope<Token> = self.transport.post("/auth/login", credentials).await?;
        Ok(envelope.data)
    }

    /// Registers a new user account and returns the created record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Conflict`] when the username or email is already taken.
    pub async fn register(&self, user_data: &RegisterRequest) -> Result<User, ApiError> {
        let envelope: Envelope<User> = self.transport.post("/auth/register", user_data).await?;
        Ok(envelope.data)
    }
}
