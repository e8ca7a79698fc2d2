//! Fleetmon client - typed API client for the Fleetmon monitoring backend.
//!
//! This crate provides a thin, typed facade over the Fleetmon HTTP API:
//! user authentication, server registration, health polling, and container
//! inventory retrieval. Every operation is a single request/response round
//! trip; the client holds no cache, performs no retries, and never mutates
//! a record after deserialization.
//!
//! # Architecture
//!
//! - **Transport** - shared HTTP plumbing ([`ApiTransport`]): base URL,
//!   bearer-token attachment, envelope unwrapping, status-to-error mapping
//! - **Auth** - login and user registration ([`AuthApi`])
//! - **Servers** - registration, listing, health and monitoring snapshots
//!   ([`ServersApi`])
//! - **Containers** - container inventory ([`ContainersApi`])
//!
//! Failures surface as [`ApiError`] with enough structure (status class plus
//! raw body) to tell validation, authentication, not-found, and conflict
//! responses apart without re-parsing anything.
//!
//! # Modules
//!
//! - [`api`] - the client layer proper (transport, types, facades)
//! - [`config`] - CLI configuration loading/saving
//! - [`error`] - error taxonomy
//! - [`constants`] - timeouts and defaults

pub mod api;
pub mod config;
pub mod constants;
pub mod error;

// Re-export commonly used types
pub use api::transport::ApiTransport;
pub use api::{AuthApi, ContainersApi, ServersApi};
pub use config::Config;
pub use error::ApiError;
