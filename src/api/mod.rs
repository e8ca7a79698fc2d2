//! Typed facades over the Fleetmon HTTP API.
//!
//! Three facades share one [`transport::ApiTransport`]:
//!
//! - [`AuthApi`] - login and user registration
//! - [`ServersApi`] - server registration, listing, health and monitoring
//!   snapshots, the collect-all sweep, and deletion
//! - [`ContainersApi`] - container inventory retrieval
//!
//! Control flow is strictly request, transport call, response unwrap, typed
//! return. Facades hold no state beyond the transport and never cache or
//! mutate what the backend sends.
//!
//! # Modules
//!
//! - [`transport`] - shared HTTP plumbing
//! - [`types`] - wire data model
//! - [`auth`], [`servers`], [`containers`] - the facades

pub mod auth;
pub mod containers;
pub mod servers;
pub mod transport;
pub mod types;

pub use auth::AuthApi;
pub use containers::ContainersApi;
pub use servers::ServersApi;
