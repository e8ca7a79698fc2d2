//! Server facade: registration, listing, health and monitoring snapshots.
//!
//! Only the register endpoint wraps its payload in a `data` envelope; the
//! listing and monitoring endpoints return their payload at the top level.
//! The health and collect-all endpoints have been seen with both GET and
//! POST upstream; GET is canonical here since neither takes a body.

use crate::api::transport::{ApiTransport, Envelope};
use crate::api::types::{
    CollectAllSummary, Server, ServerHealth, ServerRegisterRequest, ServerWithHealth,
};
use crate::error::ApiError;

/// Client facade for the `/servers` endpoints.
#[derive(Debug, Clone)]
pub struct ServersApi {
    transport: ApiTransport,
}

impl ServersApi {
    /// Creates the facade on a shared transport.
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Registers a server for monitoring and returns the created record.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the backend rejects the registration
    /// fields.
    pub async fn register(&self, server_data: &ServerRegisterRequest) -> Result<Server, ApiError> {
        let envelope: Envelope<Server> =
            self.transport.post("/servers/register", server_data).await?;
        Ok(envelope.data)
    }

    /// Lists all known servers. No pagination; the full set is returned.
    pub async fn get_servers(&self) -> Result<Vec<Server>, ApiError> {
        self.transport.get("/servers/all-servers").await
    }

    /// Fetches one server's aggregate snapshot: health plus container
    /// inventory.
    pub async fn get_server_with_containers(
        &self,
        server_id: i64,
    ) -> Result<ServerWithHealth, ApiError> {
        // "monitoting" is the backend's actual route, typo and all.
        self.transport
            .get(&format!("/servers/monitoting/{server_id}"))
            .await
    }

    /// Fetches the aggregate snapshot for every known server in one call.
    pub async fn get_all_servers_with_containers(
        &self,
    ) -> Result<Vec<ServerWithHealth>, ApiError> {
        self.transport.get("/servers/containers/all").await
    }

    /// Fetches the latest health sample for one server.
    pub async fn get_server_health(&self, server_id: i64) -> Result<ServerHealth, ApiError> {
        self.transport
            .get(&format!("/servers/server-health/{server_id}"))
            .await
    }

    /// Triggers a health/inventory collection sweep across all servers.
    ///
    /// The refreshed data is not returned synchronously; re-fetch state
    /// afterwards.
    pub async fn collect_all(&self) -> Result<CollectAllSummary, ApiError> {
        self.transport.get("/servers/monitoring/collect-all").await
    }

    /// Requests deletion of a server. Succeeds with no payload.
    ///
    /// # Errors
    ///
    /// [`ApiError::NotFound`] if the id is unknown to the backend.
    pub async fn delete_server(&self, server_id: i64) -> Result<(), ApiError> {
        self.transport
            .delete(&format!("/servers/delete/{server_id}"))
            .await
    }
}
