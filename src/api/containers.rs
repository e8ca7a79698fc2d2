//! Container facade: inventory retrieval.

use serde::Deserialize;

use crate::api::transport::ApiTransport;
use crate::api::types::{Container, ContainerDataRequest};
use crate::error::ApiError;

/// Response shape for container inventory.
///
/// The backend does not guarantee a collection-typed response: a server
/// with a single container may come back as a bare object. Both shapes
/// normalize to a vector, and normalizing an already-array response is a
/// no-op.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

/// Client facade for the `/containers` endpoints.
#[derive(Debug, Clone)]
pub struct ContainersApi {
    transport: ApiTransport,
}

impl ContainersApi {
    /// Creates the facade on a shared transport.
    pub fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }

    /// Fetches the container inventory for one server.
    ///
    /// Always yields a vector regardless of whether the backend answered
    /// with an object or an array.
    pub async fn get_container_data(
        &self,
        request: &ContainerDataRequest,
    ) -> Result<Vec<Container>, ApiError> {
        let response: OneOrMany<Container> = self
            .transport
            .post("/containers/get-container-data", request)
            .await?;
        Ok(response.into_vec())
    }
}
