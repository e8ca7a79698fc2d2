//! Wire types for the Fleetmon API.
//!
//! These mirror the backend's JSON schema. All records are snapshots: the
//! backend creates them, this client only reads them. Relationships are
//! expressed by id fields, never by in-memory ownership.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Account category, e.g. "user" or "admin".
    pub user_type: String,
}

/// Session token issued on login.
///
/// Opaque to this client; it is never inspected, only forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Typically "bearer".
    pub token_type: String,
    /// In the future at issuance.
    pub expires_at: DateTime<Utc>,
    /// Id of the user the token was issued to.
    pub user_id: i64,
}

/// A registered user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the backend, immutable once issued.
    pub id: i64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Lifecycle state of a registered server. Exactly four values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Up,
    Down,
    Decommissioned,
    Inactive,
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Decommissioned => "decommissioned",
            Self::Inactive => "inactive",
        };
        f.write_str(s)
    }
}

impl FromStr for ServerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "decommissioned" => Ok(Self::Decommissioned),
            "inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown server status '{other}'")),
        }
    }
}

/// Payload for `POST /servers/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRegisterRequest {
    /// Id of the user registering the server.
    pub registrator_id: i64,
    pub name: String,
    /// SSH password; the backend stores it encrypted.
    pub password: String,
    pub ip_address: String,
    pub port: u16,
    pub status: ServerStatus,
}

/// A monitored server as known to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Assigned by the backend.
    pub id: i64,
    pub user_name: String,
    pub ssh_password_encrypted: String,
    pub ip_address: String,
    pub port: u16,
    pub status: ServerStatus,
}

/// Reachability classification of a health sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
    Offline,
    Error,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Healthy => "healthy",
            Self::Unhealthy => "unhealthy",
            Self::Offline => "offline",
            Self::Error => "error",
        };
        f.write_str(s)
    }
}

/// A point-in-time health sample for one server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerHealth {
    /// Absent while the sample has not been persisted yet.
    pub id: Option<i64>,
    pub server_id: i64,
    pub status: HealthStatus,
    /// Usage figures are percentages as reported by the backend.
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub disk_usage: f64,
    /// Human-readable uptime, e.g. "5 days, 3:02:11".
    pub uptime: String,
    /// Non-decreasing per server across polls.
    pub checked_at: DateTime<Utc>,
}

/// A container observed on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Backend-assigned numeric id; absent the first time a container is seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub server_id: i64,
    /// Runtime-native identifier; stable across polls even while `id` is absent.
    pub container_id: String,
    pub name: String,
    pub image: String,
    /// Free-form, as reported by the container runtime.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Aggregate monitoring snapshot for one server, assembled by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerWithHealth {
    pub server: Server,
    pub current_health: ServerHealth,
    pub containers: Vec<Container>,
}

/// Payload for `POST /containers/get-container-data`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContainerDataRequest {
    pub server_id: i64,
}

/// Backend-defined summary returned by the collect-all sweep.
///
/// The backend does not commit to a schema here; callers wanting fresh
/// state re-fetch it after the sweep instead of reading this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectAllSummary {
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}
