//! Application-wide constants for the fleetmon client.

use std::time::Duration;

/// HTTP client request timeout for API calls.
///
/// Applies to every individual request to the backend. Ten seconds covers
/// all endpoints comfortably; the collect-all sweep runs server-side and
/// answers with a summary rather than waiting for the fleet.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend URL used when neither the config file nor the environment
/// provides one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
