//! HTTP client for the public stats API.

use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::snapshot::StatsSnapshot;
use crate::{STATS_API_BASE, USERNAME};

/// Timeout applied to the single stats request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the statistics endpoint. One request per card lifetime,
/// no retry.
pub struct StatsClient {
    base_url: String,
    user_agent: String,
}

impl StatsClient {
    /// Client targeting the fixed public endpoint.
    pub fn new() -> Self {
        Self::with_base_url(STATS_API_BASE)
    }

    /// Point the client at a different server. Used by tests; the shipped
    /// binary always targets [`STATS_API_BASE`].
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: format!("leetcard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Fetch the current snapshot for [`USERNAME`].
    ///
    /// A non-success status maps to [`FetchError::Status`] and any partial
    /// body is discarded. Connect errors, timeouts, and bodies that fail to
    /// decode map to [`FetchError::Transport`].
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, FetchError> {
        let url = format!("{}/{}", self.base_url, USERNAME);
        debug!(%url, "fetching stats");

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let snapshot: StatsSnapshot = response.json().await?;
        debug!(solved = snapshot.solved(), "snapshot received");
        Ok(snapshot)
    }
}

impl Default for StatsClient {
    fn default() -> Self {
        Self::new()
    }
}
