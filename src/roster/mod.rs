//! Roster sources backing `GET /api/member`.
//!
//! DESIGN
//! ======
//! `MemberSource` is the seam between the HTTP route and wherever member
//! records live. A local file and an upstream HTTP endpoint are supported;
//! tests substitute in-memory mocks. Sources are read on every request, so
//! edits to the roster show up without a restart.

pub mod file;
pub mod upstream;

use std::sync::Arc;

use client::net::types::Member;

use crate::config::RosterConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading the roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("roster read failed: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The roster body was not a valid member list.
    #[error("roster parse failed: {0}")]
    Parse(String),

    /// The upstream request failed before a response arrived.
    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    /// The upstream endpoint returned a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    UpstreamStatus { status: u16 },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl RosterError {
    /// Whether the failure happened talking to an upstream service.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamRequest(_) | Self::UpstreamStatus { .. })
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Provider of the current member list. Enables mocking in tests.
#[async_trait::async_trait]
pub trait MemberSource: Send + Sync {
    /// Load every member, in roster order.
    ///
    /// # Errors
    ///
    /// Returns a [`RosterError`] if the roster cannot be read or parsed.
    async fn list_members(&self) -> Result<Vec<Member>, RosterError>;
}

/// Build the configured source.
///
/// # Errors
///
/// Returns an error if the upstream HTTP client cannot be built.
pub fn source_from_config(config: &RosterConfig) -> Result<Arc<dyn MemberSource>, RosterError> {
    Ok(match config {
        RosterConfig::File { path } => Arc::new(file::FileSource::new(path.clone())),
        RosterConfig::Upstream { url, timeouts } => Arc::new(upstream::UpstreamSource::new(url.clone(), *timeouts)?),
    })
}
