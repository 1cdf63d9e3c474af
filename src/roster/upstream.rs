//! Roster proxied from an upstream JSON endpoint.

use std::time::Duration;

use client::net::types::Member;

use super::{MemberSource, RosterError};
use crate::config::UpstreamTimeouts;

pub struct UpstreamSource {
    http: reqwest::Client,
    url: String,
}

impl UpstreamSource {
    /// # Errors
    ///
    /// Returns [`RosterError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(url: String, timeouts: UpstreamTimeouts) -> Result<Self, RosterError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RosterError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

fn check_upstream_status(status: u16) -> Result<(), RosterError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(RosterError::UpstreamStatus { status }) }
}

#[async_trait::async_trait]
impl MemberSource for UpstreamSource {
    async fn list_members(&self) -> Result<Vec<Member>, RosterError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| RosterError::UpstreamRequest(e.to_string()))?;
        check_upstream_status(response.status().as_u16())?;

        let text = response
            .text()
            .await
            .map_err(|e| RosterError::UpstreamRequest(e.to_string()))?;
        let members: Vec<Member> = serde_json::from_str(&text).map_err(|e| RosterError::Parse(e.to_string()))?;
        tracing::debug!(url = %self.url, count = members.len(), "upstream roster loaded");
        Ok(members)
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
