//! REST helper for reading the team roster.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`, cancellable through
//! a browser `AbortController`.
//! Server-side (SSR): a stub returning an error, since the page only loads
//! members once hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to the message the page displays. A non-2xx
//! status always becomes [`FETCH_MEMBERS_FAILED`]; transport and parse errors
//! keep their own text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Member;

/// Path of the members resource.
pub const MEMBERS_ENDPOINT: &str = "/api/member";

/// Message shown for any non-success HTTP status.
pub const FETCH_MEMBERS_FAILED: &str = "Failed to fetch members";

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), String> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FETCH_MEMBERS_FAILED.to_owned())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_members(body: &str) -> Result<Vec<Member>, String> {
    serde_json::from_str::<Vec<Member>>(body).map_err(|e| e.to_string())
}

/// Cancellation handle for an in-flight members request.
///
/// In the browser this owns an `AbortController`; elsewhere it is inert.
#[derive(Clone)]
pub struct FetchAbort {
    #[cfg(feature = "hydrate")]
    controller: Option<web_sys::AbortController>,
}

impl FetchAbort {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            controller: web_sys::AbortController::new().ok(),
        }
    }

    /// Abort the request this handle was passed to. Safe to call repeatedly.
    pub fn abort(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(controller) = self.controller.as_ref() {
                controller.abort();
            }
        }
    }
}

impl Default for FetchAbort {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch all members from `GET /api/member`.
///
/// # Errors
///
/// Returns [`FETCH_MEMBERS_FAILED`] on a non-2xx status, or the underlying
/// transport/parse error message otherwise.
pub async fn fetch_members(abort: &FetchAbort) -> Result<Vec<Member>, String> {
    #[cfg(feature = "hydrate")]
    {
        let signal = abort.controller.as_ref().map(web_sys::AbortController::signal);
        let resp = gloo_net::http::Request::get(MEMBERS_ENDPOINT)
            .abort_signal(signal.as_ref())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_members(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = abort;
        Err("not available on server".to_owned())
    }
}
