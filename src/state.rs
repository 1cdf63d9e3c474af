//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only holds the roster source; nothing in it is mutated after startup.

use std::sync::Arc;

use crate::roster::MemberSource;

/// Clone is required by Axum; the source is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberSource>,
}

impl AppState {
    #[must_use]
    pub fn new(members: Arc<dyn MemberSource>) -> Self {
        Self { members }
    }
}
