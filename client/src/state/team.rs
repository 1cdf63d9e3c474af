//! Team-page load state.
//!
//! DESIGN
//! ======
//! One value with three variants replaces separate loading/error/data flags,
//! so combinations like "loading with an error" cannot be represented.
//! [`reduce`] is the only transition function; `Ready` and `Error` are
//! terminal and absorb any later event.

#[cfg(test)]
#[path = "team_test.rs"]
mod team_test;

use crate::net::types::Member;
use crate::util::categorize::{Category, categorize};

/// Lifecycle of the single members fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TeamState {
    #[default]
    Loading,
    Error {
        message: String,
    },
    Ready {
        members: Vec<Member>,
    },
}

/// Outcome of the members fetch, fed to [`reduce`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamEvent {
    Loaded(Vec<Member>),
    Failed(String),
}

impl From<Result<Vec<Member>, String>> for TeamEvent {
    fn from(result: Result<Vec<Member>, String>) -> Self {
        match result {
            Ok(members) => Self::Loaded(members),
            Err(message) => Self::Failed(message),
        }
    }
}

/// Apply `event` to `state`.
pub fn reduce(state: TeamState, event: TeamEvent) -> TeamState {
    match (state, event) {
        (TeamState::Loading, TeamEvent::Loaded(members)) => TeamState::Ready { members },
        (TeamState::Loading, TeamEvent::Failed(message)) => TeamState::Error { message },
        (terminal, _) => terminal,
    }
}

impl TeamState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Sections to render. Empty unless the fetch succeeded.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        match self {
            Self::Ready { members } => categorize(members),
            Self::Loading | Self::Error { .. } => Vec::new(),
        }
    }
}
