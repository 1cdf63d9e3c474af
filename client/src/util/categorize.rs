//! Role-keyword classifier that groups members into team sections.
//!
//! DESIGN
//! ======
//! Roles are free text, so grouping is a case-insensitive substring match
//! checked in a fixed precedence: alumni, leadership, coordinator,
//! executives, then volunteers as the catch-all. The first match wins, so a
//! role naming several keywords lands in exactly one section. That order is
//! part of the page's contract and must not be reshuffled.
//!
//! Output is recomputed from the full member list on every render; nothing
//! here is cached.

#[cfg(test)]
#[path = "categorize_test.rs"]
mod categorize_test;

use crate::net::types::Member;

/// The five fixed team sections, declared in display priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    Alumni,
    Leadership,
    Coordinator,
    Executives,
    Volunteers,
}

impl CategoryKey {
    /// All keys, ascending by priority.
    pub const ALL: [Self; 5] = [Self::Alumni, Self::Leadership, Self::Coordinator, Self::Executives, Self::Volunteers];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alumni => "alumni",
            Self::Leadership => "leadership",
            Self::Coordinator => "coordinator",
            Self::Executives => "executives",
            Self::Volunteers => "volunteers",
        }
    }

    /// Section heading shown above the member grid.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Alumni => "Alumni",
            Self::Leadership => "Leadership Team",
            Self::Coordinator => "Club Coordinators",
            Self::Executives => "Executives",
            Self::Volunteers => "Volunteers",
        }
    }

    /// Sort rank, 1 (first) through 5 (last).
    #[must_use]
    pub fn priority(self) -> u8 {
        match self {
            Self::Alumni => 1,
            Self::Leadership => 2,
            Self::Coordinator => 3,
            Self::Executives => 4,
            Self::Volunteers => 5,
        }
    }
}

/// A non-empty group of members sharing a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryKey,
    pub title: &'static str,
    pub priority: u8,
    /// Members in their original fetch order.
    pub members: Vec<Member>,
}

/// Decide which section a role belongs to.
pub fn classify_role(role: &str) -> CategoryKey {
    let role = role.to_lowercase();
    if role.contains("alumni") {
        CategoryKey::Alumni
    } else if role.contains("secretary") || role.contains("convener") {
        CategoryKey::Leadership
    } else if role.contains("coordinator") {
        CategoryKey::Coordinator
    } else if role.contains("executive") {
        CategoryKey::Executives
    } else {
        CategoryKey::Volunteers
    }
}

/// Group `members` into sections, dropping empty ones, ordered by priority.
pub fn categorize(members: &[Member]) -> Vec<Category> {
    let mut buckets: [Vec<Member>; 5] = Default::default();
    for member in members {
        let key = classify_role(&member.role);
        buckets[bucket_index(key)].push(member.clone());
    }

    let mut categories: Vec<Category> = CategoryKey::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, members)| !members.is_empty())
        .map(|(key, members)| Category { key, title: key.title(), priority: key.priority(), members })
        .collect();
    categories.sort_by_key(|c| c.priority);
    categories
}

fn bucket_index(key: CategoryKey) -> usize {
    usize::from(key.priority() - 1)
}
