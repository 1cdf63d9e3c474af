//! Wire DTOs for the `/api/member` resource.
//!
//! DESIGN
//! ======
//! The server serves these records and the page deserializes them, so both
//! sides share this one definition. Field names follow the JSON payload
//! (`profileImageURL`, `linkedInURL`, `githubURL`) rather than Rust casing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Member identifier as sent by the backend: either a string or a number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single team member record.
///
/// Immutable once fetched; the page only reads and groups these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MemberId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-text role. Missing or `null` becomes the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(rename = "profileImageURL", default, deserialize_with = "null_as_empty")]
    pub profile_image_url: String,
    #[serde(rename = "linkedInURL", default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(rename = "githubURL", default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl Member {
    /// Stable list key: the backend id when present and non-empty, else
    /// `{name}-{index}`.
    #[must_use]
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(MemberId::Text(text)) if text.is_empty() => format!("{}-{index}", self.name),
            Some(id) => id.to_string(),
            None => format!("{}-{index}", self.name),
        }
    }

    /// LinkedIn profile link, if one is set to a non-blank value.
    #[must_use]
    pub fn linkedin_link(&self) -> Option<&str> {
        present_url(self.linkedin_url.as_deref())
    }

    /// GitHub profile link, if one is set to a non-blank value.
    #[must_use]
    pub fn github_link(&self) -> Option<&str> {
        present_url(self.github_url.as_deref())
    }
}

fn present_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
