//! Roster loaded from a local YAML or JSON file.

use std::path::{Path, PathBuf};

use client::net::types::Member;

use super::{MemberSource, RosterError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Yaml,
}

impl RosterFormat {
    /// `.json` files are JSON; anything else is treated as YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a roster body in the given format.
///
/// # Errors
///
/// Returns [`RosterError::Parse`] if the body is not a list of members.
pub fn parse_roster(text: &str, format: RosterFormat) -> Result<Vec<Member>, RosterError> {
    match format {
        RosterFormat::Json => serde_json::from_str(text).map_err(|e| RosterError::Parse(e.to_string())),
        RosterFormat::Yaml => serde_yaml::from_str(text).map_err(|e| RosterError::Parse(e.to_string())),
    }
}

pub struct FileSource {
    path: PathBuf,
    format: RosterFormat,
}

impl FileSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let format = RosterFormat::from_path(&path);
        Self { path, format }
    }
}

#[async_trait::async_trait]
impl MemberSource for FileSource {
    async fn list_members(&self) -> Result<Vec<Member>, RosterError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| RosterError::Read { path: self.path.display().to_string(), source })?;
        let members = parse_roster(&text, self.format)?;
        tracing::debug!(path = %self.path.display(), count = members.len(), "roster file loaded");
        Ok(members)
    }
}

#[cfg(test)]
#[path = "file_test.rs"]
mod tests;
