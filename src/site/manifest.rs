//! Guide manifest (`index.json`).
//!
//! The site's guide listing page reads this file to render one card per
//! guide, greyed out when the guide is still "coming soon".

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::error::SiteError;
use super::policy::GuideStatus;

/// Local ISO-8601 timestamp with microseconds and no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format a timestamp the way the manifest stores it.
pub fn format_timestamp(time: DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Timestamp for a file modification time.
pub fn format_system_time(time: SystemTime) -> String {
    format_timestamp(DateTime::<Local>::from(time))
}

/// One guide in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideEntry {
    pub title: String,
    pub description: String,
    /// Output file name, e.g. `getting_started.html`.
    pub filename: String,
    /// Output path relative to the site root, `/`-separated.
    pub path: String,
    pub last_modified: String,
    pub slug: String,
    pub disabled: bool,
    pub status: GuideStatus,
}

/// The whole manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideIndex {
    pub generated_at: String,
    pub total_guides: usize,
    pub guides: Vec<GuideEntry>,
}

impl GuideIndex {
    /// Build a manifest, sorting guides by path.
    pub fn new(mut guides: Vec<GuideEntry>, generated_at: DateTime<Local>) -> Self {
        guides.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            generated_at: format_timestamp(generated_at),
            total_guides: guides.len(),
            guides,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, SiteError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Io` if the directory or file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), SiteError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
        }
        fs::write(path, self.to_json()?).map_err(SiteError::io(path))
    }
}
