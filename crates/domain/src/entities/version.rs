//! Version entity - One authored draft of a Book
//!
//! A version is the unit of workspace: every nested operation below a
//! book resolves through `(book_id, version_id)`. Versions own their
//! narrative entities by value; nothing is shared between two versions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Chapter, Character, PlotArc, World};
use crate::ids::VersionId;

/// Lifecycle label for a draft
///
/// Plain data: any value may be written at any time, no transition rules
/// are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VersionStatus {
    #[default]
    Draft,
    InReview,
    Final,
    /// Unknown status for forward compatibility
    #[serde(other)]
    Unknown,
}

/// One draft of a book's content and narrative entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: VersionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: VersionStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub plot_arcs: Vec<PlotArc>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    #[serde(default)]
    pub worlds: Vec<World>,
}

impl Version {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: VersionId::generate(),
            name: name.into(),
            status: VersionStatus::Draft,
            created_at: Utc::now(),
            characters: Vec::new(),
            plot_arcs: Vec::new(),
            chapters: Vec::new(),
            worlds: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: VersionStatus) -> Self {
        self.status = status;
        self
    }

    /// Total prose length across all chapters of this draft.
    pub fn word_count(&self) -> u32 {
        self.chapters.iter().map(|c| c.word_count).sum()
    }
}
