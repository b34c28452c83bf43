//! Lore entity - World knowledge entries
//!
//! Lore entries may name locations and characters they involve. Those are
//! lookup-only references: deleting the referent does not scrub the
//! reference, so a lore entry can outlive the places it mentions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, LocationId, LoreId, WorldId};

/// Category of knowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoreCategory {
    /// Past events (wars, treaties, disasters)
    Historical,
    /// Myths, legends, folklore
    Legend,
    /// Hidden knowledge (conspiracies, true origins)
    Secret,
    /// Widely known information
    #[default]
    Common,
    /// Religious beliefs, prophecies
    Religious,
    /// Unknown category (for forward compatibility)
    #[serde(other)]
    Unknown,
}

/// A piece of world knowledge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lore {
    pub id: LoreId,
    /// Id of the world that owns this entry (lookup only, set by the store)
    pub parent_world_id: WorldId,

    /// Title of the lore entry (e.g., "The Fall of House Valeren")
    pub title: String,
    /// Brief summary for quick reference
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: LoreCategory,
    /// The full lore text
    #[serde(default)]
    pub body: String,

    /// Locations this entry involves (references, never ownership)
    #[serde(default)]
    pub locations_involved: Vec<LocationId>,
    /// Characters this entry involves (references, never ownership)
    #[serde(default)]
    pub characters_involved: Vec<CharacterId>,

    /// Tags for filtering/searching
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Lore {
    pub fn new(parent_world_id: WorldId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: LoreId::generate(),
            parent_world_id,
            title: title.into(),
            summary: String::new(),
            category: LoreCategory::Common,
            body: String::new(),
            locations_involved: Vec::new(),
            characters_involved: Vec::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_category(mut self, category: LoreCategory) -> Self {
        self.category = category;
        self
    }
}
