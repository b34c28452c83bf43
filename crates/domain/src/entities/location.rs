//! Location entity - Physical or conceptual places within a world

use serde::{Deserialize, Serialize};

use crate::ids::{LocationId, WorldId};

/// Terrain and climate attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Geography {
    pub terrain: String,
    pub climate: String,
    pub notable_features: Vec<String>,
}

/// Social attributes of the people of a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Culture {
    pub customs: Vec<String>,
    pub languages: Vec<String>,
    pub religions: Vec<String>,
}

/// Power-structure attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Politics {
    pub government: String,
    pub ruler: String,
    pub factions: Vec<String>,
}

/// Trade and wealth attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Economy {
    pub industries: Vec<String>,
    pub trade_goods: Vec<String>,
    pub currency: String,
}

/// A place within a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    /// Id of the world that owns this location (lookup only, set by the store)
    pub parent_world_id: WorldId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub geography: Geography,
    #[serde(default)]
    pub culture: Culture,
    #[serde(default)]
    pub politics: Politics,
    #[serde(default)]
    pub economy: Economy,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Location {
    pub fn new(parent_world_id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id: LocationId::generate(),
            parent_world_id,
            name: name.into(),
            description: String::new(),
            geography: Geography::default(),
            culture: Culture::default(),
            politics: Politics::default(),
            economy: Economy::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
