//! WorldObject entity - Significant items within a world

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, WorldId, WorldObjectId};

/// A significant object within a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldObject {
    pub id: WorldObjectId,
    /// Id of the world that owns this object (lookup only, set by the store)
    pub parent_world_id: WorldId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub significance: String,
    /// Reference into the version's cast; kept even if the character is deleted
    #[serde(default)]
    pub current_owner: Option<CharacterId>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorldObject {
    pub fn new(parent_world_id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id: WorldObjectId::generate(),
            parent_world_id,
            name: name.into(),
            description: String::new(),
            origin: String::new(),
            properties: Vec::new(),
            significance: String::new(),
            current_owner: None,
            tags: Vec::new(),
        }
    }
}
