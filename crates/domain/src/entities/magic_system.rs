//! MagicSystem entity - How the supernatural works in a world

use serde::{Deserialize, Serialize};

use crate::ids::{MagicSystemId, WorldId};

/// A system of magic within a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicSystem {
    pub id: MagicSystemId,
    /// Id of the world that owns this system (lookup only, set by the store)
    pub parent_world_id: WorldId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Where the power comes from
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub practitioners: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MagicSystem {
    pub fn new(parent_world_id: WorldId, name: impl Into<String>) -> Self {
        Self {
            id: MagicSystemId::generate(),
            parent_world_id,
            name: name.into(),
            description: String::new(),
            source: String::new(),
            rules: Vec::new(),
            limitations: Vec::new(),
            practitioners: Vec::new(),
            tags: Vec::new(),
        }
    }
}
