//! World entity - A setting container for places, objects, lore, and magic
//!
//! Worlds own their children by value. Every child carries a
//! `parent_world_id` back-reference equal to the owning world's id; the
//! store sets it at creation and callers cannot override it.

use serde::{Deserialize, Serialize};

use crate::entities::{Location, Lore, MagicSystem, WorldObject};
use crate::ids::WorldId;

/// An entry in a world's historical record
///
/// Embedded value, not independently addressable: the history list is
/// edited by whole-list replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub event: String,
    #[serde(default)]
    pub event_note: String,
    /// In-world date, free-form ("Third Age 412", "spring of the long thaw")
    #[serde(default)]
    pub date: String,
}

/// A setting container within one version of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub id: WorldId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub objects: Vec<WorldObject>,
    #[serde(default)]
    pub lore: Vec<Lore>,
    #[serde(default)]
    pub magic_systems: Vec<MagicSystem>,
    /// Paths or references to map assets
    #[serde(default)]
    pub maps: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub history: Vec<HistoryEvent>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: WorldId::generate(),
            name: name.into(),
            description: String::new(),
            locations: Vec::new(),
            objects: Vec::new(),
            lore: Vec::new(),
            magic_systems: Vec::new(),
            maps: Vec::new(),
            themes: Vec::new(),
            history: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
