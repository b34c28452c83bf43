//! Create/update payloads for worlds and their children
//!
//! None of these carry `parent_world_id`: back-references are set by the
//! store from the resolved path, so a caller cannot supply or change one.

use serde::{Deserialize, Serialize};

use fablecraft_domain::{
    CharacterId, Culture, DomainError, Economy, Geography, HistoryEvent, Location, LocationId,
    Lore, LoreCategory, MagicSystem, Name, Politics, Title, World, WorldObject,
};

/// Data for creating a world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorldData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub maps: Option<Vec<String>>,
    #[serde(default)]
    pub themes: Option<Vec<String>>,
    #[serde(default)]
    pub history: Option<Vec<HistoryEvent>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a world
///
/// `history` replaces the whole list; history events are embedded values
/// with no ids of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorldData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub maps: Option<Vec<String>>,
    #[serde(default)]
    pub themes: Option<Vec<String>>,
    #[serde(default)]
    pub history: Option<Vec<HistoryEvent>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateWorldData {
    /// Shallow-merge the present fields over `world`. Child collections
    /// are not reachable from a patch.
    pub fn apply(self, world: &mut World) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            world.name = name.into();
        }
        if let Some(description) = self.description {
            world.description = description;
        }
        if let Some(maps) = self.maps {
            world.maps = maps;
        }
        if let Some(themes) = self.themes {
            world.themes = themes;
        }
        if let Some(history) = self.history {
            world.history = history;
        }
        if let Some(tags) = self.tags {
            world.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocationData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub geography: Option<Geography>,
    #[serde(default)]
    pub culture: Option<Culture>,
    #[serde(default)]
    pub politics: Option<Politics>,
    #[serde(default)]
    pub economy: Option<Economy>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocationData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub geography: Option<Geography>,
    #[serde(default)]
    pub culture: Option<Culture>,
    #[serde(default)]
    pub politics: Option<Politics>,
    #[serde(default)]
    pub economy: Option<Economy>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateLocationData {
    /// Shallow-merge the present fields over `location`. Sub-records
    /// (geography, culture, politics, economy) replace wholesale.
    pub fn apply(self, location: &mut Location) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            location.name = name.into();
        }
        if let Some(description) = self.description {
            location.description = description;
        }
        if let Some(geography) = self.geography {
            location.geography = geography;
        }
        if let Some(culture) = self.culture {
            location.culture = culture;
        }
        if let Some(politics) = self.politics {
            location.politics = politics;
        }
        if let Some(economy) = self.economy {
            location.economy = economy;
        }
        if let Some(tags) = self.tags {
            location.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a world object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorldObjectData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub properties: Option<Vec<String>>,
    #[serde(default)]
    pub significance: Option<String>,
    #[serde(default)]
    pub current_owner: Option<CharacterId>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a world object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateWorldObjectData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub properties: Option<Vec<String>>,
    #[serde(default)]
    pub significance: Option<String>,
    #[serde(default)]
    pub current_owner: Option<CharacterId>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateWorldObjectData {
    /// Shallow-merge the present fields over `object`.
    pub fn apply(self, object: &mut WorldObject) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            object.name = name.into();
        }
        if let Some(description) = self.description {
            object.description = description;
        }
        if let Some(origin) = self.origin {
            object.origin = origin;
        }
        if let Some(properties) = self.properties {
            object.properties = properties;
        }
        if let Some(significance) = self.significance {
            object.significance = significance;
        }
        if let Some(current_owner) = self.current_owner {
            object.current_owner = Some(current_owner);
        }
        if let Some(tags) = self.tags {
            object.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a lore entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoreData {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<LoreCategory>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub locations_involved: Option<Vec<LocationId>>,
    #[serde(default)]
    pub characters_involved: Option<Vec<CharacterId>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a lore entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLoreData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub category: Option<LoreCategory>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub locations_involved: Option<Vec<LocationId>>,
    #[serde(default)]
    pub characters_involved: Option<Vec<CharacterId>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateLoreData {
    /// Shallow-merge the present fields over `lore`. The store stamps
    /// `updated_at` after a successful merge.
    pub fn apply(self, lore: &mut Lore) -> Result<(), DomainError> {
        let title = self.title.map(Title::new).transpose()?;
        if let Some(title) = title {
            lore.title = title.into();
        }
        if let Some(summary) = self.summary {
            lore.summary = summary;
        }
        if let Some(category) = self.category {
            lore.category = category;
        }
        if let Some(body) = self.body {
            lore.body = body;
        }
        if let Some(locations_involved) = self.locations_involved {
            lore.locations_involved = locations_involved;
        }
        if let Some(characters_involved) = self.characters_involved {
            lore.characters_involved = characters_involved;
        }
        if let Some(tags) = self.tags {
            lore.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a magic system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMagicSystemData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    #[serde(default)]
    pub limitations: Option<Vec<String>>,
    #[serde(default)]
    pub practitioners: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a magic system
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMagicSystemData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub rules: Option<Vec<String>>,
    #[serde(default)]
    pub limitations: Option<Vec<String>>,
    #[serde(default)]
    pub practitioners: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateMagicSystemData {
    /// Shallow-merge the present fields over `magic_system`.
    pub fn apply(self, magic_system: &mut MagicSystem) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            magic_system.name = name.into();
        }
        if let Some(description) = self.description {
            magic_system.description = description;
        }
        if let Some(source) = self.source {
            magic_system.source = source;
        }
        if let Some(rules) = self.rules {
            magic_system.rules = rules;
        }
        if let Some(limitations) = self.limitations {
            magic_system.limitations = limitations;
        }
        if let Some(practitioners) = self.practitioners {
            magic_system.practitioners = practitioners;
        }
        if let Some(tags) = self.tags {
            magic_system.tags = tags;
        }
        Ok(())
    }
}
