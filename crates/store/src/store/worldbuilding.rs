//! World operations and the four world-child collections
//!
//! Children (locations, objects, lore, magic systems) resolve through
//! `(book_id, version_id, world_id)`. The store stamps each child's
//! `parent_world_id` from the resolved path at creation; patches carry no
//! such field.

use chrono::Utc;
use tracing::debug;

use fablecraft_domain::{
    BookId, DomainError, Location, LocationId, Lore, LoreId, MagicSystem, MagicSystemId, Name,
    Title, VersionId, World, WorldId, WorldObject, WorldObjectId,
};

use crate::patch::{
    CreateLocationData, CreateLoreData, CreateMagicSystemData, CreateWorldData,
    CreateWorldObjectData, UpdateLocationData, UpdateLoreData, UpdateMagicSystemData,
    UpdateWorldData, UpdateWorldObjectData,
};

use super::BookStore;

impl BookStore {
    // ------------------------------------------------------------------
    // Worlds
    // ------------------------------------------------------------------

    pub fn worlds(&self, book_id: &BookId, version_id: &VersionId) -> Option<&[World]> {
        Some(self.version(book_id, version_id)?.worlds.as_slice())
    }

    pub fn world(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&World> {
        self.version(book_id, version_id)?
            .worlds
            .iter()
            .find(|w| &w.id == world_id)
    }

    pub fn create_world(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        data: CreateWorldData,
    ) -> Result<World, DomainError> {
        let name = Name::new(data.name)?;
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let mut world = World::new(name);
        if let Some(description) = data.description {
            world = world.with_description(description);
        }
        if let Some(maps) = data.maps {
            world.maps = maps;
        }
        if let Some(themes) = data.themes {
            world.themes = themes;
        }
        if let Some(history) = data.history {
            world.history = history;
        }
        if let Some(tags) = data.tags {
            world.tags = tags;
        }
        version.worlds.push(world.clone());
        debug!(world_id = %world.id, version_id = %version_id, "created world");
        Ok(world)
    }

    pub fn update_world(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        data: UpdateWorldData,
    ) -> Result<World, DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        data.apply(world)?;
        let updated = world.clone();
        debug!(world_id = %world_id, "updated world");
        Ok(updated)
    }

    /// Delete a world and everything it owns.
    ///
    /// Children die with the world. Id references held elsewhere (a lore
    /// entry in another world naming one of this world's locations, a
    /// scene cast, an object owner) are NOT scrubbed; the store is
    /// orphan-reference-tolerant by policy.
    pub fn delete_world(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Result<(), DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        let before = version.worlds.len();
        version.worlds.retain(|w| &w.id != world_id);
        if version.worlds.len() == before {
            return Err(DomainError::not_found("World", world_id.as_str()));
        }
        debug!(world_id = %world_id, "deleted world");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    pub fn locations(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&[Location]> {
        Some(self.world(book_id, version_id, world_id)?.locations.as_slice())
    }

    pub fn location(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        location_id: &LocationId,
    ) -> Option<&Location> {
        self.world(book_id, version_id, world_id)?
            .locations
            .iter()
            .find(|l| &l.id == location_id)
    }

    pub fn create_location(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        data: CreateLocationData,
    ) -> Result<Location, DomainError> {
        let name = Name::new(data.name)?;
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let mut location = Location::new(world.id.clone(), name);
        if let Some(description) = data.description {
            location = location.with_description(description);
        }
        if let Some(geography) = data.geography {
            location.geography = geography;
        }
        if let Some(culture) = data.culture {
            location.culture = culture;
        }
        if let Some(politics) = data.politics {
            location.politics = politics;
        }
        if let Some(economy) = data.economy {
            location.economy = economy;
        }
        if let Some(tags) = data.tags {
            location.tags = tags;
        }
        world.locations.push(location.clone());
        debug!(location_id = %location.id, world_id = %world_id, "created location");
        Ok(location)
    }

    pub fn update_location(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        location_id: &LocationId,
        data: UpdateLocationData,
    ) -> Result<Location, DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let location = world
            .locations
            .iter_mut()
            .find(|l| &l.id == location_id)
            .ok_or_else(|| DomainError::not_found("Location", location_id.as_str()))?;
        data.apply(location)?;
        let updated = location.clone();
        debug!(location_id = %location_id, "updated location");
        Ok(updated)
    }

    /// Delete a location.
    ///
    /// Lore entries that reference the location keep their reference.
    pub fn delete_location(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        location_id: &LocationId,
    ) -> Result<(), DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let before = world.locations.len();
        world.locations.retain(|l| &l.id != location_id);
        if world.locations.len() == before {
            return Err(DomainError::not_found("Location", location_id.as_str()));
        }
        debug!(location_id = %location_id, "deleted location");
        Ok(())
    }

    // ------------------------------------------------------------------
    // World objects
    // ------------------------------------------------------------------

    pub fn world_objects(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&[WorldObject]> {
        Some(self.world(book_id, version_id, world_id)?.objects.as_slice())
    }

    pub fn world_object(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        object_id: &WorldObjectId,
    ) -> Option<&WorldObject> {
        self.world(book_id, version_id, world_id)?
            .objects
            .iter()
            .find(|o| &o.id == object_id)
    }

    pub fn create_world_object(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        data: CreateWorldObjectData,
    ) -> Result<WorldObject, DomainError> {
        let name = Name::new(data.name)?;
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let mut object = WorldObject::new(world.id.clone(), name);
        if let Some(description) = data.description {
            object.description = description;
        }
        if let Some(origin) = data.origin {
            object.origin = origin;
        }
        if let Some(properties) = data.properties {
            object.properties = properties;
        }
        if let Some(significance) = data.significance {
            object.significance = significance;
        }
        if let Some(current_owner) = data.current_owner {
            object.current_owner = Some(current_owner);
        }
        if let Some(tags) = data.tags {
            object.tags = tags;
        }
        world.objects.push(object.clone());
        debug!(object_id = %object.id, world_id = %world_id, "created world object");
        Ok(object)
    }

    pub fn update_world_object(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        object_id: &WorldObjectId,
        data: UpdateWorldObjectData,
    ) -> Result<WorldObject, DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let object = world
            .objects
            .iter_mut()
            .find(|o| &o.id == object_id)
            .ok_or_else(|| DomainError::not_found("WorldObject", object_id.as_str()))?;
        data.apply(object)?;
        let updated = object.clone();
        debug!(object_id = %object_id, "updated world object");
        Ok(updated)
    }

    pub fn delete_world_object(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        object_id: &WorldObjectId,
    ) -> Result<(), DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let before = world.objects.len();
        world.objects.retain(|o| &o.id != object_id);
        if world.objects.len() == before {
            return Err(DomainError::not_found("WorldObject", object_id.as_str()));
        }
        debug!(object_id = %object_id, "deleted world object");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lore
    // ------------------------------------------------------------------

    pub fn lore_entries(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&[Lore]> {
        Some(self.world(book_id, version_id, world_id)?.lore.as_slice())
    }

    pub fn lore_entry(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        lore_id: &LoreId,
    ) -> Option<&Lore> {
        self.world(book_id, version_id, world_id)?
            .lore
            .iter()
            .find(|l| &l.id == lore_id)
    }

    pub fn create_lore(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        data: CreateLoreData,
    ) -> Result<Lore, DomainError> {
        let title = Title::new(data.title)?;
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let mut lore = Lore::new(world.id.clone(), title);
        if let Some(summary) = data.summary {
            lore = lore.with_summary(summary);
        }
        if let Some(category) = data.category {
            lore = lore.with_category(category);
        }
        if let Some(body) = data.body {
            lore.body = body;
        }
        if let Some(locations_involved) = data.locations_involved {
            lore.locations_involved = locations_involved;
        }
        if let Some(characters_involved) = data.characters_involved {
            lore.characters_involved = characters_involved;
        }
        if let Some(tags) = data.tags {
            lore.tags = tags;
        }
        world.lore.push(lore.clone());
        debug!(lore_id = %lore.id, world_id = %world_id, "created lore entry");
        Ok(lore)
    }

    pub fn update_lore(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        lore_id: &LoreId,
        data: UpdateLoreData,
    ) -> Result<Lore, DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let lore = world
            .lore
            .iter_mut()
            .find(|l| &l.id == lore_id)
            .ok_or_else(|| DomainError::not_found("Lore", lore_id.as_str()))?;
        data.apply(lore)?;
        lore.updated_at = Utc::now();
        let updated = lore.clone();
        debug!(lore_id = %lore_id, "updated lore entry");
        Ok(updated)
    }

    pub fn delete_lore(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        lore_id: &LoreId,
    ) -> Result<(), DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let before = world.lore.len();
        world.lore.retain(|l| &l.id != lore_id);
        if world.lore.len() == before {
            return Err(DomainError::not_found("Lore", lore_id.as_str()));
        }
        debug!(lore_id = %lore_id, "deleted lore entry");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Magic systems
    // ------------------------------------------------------------------

    pub fn magic_systems(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&[MagicSystem]> {
        Some(
            self.world(book_id, version_id, world_id)?
                .magic_systems
                .as_slice(),
        )
    }

    pub fn magic_system(
        &self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        system_id: &MagicSystemId,
    ) -> Option<&MagicSystem> {
        self.world(book_id, version_id, world_id)?
            .magic_systems
            .iter()
            .find(|m| &m.id == system_id)
    }

    pub fn create_magic_system(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        data: CreateMagicSystemData,
    ) -> Result<MagicSystem, DomainError> {
        let name = Name::new(data.name)?;
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let mut system = MagicSystem::new(world.id.clone(), name);
        if let Some(description) = data.description {
            system.description = description;
        }
        if let Some(source) = data.source {
            system.source = source;
        }
        if let Some(rules) = data.rules {
            system.rules = rules;
        }
        if let Some(limitations) = data.limitations {
            system.limitations = limitations;
        }
        if let Some(practitioners) = data.practitioners {
            system.practitioners = practitioners;
        }
        if let Some(tags) = data.tags {
            system.tags = tags;
        }
        world.magic_systems.push(system.clone());
        debug!(system_id = %system.id, world_id = %world_id, "created magic system");
        Ok(system)
    }

    pub fn update_magic_system(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        system_id: &MagicSystemId,
        data: UpdateMagicSystemData,
    ) -> Result<MagicSystem, DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let system = world
            .magic_systems
            .iter_mut()
            .find(|m| &m.id == system_id)
            .ok_or_else(|| DomainError::not_found("MagicSystem", system_id.as_str()))?;
        data.apply(system)?;
        let updated = system.clone();
        debug!(system_id = %system_id, "updated magic system");
        Ok(updated)
    }

    pub fn delete_magic_system(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
        system_id: &MagicSystemId,
    ) -> Result<(), DomainError> {
        let world = self
            .world_mut(book_id, version_id, world_id)
            .ok_or_else(|| DomainError::not_found("World", world_id.as_str()))?;
        let before = world.magic_systems.len();
        world.magic_systems.retain(|m| &m.id != system_id);
        if world.magic_systems.len() == before {
            return Err(DomainError::not_found("MagicSystem", system_id.as_str()));
        }
        debug!(system_id = %system_id, "deleted magic system");
        Ok(())
    }
}
