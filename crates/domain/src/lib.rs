pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    count_words, Appearance, ArcStatus, ArcTimeline, Book, Chapter, ChapterStatus, Character,
    CharacterArc, CharacterRole, Culture, Economy, Geography, HistoryEvent, Location, Lore,
    LoreCategory, MagicSystem, Personality, PlotArc, Politics, Relationship, Scene, SceneStatus,
    Version, VersionStatus, World, WorldObject,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{
    BookId, ChapterId, CharacterId, LocationId, LoreId, MagicSystemId, PlotArcId, SceneId,
    VersionId, WorldId, WorldObjectId,
};

// Re-export value objects
pub use value_objects::{Name, Title};
