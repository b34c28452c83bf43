//! Domain entities for the book/version/entity graph

mod book;
mod chapter;
mod character;
mod location;
mod lore;
mod magic_system;
mod plot_arc;
mod version;
mod world;
mod world_object;

pub use book::Book;
pub use chapter::{count_words, Chapter, ChapterStatus};
pub use character::{
    Appearance, Character, CharacterArc, CharacterRole, Personality, Relationship,
};
pub use location::{Culture, Economy, Geography, Location, Politics};
pub use lore::{Lore, LoreCategory};
pub use magic_system::MagicSystem;
pub use plot_arc::{ArcStatus, ArcTimeline, PlotArc, Scene, SceneStatus};
pub use version::{Version, VersionStatus};
pub use world::{HistoryEvent, World};
pub use world_object::WorldObject;
