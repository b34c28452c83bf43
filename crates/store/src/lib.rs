//! In-memory repository for the book/version/entity graph
//!
//! All consumers funnel reads and writes through [`BookStore`], so at
//! most one in-memory copy of truth exists at any time. The store is
//! synchronous and single-threaded: lookups borrow, mutations take
//! `&mut self` and return owned clones, and a missing path is an
//! ordinary `None`/`NotFound`, never a panic.

pub mod patch;
pub mod seed;
pub mod store;

pub use seed::SeedError;
pub use store::BookStore;

pub use patch::{
    CreateBookData, CreateChapterData, CreateCharacterData, CreateLocationData, CreateLoreData,
    CreateMagicSystemData, CreatePlotArcData, CreateSceneData, CreateVersionData, CreateWorldData,
    CreateWorldObjectData, UpdateBookData, UpdateChapterData, UpdateCharacterData,
    UpdateLocationData, UpdateLoreData, UpdateMagicSystemData, UpdatePlotArcData, UpdateSceneData,
    UpdateVersionData, UpdateWorldData, UpdateWorldObjectData,
};
