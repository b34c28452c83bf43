//! Typed create/update payloads for every store operation
//!
//! Update payloads contain only optional fields; a field left `None` is
//! untouched by the merge. Ids and parent back-references have no field
//! here at all, so "updates never move or re-key an entity" holds at
//! compile time rather than by runtime convention.

mod book;
mod narrative;
mod worldbuilding;

pub use book::{CreateBookData, CreateVersionData, UpdateBookData, UpdateVersionData};
pub use narrative::{
    CreateChapterData, CreateCharacterData, CreatePlotArcData, CreateSceneData, UpdateChapterData,
    UpdateCharacterData, UpdatePlotArcData, UpdateSceneData,
};
pub use worldbuilding::{
    CreateLocationData, CreateLoreData, CreateMagicSystemData, CreateWorldData,
    CreateWorldObjectData, UpdateLocationData, UpdateLoreData, UpdateMagicSystemData,
    UpdateWorldData, UpdateWorldObjectData,
};
