//! Create/update payloads for chapters, characters, plot arcs, and scenes

use serde::{Deserialize, Serialize};

use fablecraft_domain::{
    Appearance, ArcStatus, ArcTimeline, Chapter, ChapterStatus, Character, CharacterArc,
    CharacterId, CharacterRole, DomainError, Name, Personality, PlotArc, Relationship, Scene,
    SceneStatus, Title,
};

/// Data for creating a chapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChapterData {
    pub title: String,
    /// Reader-facing chapter number; defaults to the next free position
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    /// Cached word count; computed from `content` when not supplied
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub status: Option<ChapterStatus>,
}

/// Data for updating a chapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChapterData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub status: Option<ChapterStatus>,
}

impl UpdateChapterData {
    /// Shallow-merge the present fields over `chapter`.
    ///
    /// Updating `content` recounts the cached word count unless an
    /// explicit `word_count` accompanies it in the same patch.
    pub fn apply(self, chapter: &mut Chapter) -> Result<(), DomainError> {
        let title = self.title.map(Title::new).transpose()?;
        if let Some(title) = title {
            chapter.title = title.into();
        }
        if let Some(number) = self.number {
            chapter.number = number;
        }
        if let Some(summary) = self.summary {
            chapter.summary = summary;
        }
        if let Some(content) = self.content {
            chapter.content = content;
            chapter.recount_words();
        }
        if let Some(word_count) = self.word_count {
            chapter.word_count = word_count;
        }
        if let Some(status) = self.status {
            chapter.status = status;
        }
        Ok(())
    }
}

/// Data for creating a character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCharacterData {
    pub name: String,
    #[serde(default)]
    pub role: Option<CharacterRole>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub appearance: Option<Appearance>,
    #[serde(default)]
    pub personality: Option<Personality>,
    #[serde(default)]
    pub arc: Option<CharacterArc>,
    #[serde(default)]
    pub relationships: Option<Vec<Relationship>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a character
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCharacterData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<CharacterRole>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub appearance: Option<Appearance>,
    #[serde(default)]
    pub personality: Option<Personality>,
    #[serde(default)]
    pub arc: Option<CharacterArc>,
    #[serde(default)]
    pub relationships: Option<Vec<Relationship>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateCharacterData {
    /// Shallow-merge the present fields over `character`. The id is not
    /// reachable from a patch.
    pub fn apply(self, character: &mut Character) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            character.name = name.into();
        }
        if let Some(role) = self.role {
            character.role = role;
        }
        if let Some(age) = self.age {
            character.age = Some(age);
        }
        if let Some(gender) = self.gender {
            character.gender = Some(gender);
        }
        if let Some(occupation) = self.occupation {
            character.occupation = Some(occupation);
        }
        if let Some(backstory) = self.backstory {
            character.backstory = backstory;
        }
        if let Some(appearance) = self.appearance {
            character.appearance = appearance;
        }
        if let Some(personality) = self.personality {
            character.personality = personality;
        }
        if let Some(arc) = self.arc {
            character.arc = arc;
        }
        if let Some(relationships) = self.relationships {
            character.relationships = relationships;
        }
        if let Some(tags) = self.tags {
            character.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a plot arc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlotArcData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ArcStatus>,
    #[serde(default)]
    pub timeline: Option<ArcTimeline>,
    /// Initial beats; each receives a fresh scene id
    #[serde(default)]
    pub scenes: Option<Vec<CreateSceneData>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a plot arc
///
/// Scenes are edited through the scene operations, not through an arc
/// patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlotArcData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ArcStatus>,
    #[serde(default)]
    pub timeline: Option<ArcTimeline>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdatePlotArcData {
    /// Shallow-merge the present fields over `arc`.
    pub fn apply(self, arc: &mut PlotArc) -> Result<(), DomainError> {
        let name = self.name.map(Name::new).transpose()?;
        if let Some(name) = name {
            arc.name = name.into();
        }
        if let Some(description) = self.description {
            arc.description = description;
        }
        if let Some(status) = self.status {
            arc.status = status;
        }
        if let Some(timeline) = self.timeline {
            arc.timeline = timeline;
        }
        if let Some(tags) = self.tags {
            arc.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSceneData {
    pub title: String,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub status: Option<SceneStatus>,
    #[serde(default)]
    pub characters: Option<Vec<CharacterId>>,
    #[serde(default)]
    pub plot_points: Option<Vec<String>>,
}

impl CreateSceneData {
    /// Build a scene with a fresh id from this payload.
    pub(crate) fn into_scene(self) -> Result<Scene, DomainError> {
        let title = Title::new(self.title)?;
        let mut scene = Scene::new(title);
        if let Some(chapter_number) = self.chapter_number {
            scene.chapter_number = chapter_number;
        }
        if let Some(word_count) = self.word_count {
            scene.word_count = word_count;
        }
        if let Some(status) = self.status {
            scene.status = status;
        }
        if let Some(characters) = self.characters {
            scene.characters = characters;
        }
        if let Some(plot_points) = self.plot_points {
            scene.plot_points = plot_points;
        }
        Ok(scene)
    }
}

/// Data for updating a scene
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSceneData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chapter_number: Option<u32>,
    #[serde(default)]
    pub word_count: Option<u32>,
    #[serde(default)]
    pub status: Option<SceneStatus>,
    #[serde(default)]
    pub characters: Option<Vec<CharacterId>>,
    #[serde(default)]
    pub plot_points: Option<Vec<String>>,
}

impl UpdateSceneData {
    /// Shallow-merge the present fields over `scene`.
    pub fn apply(self, scene: &mut Scene) -> Result<(), DomainError> {
        let title = self.title.map(Title::new).transpose()?;
        if let Some(title) = title {
            scene.title = title.into();
        }
        if let Some(chapter_number) = self.chapter_number {
            scene.chapter_number = chapter_number;
        }
        if let Some(word_count) = self.word_count {
            scene.word_count = word_count;
        }
        if let Some(status) = self.status {
            scene.status = status;
        }
        if let Some(characters) = self.characters {
            scene.characters = characters;
        }
        if let Some(plot_points) = self.plot_points {
            scene.plot_points = plot_points;
        }
        Ok(())
    }
}
