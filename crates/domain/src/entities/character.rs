//! Character entity - Cast members with sheets of narrative attributes

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Narrative function of a character within the story
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterRole {
    Protagonist,
    Antagonist,
    #[default]
    Supporting,
    Minor,
    #[serde(other)]
    Unknown,
}

/// Physical description attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Appearance {
    pub height: String,
    pub build: String,
    pub hair: String,
    pub eyes: String,
    pub distinguishing_features: Vec<String>,
}

/// Temperament and inner-life attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Personality {
    pub traits: Vec<String>,
    pub strengths: Vec<String>,
    pub flaws: Vec<String>,
    pub fears: Vec<String>,
    pub motivations: Vec<String>,
}

/// Planned development of the character across the story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterArc {
    pub goal: String,
    pub internal_conflict: String,
    pub transformation: String,
}

/// A relationship to another cast member
///
/// `character_id` is a lookup-only reference; relationships to characters
/// that were later deleted keep their entry (the name still reads well in
/// a sheet even when the referent is gone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(default)]
    pub character_id: Option<CharacterId>,
    pub name: String,
    /// Free-form kind: "sister", "rival", "mentor", ...
    pub relation: String,
    #[serde(default)]
    pub notes: String,
}

/// A character within one version of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub role: CharacterRole,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub appearance: Appearance,
    #[serde(default)]
    pub personality: Personality,
    #[serde(default)]
    pub arc: CharacterArc,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::generate(),
            name: name.into(),
            role: CharacterRole::Supporting,
            age: None,
            gender: None,
            occupation: None,
            backstory: String::new(),
            appearance: Appearance::default(),
            personality: Personality::default(),
            arc: CharacterArc::default(),
            relationships: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: CharacterRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = backstory.into();
        self
    }
}
