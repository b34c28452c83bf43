//! PlotArc entity - A storyline with its ordered scenes and timeline

use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, PlotArcId, SceneId};

/// Authoring state of a plot arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArcStatus {
    #[default]
    Planned,
    Drafting,
    Complete,
    #[serde(other)]
    Unknown,
}

/// Authoring state of a single scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneStatus {
    #[default]
    Outlined,
    Drafted,
    Revised,
    Final,
    #[serde(other)]
    Unknown,
}

/// Where an arc sits within the chapter sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ArcTimeline {
    pub start_chapter: u32,
    pub end_chapter: u32,
}

impl ArcTimeline {
    /// Number of chapters the arc spans; zero when the range is empty
    /// or inverted.
    pub fn duration_chapters(&self) -> u32 {
        if self.end_chapter < self.start_chapter {
            0
        } else {
            self.end_chapter - self.start_chapter + 1
        }
    }
}

/// One beat of an arc
///
/// `characters` holds lookup-only references into the owning version's
/// cast; a scene keeps its references even if a character is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: SceneId,
    pub title: String,
    #[serde(default)]
    pub chapter_number: u32,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub status: SceneStatus,
    #[serde(default)]
    pub characters: Vec<CharacterId>,
    #[serde(default)]
    pub plot_points: Vec<String>,
}

impl Scene {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SceneId::generate(),
            title: title.into(),
            chapter_number: 0,
            word_count: 0,
            status: SceneStatus::Outlined,
            characters: Vec::new(),
            plot_points: Vec::new(),
        }
    }
}

/// A storyline threaded through one version of a book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotArc {
    pub id: PlotArcId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ArcStatus,
    /// Ordered beats of the arc, insertion order preserved
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub timeline: ArcTimeline,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PlotArc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlotArcId::generate(),
            name: name.into(),
            description: String::new(),
            status: ArcStatus::Planned,
            scenes: Vec::new(),
            timeline: ArcTimeline::default(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_spans_inclusive_range() {
        let timeline = ArcTimeline {
            start_chapter: 3,
            end_chapter: 7,
        };
        assert_eq!(timeline.duration_chapters(), 5);
    }

    #[test]
    fn duration_of_single_chapter_is_one() {
        let timeline = ArcTimeline {
            start_chapter: 4,
            end_chapter: 4,
        };
        assert_eq!(timeline.duration_chapters(), 1);
    }

    #[test]
    fn inverted_range_has_zero_duration() {
        let timeline = ArcTimeline {
            start_chapter: 9,
            end_chapter: 2,
        };
        assert_eq!(timeline.duration_chapters(), 0);
    }
}
