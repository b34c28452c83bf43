//! Chapter entity - Prose content of a Version

use serde::{Deserialize, Serialize};

use crate::ids::ChapterId;

/// Editorial state of a chapter's prose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChapterStatus {
    Outline,
    #[default]
    Draft,
    Revised,
    Final,
    #[serde(other)]
    Unknown,
}

/// A chapter of prose within a draft
///
/// `number` is the reader-facing position; list order on the version is
/// authoritative for iteration and is never re-sorted by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub number: u32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub status: ChapterStatus,
}

impl Chapter {
    pub fn new(number: u32, title: impl Into<String>) -> Self {
        Self {
            id: ChapterId::generate(),
            number,
            title: title.into(),
            summary: String::new(),
            content: String::new(),
            word_count: 0,
            status: ChapterStatus::Draft,
        }
    }

    /// Recompute the cached word count from the prose content.
    pub fn recount_words(&mut self) {
        self.word_count = count_words(&self.content);
    }
}

/// Whitespace-separated word count used for chapter and scene bookkeeping.
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_words_splits_on_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("The  rain\nheld off\tuntil dusk."), 6);
    }

    #[test]
    fn recount_words_updates_cached_count() {
        let mut chapter = Chapter::new(1, "Landfall");
        chapter.content = "Three words here".to_string();
        chapter.recount_words();
        assert_eq!(chapter.word_count, 3);
    }
}
