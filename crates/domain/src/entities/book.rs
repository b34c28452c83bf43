//! Book entity - The top-level authored work

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Version;
use crate::ids::BookId;

/// A single authored work, holding every drafted version of its content
///
/// The book itself carries only descriptive metadata; all narrative
/// entities (characters, plot arcs, chapters, worlds) are owned by its
/// versions. The character list the authoring UI shows on a book card is
/// a derived read over the newest version, never a stored copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Free-form genre label for shelving and filtering
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub last_modified: DateTime<Utc>,
    /// Drafts of this book, oldest first
    #[serde(default)]
    pub versions: Vec<Version>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::generate(),
            title: title.into(),
            author: author.into(),
            genre: None,
            synopsis: String::new(),
            tags: Vec::new(),
            created_at: now,
            last_modified: now,
            versions: Vec::new(),
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }
}
