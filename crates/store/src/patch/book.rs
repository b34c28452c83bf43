//! Create/update payloads for books and versions

use serde::{Deserialize, Serialize};

use fablecraft_domain::{Book, DomainError, Title, Version, VersionStatus};

/// Data for creating a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookData {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Data for updating a book
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBookData {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl UpdateBookData {
    /// Shallow-merge the present fields over `book`.
    ///
    /// The id, timestamps, and versions list are not reachable from a
    /// patch. Validation runs before any field is written, so a rejected
    /// patch leaves the book untouched.
    pub fn apply(self, book: &mut Book) -> Result<(), DomainError> {
        let title = self.title.map(Title::new).transpose()?;
        if let Some(title) = title {
            book.title = title.into();
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(genre) = self.genre {
            book.genre = Some(genre);
        }
        if let Some(synopsis) = self.synopsis {
            book.synopsis = synopsis;
        }
        if let Some(tags) = self.tags {
            book.tags = tags;
        }
        Ok(())
    }
}

/// Data for creating a version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVersionData {
    pub name: String,
    #[serde(default)]
    pub status: Option<VersionStatus>,
}

/// Data for updating a version
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVersionData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<VersionStatus>,
}

impl UpdateVersionData {
    /// Shallow-merge the present fields over `version`. Any status label
    /// may be written; no transition rules exist.
    pub fn apply(self, version: &mut Version) -> Result<(), DomainError> {
        let name = self.name.map(Title::new).transpose()?;
        if let Some(name) = name {
            version.name = name.into();
        }
        if let Some(status) = self.status {
            version.status = status;
        }
        Ok(())
    }
}
