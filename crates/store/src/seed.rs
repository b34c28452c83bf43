//! Seed fixture loading
//!
//! The authoring UI ships a static library of sample books. The store
//! treats that content as an external fixture handed in at startup, not
//! as something it computes: a seed document is just the camelCase JSON
//! serialization of a book list.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use fablecraft_domain::Book;

use crate::store::BookStore;

/// Error loading a seed fixture
#[derive(Debug, Error)]
pub enum SeedError {
    /// The document is not valid JSON for a list of books
    #[error("malformed seed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A seed document: the books the store starts with.
#[derive(Debug, Deserialize)]
struct SeedDocument {
    books: Vec<Book>,
}

impl BookStore {
    /// Build a store from a JSON seed document of shape `{"books": [...]}`.
    ///
    /// Fixture content is trusted as-is; validation applies only to data
    /// arriving through the create/update operations.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let doc: SeedDocument = serde_json::from_str(json)?;
        info!(books = doc.books.len(), "seeded book store");
        Ok(Self::from_books(doc.books))
    }
}

#[cfg(test)]
mod tests {
    use fablecraft_domain::BookId;

    use super::*;

    #[test]
    fn minimal_seed_parses() {
        let store = BookStore::from_json(
            r#"{"books": [{"id": "1", "title": "Seeded", "versions": [{"id": "v1", "name": "Draft"}]}]}"#,
        )
        .unwrap();
        let book = store.book(&BookId::from("1")).unwrap();
        assert_eq!(book.title, "Seeded");
        assert_eq!(book.versions.len(), 1);
        assert_eq!(book.versions[0].id.as_str(), "v1");
        assert!(book.versions[0].characters.is_empty());
    }

    #[test]
    fn malformed_seed_is_a_parse_error() {
        let err = BookStore::from_json("{\"books\": ").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn empty_document_seeds_empty_store() {
        let store = BookStore::from_json(r#"{"books": []}"#).unwrap();
        assert!(store.books().is_empty());
    }
}
