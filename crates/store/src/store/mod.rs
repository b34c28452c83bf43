//! The in-memory book repository
//!
//! Every accessor resolves the same path walk: Book by id from the
//! top-level list, Version by id from `Book.versions`, then the requested
//! collection on the Version (descending once more into a World or a
//! PlotArc for their children), then find by id. Linear scan keeps
//! iteration in insertion order; the graph is small enough that no index
//! is warranted.
//!
//! Lookups return `Option` - a missing path segment is `None`, never a
//! panic. Mutations return `Result` and report a missing path as
//! `DomainError::NotFound`, leaving the store untouched.

mod narrative;
mod worldbuilding;

use chrono::Utc;
use tracing::debug;

use fablecraft_domain::{
    Book, BookId, Character, DomainError, Title, Version, VersionId, VersionStatus, World, WorldId,
};

use crate::patch::{CreateBookData, CreateVersionData, UpdateBookData, UpdateVersionData};

/// Single source of truth for the book/version/entity graph
///
/// Constructed once at process start (usually from a seed fixture, see
/// [`BookStore::from_json`](crate::seed)) and passed by reference to
/// whatever layer needs it; there are no hidden singletons. There is no
/// persistence: dropping the store loses all state. Mutation requires
/// `&mut self`, which is the whole concurrency story for a
/// single-threaded store.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Create a store holding `books` as its initial state.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    // ------------------------------------------------------------------
    // Path resolution
    // ------------------------------------------------------------------

    pub(crate) fn book_mut(&mut self, book_id: &BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| &b.id == book_id)
    }

    pub(crate) fn version_mut(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
    ) -> Option<&mut Version> {
        self.book_mut(book_id)?
            .versions
            .iter_mut()
            .find(|v| &v.id == version_id)
    }

    pub(crate) fn world_mut(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        world_id: &WorldId,
    ) -> Option<&mut World> {
        self.version_mut(book_id, version_id)?
            .worlds
            .iter_mut()
            .find(|w| &w.id == world_id)
    }

    // ------------------------------------------------------------------
    // Books
    // ------------------------------------------------------------------

    /// All books, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn book(&self, book_id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == book_id)
    }

    pub fn create_book(&mut self, data: CreateBookData) -> Result<Book, DomainError> {
        let title = Title::new(data.title)?;
        let mut book = Book::new(title, data.author.unwrap_or_default());
        if let Some(genre) = data.genre {
            book = book.with_genre(genre);
        }
        if let Some(synopsis) = data.synopsis {
            book = book.with_synopsis(synopsis);
        }
        if let Some(tags) = data.tags {
            book.tags = tags;
        }
        debug!(book_id = %book.id, "created book");
        self.books.push(book.clone());
        Ok(book)
    }

    pub fn update_book(
        &mut self,
        book_id: &BookId,
        data: UpdateBookData,
    ) -> Result<Book, DomainError> {
        let book = self
            .book_mut(book_id)
            .ok_or_else(|| DomainError::not_found("Book", book_id.as_str()))?;
        data.apply(book)?;
        book.last_modified = Utc::now();
        let updated = book.clone();
        debug!(book_id = %book_id, "updated book");
        Ok(updated)
    }

    pub fn delete_book(&mut self, book_id: &BookId) -> Result<(), DomainError> {
        let before = self.books.len();
        self.books.retain(|b| &b.id != book_id);
        if self.books.len() == before {
            return Err(DomainError::not_found("Book", book_id.as_str()));
        }
        debug!(book_id = %book_id, "deleted book");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Versions
    // ------------------------------------------------------------------

    pub fn versions(&self, book_id: &BookId) -> Option<&[Version]> {
        Some(self.book(book_id)?.versions.as_slice())
    }

    pub fn version(&self, book_id: &BookId, version_id: &VersionId) -> Option<&Version> {
        self.book(book_id)?
            .versions
            .iter()
            .find(|v| &v.id == version_id)
    }

    pub fn create_version(
        &mut self,
        book_id: &BookId,
        data: CreateVersionData,
    ) -> Result<Version, DomainError> {
        let name = Title::new(data.name)?;
        let book = self
            .book_mut(book_id)
            .ok_or_else(|| DomainError::not_found("Book", book_id.as_str()))?;
        let version = Version::new(name).with_status(data.status.unwrap_or(VersionStatus::Draft));
        book.versions.push(version.clone());
        book.last_modified = Utc::now();
        debug!(book_id = %book_id, version_id = %version.id, "created version");
        Ok(version)
    }

    pub fn update_version(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
        data: UpdateVersionData,
    ) -> Result<Version, DomainError> {
        let version = self
            .version_mut(book_id, version_id)
            .ok_or_else(|| DomainError::not_found("Version", version_id.as_str()))?;
        data.apply(version)?;
        let updated = version.clone();
        debug!(book_id = %book_id, version_id = %version_id, "updated version");
        Ok(updated)
    }

    /// Delete a version and everything it owns.
    ///
    /// Entities owned by the version die with it; nothing else refers to
    /// them across versions, so there is no cleanup to do elsewhere.
    pub fn delete_version(
        &mut self,
        book_id: &BookId,
        version_id: &VersionId,
    ) -> Result<(), DomainError> {
        let book = self
            .book_mut(book_id)
            .ok_or_else(|| DomainError::not_found("Book", book_id.as_str()))?;
        let before = book.versions.len();
        book.versions.retain(|v| &v.id != version_id);
        if book.versions.len() == before {
            return Err(DomainError::not_found("Version", version_id.as_str()));
        }
        book.last_modified = Utc::now();
        debug!(book_id = %book_id, version_id = %version_id, "deleted version");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    /// Characters of the book's most recent version.
    ///
    /// Computed on read rather than stored as a denormalized copy on the
    /// book, so the two views can never disagree. `None` when the book
    /// is missing or has no versions yet.
    pub fn book_characters(&self, book_id: &BookId) -> Option<&[Character]> {
        self.book(book_id)?
            .versions
            .last()
            .map(|v| v.characters.as_slice())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use fablecraft_domain::{BookId, VersionId, WorldId};

    use super::BookStore;
    use crate::patch::{CreateBookData, CreateVersionData, CreateWorldData};

    pub fn book_data(title: &str) -> CreateBookData {
        CreateBookData {
            title: title.into(),
            author: Some("N. Reyes".into()),
            genre: None,
            synopsis: None,
            tags: None,
        }
    }

    pub fn store_with_version() -> (BookStore, BookId, VersionId) {
        let mut store = BookStore::new();
        let book = store.create_book(book_data("The Hollow Crown")).unwrap();
        let version = store
            .create_version(
                &book.id,
                CreateVersionData {
                    name: "First Draft".into(),
                    status: None,
                },
            )
            .unwrap();
        (store, book.id, version.id)
    }

    pub fn store_with_world() -> (BookStore, BookId, VersionId, WorldId) {
        let (mut store, book_id, version_id) = store_with_version();
        let world = store
            .create_world(
                &book_id,
                &version_id,
                CreateWorldData {
                    name: "Vhailor".into(),
                    description: None,
                    maps: None,
                    themes: None,
                    history: None,
                    tags: None,
                },
            )
            .unwrap();
        (store, book_id, version_id, world.id)
    }
}

#[cfg(test)]
mod tests {
    use fablecraft_domain::{BookId, DomainError, VersionId, VersionStatus};

    use super::testing::{book_data, store_with_version};
    use super::BookStore;
    use crate::patch::{
        CreateCharacterData, CreateVersionData, UpdateBookData, UpdateVersionData,
    };

    #[test]
    fn create_book_assigns_fresh_id_and_appends() {
        let mut store = BookStore::new();
        let first = store.create_book(book_data("One")).unwrap();
        let second = store.create_book(book_data("Two")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(store.books().len(), 2);
        assert_eq!(store.books()[0].title, "One");
        assert_eq!(store.books()[1].title, "Two");
    }

    #[test]
    fn create_book_rejects_empty_title() {
        let mut store = BookStore::new();
        let err = store.create_book(book_data("   ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.books().is_empty());
    }

    #[test]
    fn get_after_create_round_trips() {
        let mut store = BookStore::new();
        let book = store.create_book(book_data("Ashes of the Deep")).unwrap();
        assert_eq!(store.book(&book.id), Some(&book));
    }

    #[test]
    fn update_book_merges_only_present_fields() {
        let mut store = BookStore::new();
        let book = store.create_book(book_data("Working Title")).unwrap();
        let updated = store
            .update_book(
                &book.id,
                UpdateBookData {
                    synopsis: Some("A usurper's slow fall.".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, book.id);
        assert_eq!(updated.title, "Working Title");
        assert_eq!(updated.author, book.author);
        assert_eq!(updated.synopsis, "A usurper's slow fall.");
    }

    #[test]
    fn update_missing_book_is_not_found_and_leaves_store_unchanged() {
        let mut store = BookStore::new();
        store.create_book(book_data("Only")).unwrap();
        let before = store.books().to_vec();
        let err = store
            .update_book(
                &BookId::from("no-such-book"),
                UpdateBookData {
                    title: Some("X".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn rejected_update_leaves_book_untouched() {
        let mut store = BookStore::new();
        let book = store.create_book(book_data("Keep Me")).unwrap();
        let err = store
            .update_book(
                &book.id,
                UpdateBookData {
                    title: Some("  ".into()),
                    synopsis: Some("should not land".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        let current = store.book(&book.id).unwrap();
        assert_eq!(current.title, "Keep Me");
        assert_eq!(current.synopsis, book.synopsis);
    }

    #[test]
    fn delete_book_removes_exactly_one() {
        let mut store = BookStore::new();
        let a = store.create_book(book_data("A")).unwrap();
        let b = store.create_book(book_data("B")).unwrap();
        let c = store.create_book(book_data("C")).unwrap();
        store.delete_book(&b.id).unwrap();
        let remaining: Vec<_> = store.books().iter().map(|x| x.id.clone()).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
    }

    #[test]
    fn missing_path_lookups_return_none() {
        let store = BookStore::new();
        assert!(store.book(&BookId::from("no-such-book")).is_none());
        assert!(store
            .version(&BookId::from("no-such-book"), &VersionId::from("v?"))
            .is_none());
        assert!(store
            .versions(&BookId::from("no-such-book"))
            .is_none());
    }

    #[test]
    fn version_crud_within_book() {
        let (mut store, book_id, version_id) = store_with_version();
        assert_eq!(store.versions(&book_id).unwrap().len(), 1);

        let updated = store
            .update_version(
                &book_id,
                &version_id,
                UpdateVersionData {
                    status: Some(VersionStatus::InReview),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.status, VersionStatus::InReview);
        assert_eq!(updated.name, "First Draft");

        store.delete_version(&book_id, &version_id).unwrap();
        assert!(store.versions(&book_id).unwrap().is_empty());
    }

    #[test]
    fn create_version_on_missing_book_is_not_found() {
        let mut store = BookStore::new();
        let err = store
            .create_version(
                &BookId::from("ghost"),
                CreateVersionData {
                    name: "Draft".into(),
                    status: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(store.books().is_empty());
    }

    #[test]
    fn book_characters_reads_latest_version() {
        let (mut store, book_id, _) = store_with_version();
        let second = store
            .create_version(
                &book_id,
                CreateVersionData {
                    name: "Second Draft".into(),
                    status: None,
                },
            )
            .unwrap();
        store
            .create_character(
                &book_id,
                &second.id,
                CreateCharacterData {
                    name: "Mirelle".into(),
                    role: None,
                    age: None,
                    gender: None,
                    occupation: None,
                    backstory: None,
                    appearance: None,
                    personality: None,
                    arc: None,
                    relationships: None,
                    tags: None,
                },
            )
            .unwrap();
        let cast = store.book_characters(&book_id).unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0].name, "Mirelle");
    }

    #[test]
    fn book_characters_is_none_without_versions() {
        let mut store = BookStore::new();
        let book = store.create_book(book_data("Empty Shelf")).unwrap();
        assert!(store.book_characters(&book.id).is_none());
    }
}
