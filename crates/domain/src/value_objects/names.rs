//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that human-visible labels are valid by
//! construction:
//! - Non-empty after trimming
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (characters, worlds, locations, ...)
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for title fields (books, versions, chapters, lore)
const MAX_TITLE_LENGTH: usize = 300;

// ============================================================================
// Name
// ============================================================================

/// A validated entity name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.0
    }
}

// ============================================================================
// Title
// ============================================================================

/// A validated title (non-empty, <=300 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Create a new validated title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The title is empty after trimming
    /// - The title exceeds 300 characters after trimming
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Title cannot be empty"));
        }
        if trimmed.len() > MAX_TITLE_LENGTH {
            return Err(DomainError::validation(format!(
                "Title cannot exceed {} characters",
                MAX_TITLE_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Title {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> String {
        title.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = Name::new("Kaelen Voss").unwrap();
            assert_eq!(name.as_str(), "Kaelen Voss");
            assert_eq!(name.to_string(), "Kaelen Voss");
        }

        #[test]
        fn empty_name_rejected() {
            let result = Name::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            let result = Name::new("   ");
            assert!(result.is_err());
            assert!(matches!(result.unwrap_err(), DomainError::Validation(_)));
        }

        #[test]
        fn name_is_trimmed() {
            let name = Name::new("  Mirelle  ").unwrap();
            assert_eq!(name.as_str(), "Mirelle");
        }

        #[test]
        fn too_long_rejected() {
            let long = "a".repeat(201);
            let err = Name::new(long).unwrap_err();
            assert!(err.to_string().contains("200"));
        }

        #[test]
        fn max_length_accepted() {
            let name = Name::new("a".repeat(200)).unwrap();
            assert_eq!(name.as_str().len(), 200);
        }

        #[test]
        fn try_from_string() {
            let name: Name = "Orven".to_string().try_into().unwrap();
            assert_eq!(name.as_str(), "Orven");
        }

        #[test]
        fn into_string() {
            let name = Name::new("Sable").unwrap();
            let s: String = name.into();
            assert_eq!(s, "Sable");
        }
    }

    mod title {
        use super::*;

        #[test]
        fn valid_title() {
            let title = Title::new("The Hollow Crown").unwrap();
            assert_eq!(title.as_str(), "The Hollow Crown");
        }

        #[test]
        fn empty_title_rejected() {
            let err = Title::new("").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn title_is_trimmed() {
            let title = Title::new(" Ashes of the Deep \n").unwrap();
            assert_eq!(title.as_str(), "Ashes of the Deep");
        }

        #[test]
        fn too_long_rejected() {
            let err = Title::new("t".repeat(301)).unwrap_err();
            assert!(err.to_string().contains("300"));
        }

        #[test]
        fn serde_round_trip() {
            let title = Title::new("Winter Accord").unwrap();
            let json = serde_json::to_string(&title).unwrap();
            assert_eq!(json, "\"Winter Accord\"");
            let back: Title = serde_json::from_str(&json).unwrap();
            assert_eq!(back, title);
        }

        #[test]
        fn serde_rejects_empty() {
            let result: Result<Title, _> = serde_json::from_str("\"  \"");
            assert!(result.is_err());
        }
    }
}
