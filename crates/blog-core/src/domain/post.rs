use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used in every API response: `"{first_name} {last_name}"`.
    ///
    /// The join is lossy when a name part itself contains a space; the wire
    /// format keeps it anyway for compatibility with existing clients.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a single blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated id and the current timestamp.
    ///
    /// Rejects blank title, content, or author name parts.
    pub fn create(author: Author, title: String, content: String) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be blank".into()));
        }
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be blank".into()));
        }
        if author.first_name.trim().is_empty() || author.last_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "author.firstName and author.lastName must not be blank".into(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            author,
            title,
            content,
            created: Utc::now(),
        })
    }

    /// Override the creation date (seeding with past dates).
    pub fn created_at(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_id_and_timestamp() {
        let post = Post::create(
            Author::new("Ada", "Lovelace"),
            "Notes".to_string(),
            "On the analytical engine.".to_string(),
        )
        .unwrap();

        assert!(!post.id.is_nil());
        assert_eq!(post.author.display_name(), "Ada Lovelace");
    }

    #[test]
    fn create_rejects_blank_fields() {
        assert!(Post::create(Author::new("Ada", "Lovelace"), "".into(), "x".into()).is_err());
        assert!(Post::create(Author::new("Ada", "Lovelace"), "x".into(), "  ".into()).is_err());
        assert!(Post::create(Author::new("", "Lovelace"), "x".into(), "x".into()).is_err());
    }
}
