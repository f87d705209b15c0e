use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse an id taken from a request path.
    ///
    /// Anything that is not a plain integer is rejected instead of being
    /// treated as an id that matches nothing.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidId(raw.to_string()))
    }

    /// The id following the highest one in `posts`, or 1 for an empty collection.
    ///
    /// `None` when the highest id is already `i64::MAX`.
    pub fn next_after(posts: &[Post]) -> Option<Self> {
        match posts.iter().map(|p| p.id.0).max() {
            Some(max) => max.checked_add(1).map(Self),
            None => Some(Self(1)),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post entity - a generated blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Generated article text, not the caller's original notes.
    pub content: String,
    pub author: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
}

/// A post that passed every creation stage but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            title,
            content,
            author,
            // Stored dates carry millisecond precision.
            date: Utc::now().trunc_subsecs(3),
        }
    }

    /// Attach the id assigned by the store.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            date: self.date,
        }
    }
}

/// Caller input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    /// Notes used as a prompt ingredient only.
    pub content: String,
}

impl PostDraft {
    /// Both fields must be present and non-empty.
    pub fn validate(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        match (title, content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok(Self { title, content })
            }
            _ => Err(DomainError::Validation(
                "Title and content are required".to_string(),
            )),
        }
    }
}

/// ISO-8601 with milliseconds, e.g. `2024-05-01T10:20:30.123Z`.
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
