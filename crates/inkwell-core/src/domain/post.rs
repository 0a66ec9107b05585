use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Timestamps are kept at microsecond precision, which is what SQL backends store.
const TIMESTAMP_PRECISION: u16 = 6;

/// Author name, stored as separate parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorName {
    pub first_name: String,
    pub last_name: String,
}

impl AuthorName {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The name as shown to API clients: `"<first> <last>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating a post. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub author: AuthorName,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Reject payloads with a blank author part, title or content.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("author.firstName", &self.author.first_name),
            ("author.lastName", &self.author.last_name),
            ("title", &self.title),
            ("content", &self.content),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(DomainError::Validation(format!(
                "Missing `{}` in request body",
                name
            ))),
            None => Ok(()),
        }
    }
}

/// BlogPost entity.
///
/// `id`, `author` and `created` are write-once; only `title` and `content`
/// change after creation, through [`PostChanges`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: AuthorName,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a post from a creation payload, assigning a fresh id and
    /// defaulting `created` to now.
    pub fn new(payload: NewBlogPost) -> Self {
        let created = payload.created.unwrap_or_else(Utc::now);
        Self {
            id: Uuid::new_v4(),
            author: payload.author,
            title: payload.title,
            content: payload.content,
            created: created.trunc_subsecs(TIMESTAMP_PRECISION),
        }
    }

    /// Apply an update; fields left `None` are kept.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }
}

/// Fields of a post that may be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    /// Reject supplied fields that are blank. Omitted fields are fine.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [("title", &self.title), ("content", &self.content)];
        match fields
            .iter()
            .find(|(_, value)| value.as_deref().is_some_and(|v| v.trim().is_empty()))
        {
            Some((name, _)) => Err(DomainError::Validation(format!(
                "Blank `{}` in request body",
                name
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn payload() -> NewBlogPost {
        NewBlogPost {
            author: AuthorName::new("Ada", "Lovelace"),
            title: "Notes".to_string(),
            content: "On the analytical engine.".to_string(),
            created: None,
        }
    }

    #[test]
    fn test_display_name_joins_with_single_space() {
        let author = AuthorName::new("Grace", "Hopper");
        assert_eq!(author.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = BlogPost::new(payload());
        let b = BlogPost::new(payload());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_new_keeps_supplied_created() {
        let created = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();
        let post = BlogPost::new(NewBlogPost {
            created: Some(created),
            ..payload()
        });
        assert_eq!(post.created, created);
    }

    #[test]
    fn test_new_defaults_created_to_now() {
        let before = Utc::now() - Duration::seconds(1);
        let post = BlogPost::new(payload());
        assert!(post.created >= before);
        assert!(post.created <= Utc::now());
    }

    #[test]
    fn test_created_truncated_to_micros() {
        let created = Utc.timestamp_nanos(1_600_000_000_123_456_789);
        let post = BlogPost::new(NewBlogPost {
            created: Some(created),
            ..payload()
        });
        assert_eq!(post.created.timestamp_subsec_nanos(), 123_456_000);
    }

    #[test]
    fn test_apply_updates_only_supplied_fields() {
        let mut post = BlogPost::new(payload());
        let original = post.clone();

        post.apply(PostChanges {
            title: Some("Revised".to_string()),
            content: None,
        });

        assert_eq!(post.title, "Revised");
        assert_eq!(post.content, original.content);
        assert_eq!(post.id, original.id);
        assert_eq!(post.author, original.author);
        assert_eq!(post.created, original.created);
    }

    #[test]
    fn test_apply_empty_changes_is_noop() {
        let mut post = BlogPost::new(payload());
        let original = post.clone();
        post.apply(PostChanges::default());
        assert_eq!(post, original);
    }

    #[test]
    fn test_changes_validate_allows_omitted_fields() {
        assert!(PostChanges::default().validate().is_ok());
        let changes = PostChanges {
            title: None,
            content: Some("New body.".to_string()),
        };
        assert!(changes.validate().is_ok());
    }

    #[test]
    fn test_changes_validate_rejects_blank_fields() {
        let changes = PostChanges {
            title: Some("   ".to_string()),
            content: Some(String::new()),
        };
        let err = changes.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("`title`")));

        let changes = PostChanges {
            title: Some("Fine".to_string()),
            content: Some("\n".to_string()),
        };
        let err = changes.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("`content`")));
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn test_validate_names_first_blank_field() {
        let mut p = payload();
        p.author.last_name = "  ".to_string();
        p.title = String::new();

        let err = p.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref msg) if msg.contains("author.lastName")));
    }

    #[test]
    fn test_author_serializes_camel_case() {
        let json = serde_json::to_value(AuthorName::new("Alan", "Turing")).unwrap();
        assert_eq!(json["firstName"], "Alan");
        assert_eq!(json["lastName"], "Turing");
    }
}
