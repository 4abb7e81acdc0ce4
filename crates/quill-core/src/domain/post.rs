use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Posts are keyed by an auto-incremented integer, never reused.
pub type PostId = i32;

/// Visibility state of a post. Drafts are excluded from the public listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            other => Err(DomainError::Validation(format!(
                "invalid status '{other}', expected 'draft' or 'published'"
            ))),
        }
    }
}

/// Post entity - a single blog post as stored and served.
///
/// Media URLs are `None` whenever the stored value is blank; they are
/// omitted from the JSON encoding entirely so consumers never see an
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub tags: Option<String>,
    pub status: PostStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write payload for create and update: the six mandatory columns plus the
/// optional media pair.
///
/// `image_url`/`video_url` carry `None` when the caller supplied nothing or
/// a blank value. On create that leaves the column at its NULL default; on
/// update it leaves any existing value untouched. Timestamps are assigned
/// by storage and have no place here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub tags: Option<String>,
    pub status: PostStatus,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl NewPost {
    /// Validate the mandatory fields. Title and content must be non-empty
    /// after trimming; status is already typed so nothing else can be wrong.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        Ok(())
    }
}

/// Normalize an optional media URL: blank or whitespace-only input becomes
/// `None`, so "absent" and "blank" are indistinguishable downstream.
pub fn normalize_media(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values() {
        assert_eq!("draft".parse::<PostStatus>().unwrap(), PostStatus::Draft);
        assert_eq!(
            "published".parse::<PostStatus>().unwrap(),
            PostStatus::Published
        );
    }

    #[test]
    fn status_rejects_unknown_values() {
        assert!("archived".parse::<PostStatus>().is_err());
        assert!("Published".parse::<PostStatus>().is_err());
        assert!("".parse::<PostStatus>().is_err());
    }

    #[test]
    fn status_defaults_to_draft() {
        assert_eq!(PostStatus::default(), PostStatus::Draft);
    }

    #[test]
    fn normalize_media_drops_blank_values() {
        assert_eq!(normalize_media(None), None);
        assert_eq!(normalize_media(Some("".into())), None);
        assert_eq!(normalize_media(Some("   ".into())), None);
        assert_eq!(
            normalize_media(Some("https://cdn.example/a.png".into())),
            Some("https://cdn.example/a.png".to_string())
        );
    }

    #[test]
    fn validate_requires_title_and_content() {
        let draft = NewPost {
            title: "Hello".into(),
            content: "<p>Hi</p>".into(),
            meta_title: None,
            meta_description: None,
            tags: None,
            status: PostStatus::Draft,
            image_url: None,
            video_url: None,
        };
        assert!(draft.validate().is_ok());

        let mut missing_title = draft.clone();
        missing_title.title = "  ".into();
        assert!(missing_title.validate().is_err());

        let mut missing_content = draft;
        missing_content.content = "".into();
        assert!(missing_content.validate().is_err());
    }

    #[test]
    fn media_urls_are_omitted_from_json_when_absent() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "<p>Hi</p>".into(),
            meta_title: None,
            meta_description: None,
            tags: None,
            status: PostStatus::Draft,
            image_url: None,
            video_url: Some("https://cdn.example/v.mp4".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("image_url").is_none());
        assert_eq!(json["video_url"], "https://cdn.example/v.mp4");
        // The non-media optionals stay present as explicit nulls.
        assert!(json["meta_title"].is_null());
        assert_eq!(json["status"], "draft");
    }
}
