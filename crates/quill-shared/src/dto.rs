//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of POST /api/posts and PUT /api/posts/{id}.
///
/// Fields arrive largely untyped, matching the editor client: everything is
/// optional at the wire level and validated behind the handler. `status`
/// defaults to draft when omitted; blank media URLs are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

/// Confirmation body for create/update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationResponse {
    /// Present on create so callers can fetch what they just wrote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub message: String,
}

impl ConfirmationResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
        }
    }

    pub fn created(id: i32, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_tolerates_sparse_bodies() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("Hello"));
        assert!(payload.content.is_none());
        assert!(payload.status.is_none());
    }

    #[test]
    fn confirmation_omits_id_unless_set() {
        let body = serde_json::to_value(ConfirmationResponse::new("Post deleted")).unwrap();
        assert!(body.get("id").is_none());

        let body = serde_json::to_value(ConfirmationResponse::created(5, "Post created")).unwrap();
        assert_eq!(body["id"], 5);
    }
}
