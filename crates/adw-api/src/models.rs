// File: src/models.rs
// Purpose: JSON shapes exchanged with the blog backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: u64,
    pub full_name: String,
}

/// A category or tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub content: String,
    #[serde(default)]
    pub categories: Vec<Term>,
    #[serde(default)]
    pub tags: Vec<Term>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub user_has_liked: bool,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "post".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub data: Post,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub items: Vec<FeedItem>,
    #[serde(default)]
    pub has_next: bool,
}

impl FeedPage {
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.items.iter().map(|item| &item.data)
    }
}

/// `GET /api/v1/posts/:id` answers with either the bare post or `{ "data": post }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PostEnvelope {
    Wrapped { data: Post },
    Bare(Post),
}

impl From<PostEnvelope> for Post {
    fn from(envelope: PostEnvelope) -> Self {
        match envelope {
            PostEnvelope::Wrapped { data } => data,
            PostEnvelope::Bare(post) => post,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeToggle {
    pub user_has_liked: bool,
    pub new_like_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Author>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_post_defaults() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1, "author": {"id": 2, "full_name": "Ada"}, "created_at": "2024-05-01T10:00:00Z", "content": "hi"}"#,
        )
        .unwrap();
        assert_eq!(post.kind, "post");
        assert_eq!(post.like_count, 0);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_post_envelope_accepts_both_shapes() {
        let body = r#"{"id": 9, "author": {"id": 1, "full_name": "Bo"}, "created_at": "2024-05-01T10:00:00Z", "content": "x"}"#;
        let bare: Post = serde_json::from_str::<PostEnvelope>(body).unwrap().into();
        let wrapped: Post = serde_json::from_str::<PostEnvelope>(&format!(r#"{{"data": {}}}"#, body))
            .unwrap()
            .into();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.id, 9);
    }
}
