use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle stage of a content item. Any member may replace any other via
/// update; there are no transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Idea,
    Draft,
    Scheduled,
    Published,
}

/// Medium/category of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Article,
    Video,
    SocialPost,
    Newsletter,
}

/// A single tracked piece of content. Immutable per revision: updates replace
/// the whole record, preserving `id` and `date_created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub content_type: ContentType,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
    pub url: Option<String>,
}

/// Fields for a not-yet-stored item. The store assigns `id` and both
/// timestamps on insert.
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub content_type: ContentType,
    pub url: Option<String>,
}

/// Partial update: only the provided fields change. `id` and `date_created`
/// are not patchable.
#[derive(Debug, Clone, Default)]
pub struct ContentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub content_type: Option<ContentType>,
    pub url: Option<Option<String>>,
}

/// Optional list filter; `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFilter {
    pub status: Option<Status>,
    pub content_type: Option<ContentType>,
}

impl ContentFilter {
    pub fn matches(&self, item: &ContentItem) -> bool {
        self.status.is_none_or(|s| s == item.status)
            && self.content_type.is_none_or(|t| t == item.content_type)
    }
}
