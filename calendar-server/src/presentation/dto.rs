use serde::{Deserialize, Serialize};

use crate::domain::content::{
    ContentFilter, ContentItem, ContentPatch, ContentType, NewContent, Status,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
    pub content_type: ContentType,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<CreateContentRequest> for NewContent {
    fn from(req: CreateContentRequest) -> Self {
        NewContent {
            title: req.title,
            description: req.description,
            status: req.status,
            content_type: req.content_type,
            url: req.url,
        }
    }
}

/// Absent fields keep their stored values; `"url": null` clears the url.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub content_type: Option<ContentType>,
    #[serde(default, deserialize_with = "double_option")]
    pub url: Option<Option<String>>,
}

impl From<UpdateContentRequest> for ContentPatch {
    fn from(req: UpdateContentRequest) -> Self {
        ContentPatch {
            title: req.title,
            description: req.description,
            status: req.status,
            content_type: req.content_type,
            url: req.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListContentQuery {
    pub status: Option<Status>,
    #[serde(rename = "type")]
    pub content_type: Option<ContentType>,
}

impl From<ListContentQuery> for ContentFilter {
    fn from(query: ListContentQuery) -> Self {
        ContentFilter {
            status: query.status,
            content_type: query.content_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListContentResponse {
    pub content: Vec<ContentItem>,
    pub total: usize,
}

// Distinguishes a missing "url" key from an explicit null.
fn double_option<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}
