use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::error::CalendarClientError;
use crate::model::{ContentItem, ContentType, Status};

/// Async client for the calendar server's JSON API.
#[derive(Clone)]
pub struct CalendarClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ListContentResponse {
    content: Vec<ContentItem>,
}

impl CalendarClient {
    pub fn connect(endpoint: &str) -> Result<Self, CalendarClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Client::builder().build()?,
            base_url,
        })
    }

    pub async fn create_content(
        &self,
        title: String,
        description: String,
        status: Status,
        content_type: ContentType,
        url: Option<String>,
    ) -> Result<ContentItem, CalendarClientError> {
        let resp = self
            .client
            .post(format!("{}/api/content", self.base_url))
            .json(&json!({
                "title": title,
                "description": description,
                "status": status,
                "contentType": content_type,
                "url": url,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(CalendarClientError::from_http_response(resp).await)
        }
    }

    pub async fn get_content(&self, id: i64) -> Result<ContentItem, CalendarClientError> {
        let resp = self
            .client
            .get(format!("{}/api/content/{}", self.base_url, id))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(CalendarClientError::from_http_response(resp).await)
        }
    }

    pub async fn list_content(
        &self,
        status: Option<Status>,
        content_type: Option<ContentType>,
    ) -> Result<Vec<ContentItem>, CalendarClientError> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }
        if let Some(content_type) = content_type {
            query.push(("type", content_type.to_string()));
        }

        let resp = self
            .client
            .get(format!("{}/api/content", self.base_url))
            .query(&query)
            .send()
            .await?;

        if resp.status().is_success() {
            let list: ListContentResponse = resp.json().await?;
            Ok(list.content)
        } else {
            Err(CalendarClientError::from_http_response(resp).await)
        }
    }

    pub async fn update_content(
        &self,
        id: i64,
        title: Option<String>,
        description: Option<String>,
        status: Option<Status>,
        content_type: Option<ContentType>,
        url: Option<String>,
    ) -> Result<ContentItem, CalendarClientError> {
        // Only provided fields go on the wire; absent keys keep stored values.
        let mut body = Map::new();
        if let Some(title) = title {
            body.insert("title".into(), Value::String(title));
        }
        if let Some(description) = description {
            body.insert("description".into(), Value::String(description));
        }
        if let Some(status) = status {
            body.insert("status".into(), json!(status));
        }
        if let Some(content_type) = content_type {
            body.insert("contentType".into(), json!(content_type));
        }
        if let Some(url) = url {
            body.insert("url".into(), Value::String(url));
        }

        let resp = self
            .client
            .put(format!("{}/api/content/{}", self.base_url, id))
            .json(&Value::Object(body))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(CalendarClientError::from_http_response(resp).await)
        }
    }

    pub async fn delete_content(&self, id: i64) -> Result<(), CalendarClientError> {
        let resp = self
            .client
            .delete(format!("{}/api/content/{}", self.base_url, id))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(CalendarClientError::from_http_response(resp).await)
        }
    }
}
