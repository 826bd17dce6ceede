use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Idea,
    Draft,
    Scheduled,
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Article,
    Video,
    SocialPost,
    Newsletter,
}

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

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IDEA" => Ok(Status::Idea),
            "DRAFT" => Ok(Status::Draft),
            "SCHEDULED" => Ok(Status::Scheduled),
            "PUBLISHED" => Ok(Status::Published),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ARTICLE" => Ok(ContentType::Article),
            "VIDEO" => Ok(ContentType::Video),
            "SOCIAL_POST" => Ok(ContentType::SocialPost),
            "NEWSLETTER" => Ok(ContentType::Newsletter),
            other => Err(format!("unknown content type: {other}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Idea => "IDEA",
            Status::Draft => "DRAFT",
            Status::Scheduled => "SCHEDULED",
            Status::Published => "PUBLISHED",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Article => "ARTICLE",
            ContentType::Video => "VIDEO",
            ContentType::SocialPost => "SOCIAL_POST",
            ContentType::Newsletter => "NEWSLETTER",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({} / {}) updated {}",
            self.id, self.title, self.status, self.content_type, self.date_updated
        )?;
        if let Some(url) = &self.url {
            write!(f, " -> {url}")?;
        }
        Ok(())
    }
}
