use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::domain::content::{ContentFilter, ContentItem, ContentPatch, NewContent};
use crate::domain::error::DomainError;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create(&self, new: NewContent) -> Result<ContentItem, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, DomainError>;
    async fn list(&self, filter: ContentFilter) -> Result<Vec<ContentItem>, DomainError>;
    async fn update(&self, id: i64, patch: ContentPatch)
    -> Result<Option<ContentItem>, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

/// Authoritative in-memory store. One mutex guards both the map and the id
/// counter, so every operation commits atomically. The counter only grows:
/// ids of deleted items are never handed out again.
pub struct InMemoryContentRepository {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    items: BTreeMap<i64, ContentItem>,
    next_id: i64,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                items: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, StoreInner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Storage("content store lock poisoned".into()))
    }
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn create(&self, new: NewContent) -> Result<ContentItem, DomainError> {
        let mut store = self.lock()?;
        let id = store.next_id;
        store.next_id += 1;

        let now = Utc::now();
        let item = ContentItem {
            id,
            title: new.title,
            description: new.description,
            status: new.status,
            content_type: new.content_type,
            date_created: now,
            date_updated: now,
            url: new.url,
        };
        store.items.insert(id, item.clone());

        info!(content_id = id, "content created");
        Ok(item)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, DomainError> {
        let store = self.lock()?;
        Ok(store.items.get(&id).cloned())
    }

    async fn list(&self, filter: ContentFilter) -> Result<Vec<ContentItem>, DomainError> {
        let store = self.lock()?;
        // BTreeMap iteration gives ascending id order.
        Ok(store
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        patch: ContentPatch,
    ) -> Result<Option<ContentItem>, DomainError> {
        let mut store = self.lock()?;
        let Some(item) = store.items.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(status) = patch.status {
            item.status = status;
        }
        if let Some(content_type) = patch.content_type {
            item.content_type = content_type;
        }
        if let Some(url) = patch.url {
            item.url = url;
        }
        // Never moves backwards, even if the wall clock steps.
        item.date_updated = Utc::now().max(item.date_updated);

        info!(content_id = id, "content updated");
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut store = self.lock()?;
        let removed = store.items.remove(&id).is_some();
        if removed {
            info!(content_id = id, "content deleted");
        }
        Ok(removed)
    }
}
