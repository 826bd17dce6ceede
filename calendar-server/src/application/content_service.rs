use std::sync::Arc;

use tracing::instrument;

use crate::data::content_repository::ContentRepository;
use crate::domain::content::{ContentFilter, ContentItem, ContentPatch, NewContent};
use crate::domain::error::DomainError;

/// Front door to the content store: validates input, delegates storage to the
/// repository behind it.
pub struct ContentService<R: ContentRepository + 'static> {
    repo: Arc<R>,
}

// Manual impl: clones share the repository, which itself need not be Clone.
impl<R: ContentRepository + 'static> Clone for ContentService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> ContentService<R>
where
    R: ContentRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_content(&self, id: i64) -> Result<ContentItem, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ContentNotFound(id))
    }

    pub async fn list_content(
        &self,
        filter: ContentFilter,
    ) -> Result<Vec<ContentItem>, DomainError> {
        self.repo.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn create_content(&self, new: NewContent) -> Result<ContentItem, DomainError> {
        if new.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        self.repo.create(new).await
    }

    #[instrument(skip(self))]
    pub async fn update_content(
        &self,
        id: i64,
        patch: ContentPatch,
    ) -> Result<ContentItem, DomainError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(DomainError::Validation("title must not be empty".into()));
            }
        }
        match self.repo.update(id, patch).await? {
            Some(item) => Ok(item),
            None => Err(DomainError::ContentNotFound(id)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_content(&self, id: i64) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::ContentNotFound(id))
        }
    }
}
