//! In-memory blog store.

use std::sync::RwLock;

use async_trait::async_trait;

use super::POISONED;
use crate::domain::ports::{BlogRepository, BlogRepositoryError};
use crate::domain::{Blog, BlogId, NewBlog};

/// Blog repository holding records in insertion order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    records: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: NewBlog) -> Result<Blog, BlogRepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| BlogRepositoryError::query(POISONED))?;
        let stored = blog.into_blog(BlogId::random());
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogRepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| BlogRepositoryError::query(POISONED))?;
        Ok(records.iter().find(|blog| blog.id() == id).cloned())
    }

    async fn update(&self, blog: &Blog) -> Result<Option<Blog>, BlogRepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| BlogRepositoryError::query(POISONED))?;
        Ok(records
            .iter_mut()
            .find(|stored| stored.id() == blog.id())
            .map(|slot| {
                *slot = blog.clone();
                blog.clone()
            }))
    }

    async fn delete(&self, id: BlogId) -> Result<bool, BlogRepositoryError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| BlogRepositoryError::query(POISONED))?;
        let before = records.len();
        records.retain(|blog| blog.id() != id);
        Ok(records.len() != before)
    }

    async fn list(&self) -> Result<Vec<Blog>, BlogRepositoryError> {
        let records = self
            .records
            .read()
            .map_err(|_| BlogRepositoryError::query(POISONED))?;
        Ok(records.clone())
    }
}
