use async_trait::async_trait;

use super::errors::TagError;
use super::model::Tag;

/// Transaction and goal tagging capability.
#[async_trait]
pub trait TagsService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Tag>, TagError>;
    async fn get_by_id(&self, id: &str) -> Result<Tag, TagError>;
    async fn create(&self, name: String) -> Result<Tag, TagError>;
    async fn update(&self, id: &str, name: String) -> Result<Tag, TagError>;
    async fn delete(&self, id: &str) -> Result<(), TagError>;
}
