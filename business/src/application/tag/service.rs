use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::repository::Repository;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::service::TagsService;

pub struct TagsServiceImpl {
    pub repository: Arc<dyn Repository<Tag>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TagsService for TagsServiceImpl {
    async fn get_all(&self) -> Result<Vec<Tag>, TagError> {
        self.logger.info("Getting all tags");
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Tag, TagError> {
        self.repository.find_by_id(id).await?.ok_or(TagError::NotFound)
    }

    async fn create(&self, name: String) -> Result<Tag, TagError> {
        let mut tag = Tag::new(name)?;
        let id = self.repository.insert(&tag).await?;
        self.logger.info(&format!("Tag created: {} ({})", tag.name, id));
        tag.id = Some(id);
        Ok(tag)
    }

    async fn update(&self, id: &str, name: String) -> Result<Tag, TagError> {
        let mut tag = Tag::new(name)?;
        tag.id = Some(id.to_string());
        if !self.repository.replace(id, &tag).await? {
            return Err(TagError::NotFound);
        }
        Ok(tag)
    }

    async fn delete(&self, id: &str) -> Result<(), TagError> {
        if !self.repository.delete(id).await? {
            return Err(TagError::NotFound);
        }
        self.logger.info(&format!("Tag deleted: {}", id));
        Ok(())
    }
}
