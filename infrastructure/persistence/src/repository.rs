use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Collection, Database};

use business::domain::errors::RepositoryError;
use business::domain::repository::{Filter, Repository};

use crate::document::MongoDocument;
use crate::mapping::parse_object_id;

/// Collection-backed implementation of the [`Repository`] port.
pub struct MongoRepository<D: MongoDocument> {
    collection: Collection<D>,
}

impl<D: MongoDocument> MongoRepository<D> {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection::<D>(D::COLLECTION),
        }
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<D::Model>, RepositoryError> {
        let documents: Vec<D> = self
            .collection
            .find(filter)
            .await
            .map_err(database_error::<D>)?
            .try_collect()
            .await
            .map_err(database_error::<D>)?;

        Ok(documents.into_iter().map(MongoDocument::into_domain).collect())
    }
}

fn database_error<D: MongoDocument>(err: mongodb::error::Error) -> RepositoryError {
    tracing::error!(collection = D::COLLECTION, error = %err, "MongoDB operation failed");
    RepositoryError::DatabaseError
}

#[async_trait]
impl<D: MongoDocument> Repository<D::Model> for MongoRepository<D> {
    async fn find_all(&self) -> Result<Vec<D::Model>, RepositoryError> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<D::Model>, RepositoryError> {
        let object_id = parse_object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(database_error::<D>)?;

        Ok(document.map(MongoDocument::into_domain))
    }

    async fn find_by(&self, filter: Filter) -> Result<Vec<D::Model>, RepositoryError> {
        self.find_many(D::filter_document(&filter)?).await
    }

    async fn insert(&self, item: &D::Model) -> Result<String, RepositoryError> {
        let document = D::from_domain(item)?;
        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(database_error::<D>)?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or(RepositoryError::Serialization)
    }

    async fn replace(&self, id: &str, item: &D::Model) -> Result<bool, RepositoryError> {
        let object_id = parse_object_id(id)?;
        let document = D::from_domain(item)?;
        let result = self
            .collection
            .replace_one(doc! { "_id": object_id }, &document)
            .await
            .map_err(database_error::<D>)?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let object_id = parse_object_id(id)?;
        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(database_error::<D>)?;

        Ok(result.deleted_count > 0)
    }
}
