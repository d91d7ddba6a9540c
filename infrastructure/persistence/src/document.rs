use mongodb::bson::{Document, doc};
use serde::{Serialize, de::DeserializeOwned};

use business::domain::errors::RepositoryError;
use business::domain::repository::Filter;

use crate::mapping::parse_object_id;

/// A collection document paired with the domain model it stores.
pub trait MongoDocument: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static {
    type Model: Send + Sync + 'static;

    const COLLECTION: &'static str;

    /// Fails with [`RepositoryError::InvalidId`] when a reference id is malformed.
    fn from_domain(model: &Self::Model) -> Result<Self, RepositoryError>;

    fn into_domain(self) -> Self::Model;

    fn filter_document(filter: &Filter) -> Result<Document, RepositoryError> {
        match filter {
            Filter::UserId(user_id) => Ok(doc! { "userId": parse_object_id(user_id)? }),
            Filter::Email(email) => Ok(doc! { "email": email.as_str() }),
        }
    }
}
