use async_trait::async_trait;

use super::errors::RepositoryError;

/// Secondary lookup supported by the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Documents owned by the given user id.
    UserId(String),
    /// Documents whose email matches exactly.
    Email(String),
}

/// Document-store port shared by every service.
///
/// Ids are opaque strings produced by the store on `insert`. A malformed id is
/// reported as [`RepositoryError::InvalidId`]; a well-formed id that matches
/// nothing yields `None` or `false`.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, RepositoryError>;
    async fn find_by(&self, filter: Filter) -> Result<Vec<T>, RepositoryError>;
    /// Stores a new document and returns its generated id.
    async fn insert(&self, item: &T) -> Result<String, RepositoryError>;
    /// Replaces the document with the given id. Returns `false` when nothing matched.
    async fn replace(&self, id: &str, item: &T) -> Result<bool, RepositoryError>;
    /// Removes the document with the given id. Returns `false` when nothing matched.
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;
}
