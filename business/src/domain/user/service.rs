use async_trait::async_trait;

use super::errors::UserError;
use super::model::{NewUserProps, User};

/// User profile capability.
#[async_trait]
pub trait UsersService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<User>, UserError>;
    async fn get_by_id(&self, id: &str) -> Result<User, UserError>;
    /// Validates the profile and stores it with a hashed password.
    async fn create(&self, props: NewUserProps) -> Result<User, UserError>;
    async fn update(&self, id: &str, props: NewUserProps) -> Result<User, UserError>;
    async fn delete(&self, id: &str) -> Result<(), UserError>;
}
