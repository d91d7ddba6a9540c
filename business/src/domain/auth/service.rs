use async_trait::async_trait;

use super::errors::AuthError;
use crate::domain::user::model::User;

/// Credential check capability.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
}
