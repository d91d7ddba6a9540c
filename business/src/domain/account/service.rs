use async_trait::async_trait;

use super::errors::AccountError;
use super::model::{Account, NewAccountProps};

/// Bank account management capability.
#[async_trait]
pub trait AccountsService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Account>, AccountError>;
    async fn get_by_id(&self, id: &str) -> Result<Account, AccountError>;
    async fn create(&self, props: NewAccountProps) -> Result<Account, AccountError>;
    async fn update(&self, id: &str, props: NewAccountProps) -> Result<Account, AccountError>;
    async fn delete(&self, id: &str) -> Result<(), AccountError>;
}
