use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::model::{Account, NewAccountProps};
use crate::domain::account::service::AccountsService;
use crate::domain::logger::Logger;
use crate::domain::repository::Repository;

pub struct AccountsServiceImpl {
    pub repository: Arc<dyn Repository<Account>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AccountsService for AccountsServiceImpl {
    async fn get_all(&self) -> Result<Vec<Account>, AccountError> {
        self.logger.info("Getting all accounts");
        let accounts = self.repository.find_all().await?;
        self.logger
            .info(&format!("Retrieved {} accounts", accounts.len()));
        Ok(accounts)
    }

    async fn get_by_id(&self, id: &str) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound)
    }

    async fn create(&self, props: NewAccountProps) -> Result<Account, AccountError> {
        let mut account = Account::new(props)?;
        let id = self.repository.insert(&account).await?;
        self.logger.info(&format!("Account created: {}", id));
        account.id = Some(id);
        Ok(account)
    }

    async fn update(&self, id: &str, props: NewAccountProps) -> Result<Account, AccountError> {
        let mut account = Account::new(props)?;
        account.id = Some(id.to_string());
        if !self.repository.replace(id, &account).await? {
            return Err(AccountError::NotFound);
        }
        self.logger.info(&format!("Account updated: {}", id));
        Ok(account)
    }

    async fn delete(&self, id: &str) -> Result<(), AccountError> {
        if !self.repository.delete(id).await? {
            return Err(AccountError::NotFound);
        }
        self.logger.info(&format!("Account deleted: {}", id));
        Ok(())
    }
}
