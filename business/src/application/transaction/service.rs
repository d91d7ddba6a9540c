use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::repository::{Filter, Repository};
use crate::domain::transaction::errors::TransactionError;
use crate::domain::transaction::model::{NewTransactionProps, Transaction};
use crate::domain::transaction::service::TransactionsService;

pub struct TransactionsServiceImpl {
    pub repository: Arc<dyn Repository<Transaction>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TransactionsService for TransactionsServiceImpl {
    async fn get_all(&self) -> Result<Vec<Transaction>, TransactionError> {
        self.logger.info("Getting all transactions");
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Transaction, TransactionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TransactionError::NotFound)
    }

    async fn get_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, TransactionError> {
        self.logger
            .info(&format!("Getting transactions for user {}", user_id));
        Ok(self
            .repository
            .find_by(Filter::UserId(user_id.to_string()))
            .await?)
    }

    async fn create(&self, props: NewTransactionProps) -> Result<Transaction, TransactionError> {
        let mut transaction = Transaction::new(props)?;
        let id = self.repository.insert(&transaction).await?;
        self.logger.info(&format!(
            "Transaction created: {} ({} {})",
            id, transaction.transaction_type, transaction.amount
        ));
        transaction.id = Some(id);
        Ok(transaction)
    }

    async fn update(
        &self,
        id: &str,
        props: NewTransactionProps,
    ) -> Result<Transaction, TransactionError> {
        let mut transaction = Transaction::new(props)?;
        transaction.id = Some(id.to_string());
        if !self.repository.replace(id, &transaction).await? {
            return Err(TransactionError::NotFound);
        }
        Ok(transaction)
    }

    async fn delete(&self, id: &str) -> Result<(), TransactionError> {
        if !self.repository.delete(id).await? {
            return Err(TransactionError::NotFound);
        }
        self.logger.info(&format!("Transaction deleted: {}", id));
        Ok(())
    }
}
