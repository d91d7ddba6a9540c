use async_trait::async_trait;

use super::errors::TransactionError;
use super::model::{NewTransactionProps, Transaction};

/// Transaction ledger capability.
#[async_trait]
pub trait TransactionsService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Transaction>, TransactionError>;
    async fn get_by_id(&self, id: &str) -> Result<Transaction, TransactionError>;
    async fn get_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, TransactionError>;
    async fn create(&self, props: NewTransactionProps) -> Result<Transaction, TransactionError>;
    async fn update(
        &self,
        id: &str,
        props: NewTransactionProps,
    ) -> Result<Transaction, TransactionError>;
    async fn delete(&self, id: &str) -> Result<(), TransactionError>;
}
