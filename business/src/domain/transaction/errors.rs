#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("transaction.amount_invalid")]
    AmountInvalid,
    #[error("transaction.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
