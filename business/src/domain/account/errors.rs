#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account.name_empty")]
    NameEmpty,
    #[error("account.number_empty")]
    NumberEmpty,
    #[error("account.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
