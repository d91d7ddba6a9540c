#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.password_empty")]
    PasswordEmpty,
    #[error("user.password_hashing_failed")]
    PasswordHashing,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
