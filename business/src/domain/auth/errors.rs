#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown email and wrong password are reported the same way.
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
