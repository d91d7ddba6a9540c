#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("goal.name_empty")]
    NameEmpty,
    #[error("goal.target_amount_zero")]
    TargetAmountZero,
    #[error("goal.target_amount_too_large")]
    TargetAmountTooLarge,
    #[error("goal.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
