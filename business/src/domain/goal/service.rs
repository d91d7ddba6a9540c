use async_trait::async_trait;

use super::errors::GoalError;
use super::model::{Goal, NewGoalProps};

/// Savings goal capability.
#[async_trait]
pub trait GoalsService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Goal>, GoalError>;
    async fn get_by_id(&self, id: &str) -> Result<Goal, GoalError>;
    async fn get_for_user(&self, user_id: &str) -> Result<Vec<Goal>, GoalError>;
    async fn create(&self, props: NewGoalProps) -> Result<Goal, GoalError>;
    /// Replaces the goal, keeping its original creation timestamp.
    async fn update(&self, id: &str, props: NewGoalProps) -> Result<Goal, GoalError>;
    async fn delete(&self, id: &str) -> Result<(), GoalError>;
}
