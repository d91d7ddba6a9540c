use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::goal::errors::GoalError;
use crate::domain::goal::model::{Goal, NewGoalProps};
use crate::domain::goal::service::GoalsService;
use crate::domain::logger::Logger;
use crate::domain::repository::{Filter, Repository};

pub struct GoalsServiceImpl {
    pub repository: Arc<dyn Repository<Goal>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GoalsService for GoalsServiceImpl {
    async fn get_all(&self) -> Result<Vec<Goal>, GoalError> {
        self.logger.info("Getting all goals");
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Goal, GoalError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(GoalError::NotFound)
    }

    async fn get_for_user(&self, user_id: &str) -> Result<Vec<Goal>, GoalError> {
        self.logger
            .info(&format!("Getting goals for user {}", user_id));
        let goals = self
            .repository
            .find_by(Filter::UserId(user_id.to_string()))
            .await?;
        self.logger.debug(&format!("Retrieved {} goals", goals.len()));
        Ok(goals)
    }

    async fn create(&self, props: NewGoalProps) -> Result<Goal, GoalError> {
        self.logger.info(&format!("Creating goal: {}", props.name));
        let mut goal = Goal::new(props)?;
        let id = self.repository.insert(&goal).await?;
        goal.id = Some(id);
        Ok(goal)
    }

    async fn update(&self, id: &str, props: NewGoalProps) -> Result<Goal, GoalError> {
        let existing = self.get_by_id(id).await?;

        let mut goal = Goal::new(props)?;
        goal.id = Some(id.to_string());
        goal.created = existing.created;

        if !self.repository.replace(id, &goal).await? {
            self.logger
                .warn(&format!("Goal {} disappeared during update", id));
            return Err(GoalError::NotFound);
        }
        Ok(goal)
    }

    async fn delete(&self, id: &str) -> Result<(), GoalError> {
        if !self.repository.delete(id).await? {
            return Err(GoalError::NotFound);
        }
        self.logger.info(&format!("Goal deleted: {}", id));
        Ok(())
    }
}
