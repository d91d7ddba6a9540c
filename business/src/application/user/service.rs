use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::repository::Repository;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::password::hash_password;
use crate::domain::user::service::UsersService;

pub struct UsersServiceImpl {
    pub repository: Arc<dyn Repository<User>>,
    pub logger: Arc<dyn Logger>,
}

impl UsersServiceImpl {
    async fn validated_with_hash(&self, props: NewUserProps) -> Result<User, UserError> {
        let mut user = User::new(props)?;
        user.password = hash_password(std::mem::take(&mut user.password)).await?;
        Ok(user)
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn get_all(&self) -> Result<Vec<User>, UserError> {
        self.logger.info("Getting all users");
        Ok(self.repository.find_all().await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound)
    }

    async fn create(&self, props: NewUserProps) -> Result<User, UserError> {
        let mut user = self.validated_with_hash(props).await?;
        let id = self.repository.insert(&user).await?;
        self.logger.info(&format!("User created: {}", id));
        user.id = Some(id);
        Ok(user)
    }

    async fn update(&self, id: &str, props: NewUserProps) -> Result<User, UserError> {
        let mut user = self.validated_with_hash(props).await?;
        user.id = Some(id.to_string());
        if !self.repository.replace(id, &user).await? {
            return Err(UserError::NotFound);
        }
        self.logger.info(&format!("User updated: {}", id));
        Ok(user)
    }

    async fn delete(&self, id: &str) -> Result<(), UserError> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound);
        }
        self.logger.info(&format!("User deleted: {}", id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::password::verify_password;
    use crate::test_support::{MockUserRepo, TEST_ID, mock_logger};

    fn props(password: &str) -> NewUserProps {
        NewUserProps {
            name: "Tag Team".to_string(),
            email: "tagteam@commbank.com.au".to_string(),
            password: password.to_string(),
            account_ids: vec![],
            goal_ids: vec![],
            transaction_ids: vec![],
        }
    }

    #[tokio::test]
    async fn should_store_hashed_password() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_insert().times(1).returning(|user| {
            assert_ne!(user.password, "s3cret!");
            assert!(user.password.starts_with("$2"));
            Ok(TEST_ID.to_string())
        });

        let service = UsersServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = service.create(props("s3cret!")).await.unwrap();

        assert_eq!(user.id.as_deref(), Some(TEST_ID));
        assert!(verify_password("s3cret!".to_string(), user.password).await);
    }

    #[tokio::test]
    async fn should_reject_empty_password_without_hashing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_insert().never();

        let service = UsersServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = service.create(props("")).await;

        assert!(matches!(result.unwrap_err(), UserError::PasswordEmpty));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_user() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let service = UsersServiceImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = service.delete(TEST_ID).await;

        assert!(matches!(result.unwrap_err(), UserError::NotFound));
    }
}
