//! Mocks shared by the service tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::account::model::Account;
use crate::domain::errors::RepositoryError;
use crate::domain::goal::model::Goal;
use crate::domain::logger::Logger;
use crate::domain::repository::{Filter, Repository};
use crate::domain::tag::model::Tag;
use crate::domain::transaction::model::Transaction;
use crate::domain::user::model::User;

macro_rules! mock_repository {
    ($name:ident, $model:ident) => {
        mock! {
            pub $name {}

            #[async_trait]
            impl Repository<$model> for $name {
                async fn find_all(&self) -> Result<Vec<$model>, RepositoryError>;
                async fn find_by_id(&self, id: &str) -> Result<Option<$model>, RepositoryError>;
                async fn find_by(&self, filter: Filter) -> Result<Vec<$model>, RepositoryError>;
                async fn insert(&self, item: &$model) -> Result<String, RepositoryError>;
                async fn replace(&self, id: &str, item: &$model) -> Result<bool, RepositoryError>;
                async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;
            }
        }
    };
}

mock_repository!(AccountRepo, Account);
mock_repository!(GoalRepo, Goal);
mock_repository!(TagRepo, Tag);
mock_repository!(TransactionRepo, Transaction);
mock_repository!(UserRepo, User);

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub const TEST_ID: &str = "62a3f587102e921da1253d32";
pub const TEST_USER_ID: &str = "62a29c15f4605c4c9fa7f306";
