use std::sync::Arc;

use mongodb::Database;

use logger::TracingLogger;
use persistence::account::entity::AccountEntity;
use persistence::goal::entity::GoalEntity;
use persistence::repository::MongoRepository;
use persistence::tag::entity::TagEntity;
use persistence::transaction::entity::TransactionEntity;
use persistence::user::entity::UserEntity;

use business::application::account::service::AccountsServiceImpl;
use business::application::auth::service::AuthServiceImpl;
use business::application::goal::service::GoalsServiceImpl;
use business::application::tag::service::TagsServiceImpl;
use business::application::transaction::service::TransactionsServiceImpl;
use business::application::user::service::UsersServiceImpl;
use business::domain::account::service::AccountsService;
use business::domain::auth::service::AuthService;
use business::domain::goal::service::GoalsService;
use business::domain::logger::Logger;
use business::domain::tag::service::TagsService;
use business::domain::transaction::service::TransactionsService;
use business::domain::user::service::UsersService;

use crate::api::account::routes::AccountApi;
use crate::api::auth::routes::AuthApi;
use crate::api::goal::routes::GoalApi;
use crate::api::health::routes::HealthApi;
use crate::api::tag::routes::TagApi;
use crate::api::transaction::routes::TransactionApi;
use crate::api::user::routes::UserApi;

/// Composition root: the six service singletons, built once from one database handle.
///
/// Immutable after construction. Accessors hand out clones of the same `Arc`, so every
/// controller shares one instance per capability for the process lifetime.
pub struct ServiceRegistry {
    accounts: Arc<dyn AccountsService>,
    auth: Arc<dyn AuthService>,
    goals: Arc<dyn GoalsService>,
    tags: Arc<dyn TagsService>,
    transactions: Arc<dyn TransactionsService>,
    users: Arc<dyn UsersService>,
}

impl ServiceRegistry {
    pub fn new(database: &Database) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        let accounts = Arc::new(AccountsServiceImpl {
            repository: Arc::new(MongoRepository::<AccountEntity>::new(database)),
            logger: logger.clone(),
        });
        let auth = Arc::new(AuthServiceImpl {
            repository: Arc::new(MongoRepository::<UserEntity>::new(database)),
            logger: logger.clone(),
        });
        let goals = Arc::new(GoalsServiceImpl {
            repository: Arc::new(MongoRepository::<GoalEntity>::new(database)),
            logger: logger.clone(),
        });
        let tags = Arc::new(TagsServiceImpl {
            repository: Arc::new(MongoRepository::<TagEntity>::new(database)),
            logger: logger.clone(),
        });
        let transactions = Arc::new(TransactionsServiceImpl {
            repository: Arc::new(MongoRepository::<TransactionEntity>::new(database)),
            logger: logger.clone(),
        });
        let users = Arc::new(UsersServiceImpl {
            repository: Arc::new(MongoRepository::<UserEntity>::new(database)),
            logger,
        });

        tracing::info!(database = database.name(), "Registered 6 services");

        Self {
            accounts,
            auth,
            goals,
            tags,
            transactions,
            users,
        }
    }

    pub fn accounts(&self) -> Arc<dyn AccountsService> {
        Arc::clone(&self.accounts)
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        Arc::clone(&self.auth)
    }

    pub fn goals(&self) -> Arc<dyn GoalsService> {
        Arc::clone(&self.goals)
    }

    pub fn tags(&self) -> Arc<dyn TagsService> {
        Arc::clone(&self.tags)
    }

    pub fn transactions(&self) -> Arc<dyn TransactionsService> {
        Arc::clone(&self.transactions)
    }

    pub fn users(&self) -> Arc<dyn UsersService> {
        Arc::clone(&self.users)
    }
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub account_api: AccountApi,
    pub auth_api: AuthApi,
    pub goal_api: GoalApi,
    pub tag_api: TagApi,
    pub transaction_api: TransactionApi,
    pub user_api: UserApi,
}

impl DependencyContainer {
    pub fn new(registry: &ServiceRegistry) -> Self {
        Self {
            health_api: HealthApi::new(),
            account_api: AccountApi::new(registry.accounts()),
            auth_api: AuthApi::new(registry.auth()),
            goal_api: GoalApi::new(registry.goals()),
            tag_api: TagApi::new(registry.tags()),
            transaction_api: TransactionApi::new(registry.transactions()),
            user_api: UserApi::new(registry.users()),
        }
    }
}
