use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::service::AuthService;
use crate::domain::logger::Logger;
use crate::domain::repository::{Filter, Repository};
use crate::domain::user::model::{User, normalize_email};
use crate::domain::user::password::verify_password;

pub struct AuthServiceImpl {
    pub repository: Arc<dyn Repository<User>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = normalize_email(email);
        let Some(user) = self
            .repository
            .find_by(Filter::Email(email.clone()))
            .await?
            .into_iter()
            .next()
        else {
            self.logger.warn("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password.to_string(), user.password.clone()).await {
            self.logger.warn(&format!(
                "Login attempt with wrong password for user {}",
                user.id.as_deref().unwrap_or("?")
            ));
            return Err(AuthError::InvalidCredentials);
        }

        self.logger.info(&format!(
            "User logged in: {}",
            user.id.as_deref().unwrap_or("?")
        ));
        Ok(user)
    }
}
