use poem_openapi::Object;

use business::domain::user::model::{NewUserProps, User};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserRequest {
    /// Display name (cannot be empty)
    pub name: String,
    /// Login email, stored lowercased
    pub email: String,
    /// Plain text password; only its bcrypt hash is stored
    #[oai(write_only)]
    pub password: String,
    #[oai(default)]
    pub account_ids: Vec<String>,
    #[oai(default)]
    pub goal_ids: Vec<String>,
    #[oai(default)]
    pub transaction_ids: Vec<String>,
}

impl From<UserRequest> for NewUserProps {
    fn from(request: UserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
            account_ids: request.account_ids,
            goal_ids: request.goal_ids,
            transaction_ids: request.transaction_ids,
        }
    }
}

/// A user as seen by clients. The password hash never leaves the server.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_ids: Vec<String>,
    pub goal_ids: Vec<String>,
    pub transaction_ids: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
            email: user.email,
            account_ids: user.account_ids,
            goal_ids: user.goal_ids,
            transaction_ids: user.transaction_ids,
        }
    }
}
