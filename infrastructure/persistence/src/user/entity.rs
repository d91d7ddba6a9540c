use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;

use crate::document::MongoDocument;
use crate::mapping::{parse_object_ids, parse_optional_object_id, to_hex_ids};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    /// bcrypt hash
    pub password: String,
    #[serde(default)]
    pub account_ids: Vec<ObjectId>,
    #[serde(default)]
    pub goal_ids: Vec<ObjectId>,
    #[serde(default)]
    pub transaction_ids: Vec<ObjectId>,
}

impl MongoDocument for UserEntity {
    type Model = User;

    const COLLECTION: &'static str = "Users";

    fn from_domain(user: &User) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: parse_optional_object_id(user.id.as_deref())?,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            account_ids: parse_object_ids(&user.account_ids)?,
            goal_ids: parse_object_ids(&user.goal_ids)?,
            transaction_ids: parse_object_ids(&user.transaction_ids)?,
        })
    }

    fn into_domain(self) -> User {
        User {
            id: self.id.map(|id| id.to_hex()),
            name: self.name,
            email: self.email,
            password: self.password,
            account_ids: to_hex_ids(self.account_ids),
            goal_ids: to_hex_ids(self.goal_ids),
            transaction_ids: to_hex_ids(self.transaction_ids),
        }
    }
}
