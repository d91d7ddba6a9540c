use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use business::domain::account::model::Account;
use business::domain::account::value_objects::AccountType;
use business::domain::errors::RepositoryError;

use crate::document::MongoDocument;
use crate::mapping::{parse_object_ids, parse_optional_object_id, to_hex_ids};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub number: String,
    pub name: String,
    pub balance: f64,
    pub account_type: AccountType,
    #[serde(default)]
    pub transaction_ids: Vec<ObjectId>,
}

impl MongoDocument for AccountEntity {
    type Model = Account;

    const COLLECTION: &'static str = "Accounts";

    fn from_domain(account: &Account) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: parse_optional_object_id(account.id.as_deref())?,
            number: account.number.clone(),
            name: account.name.clone(),
            balance: account.balance,
            account_type: account.account_type,
            transaction_ids: parse_object_ids(&account.transaction_ids)?,
        })
    }

    fn into_domain(self) -> Account {
        Account {
            id: self.id.map(|id| id.to_hex()),
            number: self.number,
            name: self.name,
            balance: self.balance,
            account_type: self.account_type,
            transaction_ids: to_hex_ids(self.transaction_ids),
        }
    }
}
