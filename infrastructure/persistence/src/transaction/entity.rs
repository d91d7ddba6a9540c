use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::transaction::model::Transaction;
use business::domain::transaction::value_objects::TransactionType;

use crate::document::MongoDocument;
use crate::mapping::{
    parse_object_ids, parse_optional_object_id, to_bson_datetime, to_chrono, to_hex_ids,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub date_time: bson::DateTime,
    pub goal_id: Option<ObjectId>,
    #[serde(default)]
    pub tag_ids: Vec<ObjectId>,
    pub user_id: Option<ObjectId>,
}

impl MongoDocument for TransactionEntity {
    type Model = Transaction;

    const COLLECTION: &'static str = "Transactions";

    fn from_domain(transaction: &Transaction) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: parse_optional_object_id(transaction.id.as_deref())?,
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            date_time: to_bson_datetime(transaction.date_time),
            goal_id: parse_optional_object_id(transaction.goal_id.as_deref())?,
            tag_ids: parse_object_ids(&transaction.tag_ids)?,
            user_id: parse_optional_object_id(transaction.user_id.as_deref())?,
        })
    }

    fn into_domain(self) -> Transaction {
        Transaction {
            id: self.id.map(|id| id.to_hex()),
            transaction_type: self.transaction_type,
            amount: self.amount,
            date_time: to_chrono(self.date_time),
            goal_id: self.goal_id.map(|id| id.to_hex()),
            tag_ids: to_hex_ids(self.tag_ids),
            user_id: self.user_id.map(|id| id.to_hex()),
        }
    }
}
