use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::goal::model::Goal;

use crate::document::MongoDocument;
use crate::mapping::{
    parse_object_ids, parse_optional_object_id, to_bson_datetime, to_chrono, to_hex_ids,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub target_amount: i64,
    pub target_date: bson::DateTime,
    pub balance: f64,
    pub created: bson::DateTime,
    #[serde(default)]
    pub transaction_ids: Vec<ObjectId>,
    #[serde(default)]
    pub tag_ids: Vec<ObjectId>,
    pub user_id: Option<ObjectId>,
    pub icon: Option<String>,
}

impl MongoDocument for GoalEntity {
    type Model = Goal;

    const COLLECTION: &'static str = "Goals";

    fn from_domain(goal: &Goal) -> Result<Self, RepositoryError> {
        // BSON has no unsigned 64-bit integer.
        let target_amount =
            i64::try_from(goal.target_amount).map_err(|_| RepositoryError::Serialization)?;

        Ok(Self {
            id: parse_optional_object_id(goal.id.as_deref())?,
            name: goal.name.clone(),
            target_amount,
            target_date: to_bson_datetime(goal.target_date),
            balance: goal.balance,
            created: to_bson_datetime(goal.created),
            transaction_ids: parse_object_ids(&goal.transaction_ids)?,
            tag_ids: parse_object_ids(&goal.tag_ids)?,
            user_id: parse_optional_object_id(goal.user_id.as_deref())?,
            icon: goal.icon.clone(),
        })
    }

    fn into_domain(self) -> Goal {
        Goal {
            id: self.id.map(|id| id.to_hex()),
            name: self.name,
            // Negative amounts never come from `from_domain`; treat them as unset.
            target_amount: self.target_amount.max(0).unsigned_abs(),
            target_date: to_chrono(self.target_date),
            balance: self.balance,
            created: to_chrono(self.created),
            transaction_ids: to_hex_ids(self.transaction_ids),
            tag_ids: to_hex_ids(self.tag_ids),
            user_id: self.user_id.map(|id| id.to_hex()),
            icon: self.icon,
        }
    }
}
