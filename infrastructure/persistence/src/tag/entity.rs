use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::tag::model::Tag;

use crate::document::MongoDocument;
use crate::mapping::parse_optional_object_id;

#[derive(Debug, Serialize, Deserialize)]
pub struct TagEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

impl MongoDocument for TagEntity {
    type Model = Tag;

    const COLLECTION: &'static str = "Tags";

    fn from_domain(tag: &Tag) -> Result<Self, RepositoryError> {
        Ok(Self {
            id: parse_optional_object_id(tag.id.as_deref())?,
            name: tag.name.clone(),
        })
    }

    fn into_domain(self) -> Tag {
        Tag {
            id: self.id.map(|id| id.to_hex()),
            name: self.name,
        }
    }
}
