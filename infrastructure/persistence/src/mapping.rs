//! Conversions between domain primitives and their BSON representations.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};

use business::domain::errors::RepositoryError;

pub fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId)
}

pub fn parse_optional_object_id(id: Option<&str>) -> Result<Option<ObjectId>, RepositoryError> {
    id.map(parse_object_id).transpose()
}

pub fn parse_object_ids(ids: &[String]) -> Result<Vec<ObjectId>, RepositoryError> {
    ids.iter().map(|id| parse_object_id(id)).collect()
}

pub fn to_hex_ids(ids: Vec<ObjectId>) -> Vec<String> {
    ids.into_iter().map(|id| id.to_hex()).collect()
}

pub fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

pub fn to_chrono(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_hex_object_id() {
        let id = parse_object_id("62a3f587102e921da1253d32").unwrap();

        assert_eq!(id.to_hex(), "62a3f587102e921da1253d32");
    }

    #[test]
    fn should_reject_non_hex_id() {
        let result = parse_object_id("not-an-id");

        assert!(matches!(result, Err(RepositoryError::InvalidId)));
    }

    #[test]
    fn should_fail_whole_list_when_one_id_invalid() {
        let ids = vec!["62a3f587102e921da1253d32".to_string(), "bad".to_string()];

        assert!(parse_object_ids(&ids).is_err());
    }

    #[test]
    fn should_keep_millisecond_precision_through_bson() {
        let now = DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap();

        assert_eq!(to_chrono(to_bson_datetime(now)), now);
    }
}
