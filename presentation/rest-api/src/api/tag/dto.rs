use poem_openapi::Object;

use business::domain::tag::model::Tag;

#[derive(Debug, Clone, Object)]
pub struct TagRequest {
    /// Tag name, trimmed before storage (cannot be blank)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.unwrap_or_default(),
            name: tag.name,
        }
    }
}
