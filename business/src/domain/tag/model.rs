use super::errors::TagError;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: Option<String>,
    pub name: String,
}

impl Tag {
    pub fn new(name: String) -> Result<Self, TagError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(TagError::NameEmpty);
        }

        Ok(Self { id: None, name })
    }
}
