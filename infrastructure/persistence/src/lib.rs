pub mod db;
pub mod document;
pub mod mapping;
pub mod repository;
pub mod account {
    pub mod entity;
}
pub mod goal {
    pub mod entity;
}
pub mod tag {
    pub mod entity;
}
pub mod transaction {
    pub mod entity;
}
pub mod user {
    pub mod entity;
}
