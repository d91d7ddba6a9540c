use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    #[oai(write_only)]
    pub password: String,
}
