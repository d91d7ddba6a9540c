use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::auth::service::AuthService;

use crate::api::auth::dto::LoginRequest;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::UserResponse;

pub struct AuthApi {
    service: Arc<dyn AuthService>,
}

impl AuthApi {
    pub fn new(service: Arc<dyn AuthService>) -> Self {
        Self { service }
    }
}

#[OpenApi]
impl AuthApi {
    /// Log in with email and password
    ///
    /// Returns the matching user. An unknown email and a wrong password produce the
    /// same `401` so callers cannot probe for registered addresses.
    #[oai(path = "/api/Auth/Login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        match self.service.login(&body.0.email, &body.0.password).await {
            Ok(user) => LoginResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LoginResponse::BadRequest(json),
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
