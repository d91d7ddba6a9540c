use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::user::service::UsersService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{UserRequest, UserResponse};

pub struct UserApi {
    service: Arc<dyn UsersService>,
}

impl UserApi {
    pub fn new(service: Arc<dyn UsersService>) -> Self {
        Self { service }
    }
}

/// User profile API
///
/// Responses never include the stored password hash.
#[OpenApi]
impl UserApi {
    #[oai(path = "/api/User", method = "get", tag = "ApiTags::Users")]
    async fn get_all_users(&self) -> GetAllUsersResponse {
        match self.service.get_all().await {
            Ok(users) => GetAllUsersResponse::Ok(Json(users.into_iter().map(|u| u.into()).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllUsersResponse::InternalError(json)
            }
        }
    }

    #[oai(path = "/api/User/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_user_by_id(&self, id: Path<String>) -> GetUserByIdResponse {
        match self.service.get_by_id(&id.0).await {
            Ok(user) => GetUserByIdResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetUserByIdResponse::BadRequest(json),
                    404 => GetUserByIdResponse::NotFound(json),
                    _ => GetUserByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Register a user
    ///
    /// The password is hashed with bcrypt before it is stored.
    #[oai(path = "/api/User", method = "post", tag = "ApiTags::Users")]
    async fn create_user(&self, body: Json<UserRequest>) -> CreateUserResponse {
        match self.service.create(body.0.into()).await {
            Ok(user) => CreateUserResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateUserResponse::BadRequest(json),
                    _ => CreateUserResponse::InternalError(json),
                }
            }
        }
    }

    #[oai(path = "/api/User/:id", method = "put", tag = "ApiTags::Users")]
    async fn update_user(&self, id: Path<String>, body: Json<UserRequest>) -> UpdateUserResponse {
        match self.service.update(&id.0, body.0.into()).await {
            Ok(user) => UpdateUserResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateUserResponse::BadRequest(json),
                    404 => UpdateUserResponse::NotFound(json),
                    _ => UpdateUserResponse::InternalError(json),
                }
            }
        }
    }

    #[oai(path = "/api/User/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        match self.service.delete(&id.0).await {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteUserResponse::BadRequest(json),
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserByIdResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
