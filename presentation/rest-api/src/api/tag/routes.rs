use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::tag::service::TagsService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tag::dto::{TagRequest, TagResponse};
use crate::api::tags::ApiTags;

pub struct TagApi {
    service: Arc<dyn TagsService>,
}

impl TagApi {
    pub fn new(service: Arc<dyn TagsService>) -> Self {
        Self { service }
    }
}

/// Labels shared by goals and transactions
#[OpenApi]
impl TagApi {
    #[oai(path = "/api/Tag", method = "get", tag = "ApiTags::Tags")]
    async fn get_all_tags(&self) -> GetAllTagsResponse {
        match self.service.get_all().await {
            Ok(tags) => GetAllTagsResponse::Ok(Json(tags.into_iter().map(|t| t.into()).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllTagsResponse::InternalError(json)
            }
        }
    }

    #[oai(path = "/api/Tag/:id", method = "get", tag = "ApiTags::Tags")]
    async fn get_tag_by_id(&self, id: Path<String>) -> GetTagByIdResponse {
        match self.service.get_by_id(&id.0).await {
            Ok(tag) => GetTagByIdResponse::Ok(Json(tag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetTagByIdResponse::BadRequest(json),
                    404 => GetTagByIdResponse::NotFound(json),
                    _ => GetTagByIdResponse::InternalError(json),
                }
            }
        }
    }

    #[oai(path = "/api/Tag", method = "post", tag = "ApiTags::Tags")]
    async fn create_tag(&self, body: Json<TagRequest>) -> CreateTagResponse {
        match self.service.create(body.0.name).await {
            Ok(tag) => CreateTagResponse::Created(Json(tag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTagResponse::BadRequest(json),
                    _ => CreateTagResponse::InternalError(json),
                }
            }
        }
    }

    #[oai(path = "/api/Tag/:id", method = "put", tag = "ApiTags::Tags")]
    async fn update_tag(&self, id: Path<String>, body: Json<TagRequest>) -> UpdateTagResponse {
        match self.service.update(&id.0, body.0.name).await {
            Ok(tag) => UpdateTagResponse::Ok(Json(tag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateTagResponse::BadRequest(json),
                    404 => UpdateTagResponse::NotFound(json),
                    _ => UpdateTagResponse::InternalError(json),
                }
            }
        }
    }

    #[oai(path = "/api/Tag/:id", method = "delete", tag = "ApiTags::Tags")]
    async fn delete_tag(&self, id: Path<String>) -> DeleteTagResponse {
        match self.service.delete(&id.0).await {
            Ok(()) => DeleteTagResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteTagResponse::BadRequest(json),
                    404 => DeleteTagResponse::NotFound(json),
                    _ => DeleteTagResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllTagsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TagResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTagByIdResponse {
    #[oai(status = 200)]
    Ok(Json<TagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTagResponse {
    #[oai(status = 201)]
    Created(Json<TagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateTagResponse {
    #[oai(status = 200)]
    Ok(Json<TagResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTagResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, IntoEndpoint};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::tag::errors::TagError;
    use business::domain::tag::model::Tag;

    mock! {
        pub Tags {}

        #[async_trait]
        impl TagsService for Tags {
            async fn get_all(&self) -> Result<Vec<Tag>, TagError>;
            async fn get_by_id(&self, id: &str) -> Result<Tag, TagError>;
            async fn create(&self, name: String) -> Result<Tag, TagError>;
            async fn update(&self, id: &str, name: String) -> Result<Tag, TagError>;
            async fn delete(&self, id: &str) -> Result<(), TagError>;
        }
    }

    fn client(service: MockTags) -> TestClient<impl Endpoint> {
        TestClient::new(
            OpenApiService::new(TagApi::new(Arc::new(service)), "test", "1.0").into_endpoint(),
        )
    }

    #[tokio::test]
    async fn should_create_tag_from_name() {
        let mut service = MockTags::new();
        service
            .expect_create()
            .withf(|name| name == "Groceries")
            .returning(|name| {
                Ok(Tag {
                    id: Some("62a3f587102e921da1253d32".to_string()),
                    name,
                })
            });

        let resp = client(service)
            .post("/api/Tag")
            .body_json(&json!({ "name": "Groceries" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        json.value().object().get("name").assert_string("Groceries");
    }

    #[tokio::test]
    async fn should_return_400_for_blank_name() {
        let mut service = MockTags::new();
        service
            .expect_update()
            .returning(|_, _| Err(TagError::NameEmpty));

        let resp = client(service)
            .put("/api/Tag/62a3f587102e921da1253d32")
            .body_json(&json!({ "name": "  " }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("tag.name_empty");
    }
}
