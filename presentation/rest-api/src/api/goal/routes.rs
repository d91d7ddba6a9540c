use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::goal::service::GoalsService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::goal::dto::{GoalRequest, GoalResponse};
use crate::api::tags::ApiTags;

pub struct GoalApi {
    service: Arc<dyn GoalsService>,
}

impl GoalApi {
    pub fn new(service: Arc<dyn GoalsService>) -> Self {
        Self { service }
    }
}

/// Savings goals API
///
/// Goals belong to a user and collect the transactions and tags that move them forward.
#[OpenApi]
impl GoalApi {
    /// List all goals
    #[oai(path = "/api/Goal", method = "get", tag = "ApiTags::Goals")]
    async fn get_all_goals(&self) -> GetGoalsResponse {
        match self.service.get_all().await {
            Ok(goals) => GetGoalsResponse::Ok(Json(goals.into_iter().map(|g| g.into()).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetGoalsResponse::BadRequest(json),
                    _ => GetGoalsResponse::InternalError(json),
                }
            }
        }
    }

    /// List the goals owned by a user
    #[oai(path = "/api/Goal/User/:id", method = "get", tag = "ApiTags::Goals")]
    async fn get_goals_for_user(&self, id: Path<String>) -> GetGoalsResponse {
        match self.service.get_for_user(&id.0).await {
            Ok(goals) => GetGoalsResponse::Ok(Json(goals.into_iter().map(|g| g.into()).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetGoalsResponse::BadRequest(json),
                    _ => GetGoalsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a goal by ID
    #[oai(path = "/api/Goal/:id", method = "get", tag = "ApiTags::Goals")]
    async fn get_goal_by_id(&self, id: Path<String>) -> GetGoalByIdResponse {
        match self.service.get_by_id(&id.0).await {
            Ok(goal) => GetGoalByIdResponse::Ok(Json(goal.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetGoalByIdResponse::BadRequest(json),
                    404 => GetGoalByIdResponse::NotFound(json),
                    _ => GetGoalByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a goal
    #[oai(path = "/api/Goal", method = "post", tag = "ApiTags::Goals")]
    async fn create_goal(&self, body: Json<GoalRequest>) -> CreateGoalResponse {
        match self.service.create(body.0.into()).await {
            Ok(goal) => CreateGoalResponse::Created(Json(goal.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateGoalResponse::BadRequest(json),
                    _ => CreateGoalResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a goal
    ///
    /// The creation timestamp of the stored goal is preserved.
    #[oai(path = "/api/Goal/:id", method = "put", tag = "ApiTags::Goals")]
    async fn update_goal(&self, id: Path<String>, body: Json<GoalRequest>) -> UpdateGoalResponse {
        match self.service.update(&id.0, body.0.into()).await {
            Ok(goal) => UpdateGoalResponse::Ok(Json(goal.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateGoalResponse::BadRequest(json),
                    404 => UpdateGoalResponse::NotFound(json),
                    _ => UpdateGoalResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a goal
    #[oai(path = "/api/Goal/:id", method = "delete", tag = "ApiTags::Goals")]
    async fn delete_goal(&self, id: Path<String>) -> DeleteGoalResponse {
        match self.service.delete(&id.0).await {
            Ok(()) => DeleteGoalResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteGoalResponse::BadRequest(json),
                    404 => DeleteGoalResponse::NotFound(json),
                    _ => DeleteGoalResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetGoalsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<GoalResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetGoalByIdResponse {
    #[oai(status = 200)]
    Ok(Json<GoalResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateGoalResponse {
    #[oai(status = 201)]
    Created(Json<GoalResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateGoalResponse {
    #[oai(status = 200)]
    Ok(Json<GoalResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteGoalResponse {
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
    use chrono::Utc;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{Endpoint, IntoEndpoint};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::goal::errors::GoalError;
    use business::domain::goal::model::{Goal, NewGoalProps};

    mock! {
        pub Goals {}

        #[async_trait]
        impl GoalsService for Goals {
            async fn get_all(&self) -> Result<Vec<Goal>, GoalError>;
            async fn get_by_id(&self, id: &str) -> Result<Goal, GoalError>;
            async fn get_for_user(&self, user_id: &str) -> Result<Vec<Goal>, GoalError>;
            async fn create(&self, props: NewGoalProps) -> Result<Goal, GoalError>;
            async fn update(&self, id: &str, props: NewGoalProps) -> Result<Goal, GoalError>;
            async fn delete(&self, id: &str) -> Result<(), GoalError>;
        }
    }

    fn client(service: MockGoals) -> TestClient<impl Endpoint> {
        TestClient::new(
            OpenApiService::new(GoalApi::new(Arc::new(service)), "test", "1.0").into_endpoint(),
        )
    }

    fn goal() -> Goal {
        Goal {
            id: Some("62a3f587102e921da1253d32".to_string()),
            name: "House deposit".to_string(),
            target_amount: 40_000,
            target_date: Utc::now(),
            balance: 0.0,
            created: Utc::now(),
            transaction_ids: vec![],
            tag_ids: vec![],
            user_id: Some("62a29c15f4605c4c9fa7f306".to_string()),
            icon: None,
        }
    }

    #[tokio::test]
    async fn should_route_user_lookup_to_get_for_user() {
        let mut service = MockGoals::new();
        service
            .expect_get_for_user()
            .withf(|user_id| user_id == "62a29c15f4605c4c9fa7f306")
            .times(1)
            .returning(|_| Ok(vec![goal()]));

        let resp = client(service)
            .get("/api/Goal/User/62a29c15f4605c4c9fa7f306")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().array().assert_len(1);
    }

    #[tokio::test]
    async fn should_return_400_for_zero_target() {
        let mut service = MockGoals::new();
        service
            .expect_create()
            .returning(|_| Err(GoalError::TargetAmountZero));

        let resp = client(service)
            .post("/api/Goal")
            .body_json(&json!({
                "name": "House deposit",
                "targetAmount": 0,
                "targetDate": "2027-01-01T00:00:00Z"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("goal.target_amount_zero");
    }

    #[tokio::test]
    async fn should_return_400_for_target_beyond_storable_range() {
        let mut service = MockGoals::new();
        service
            .expect_create()
            .withf(|props| props.target_amount == u64::MAX)
            .returning(|props| Goal::new(props));

        let resp = client(service)
            .post("/api/Goal")
            .body_json(&json!({
                "name": "House deposit",
                "targetAmount": u64::MAX,
                "targetDate": "2027-01-01T00:00:00Z"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("goal.target_amount_too_large");
    }

    #[tokio::test]
    async fn should_return_404_when_updating_missing_goal() {
        let mut service = MockGoals::new();
        service
            .expect_update()
            .returning(|_, _| Err(GoalError::NotFound));

        let resp = client(service)
            .put("/api/Goal/62a3f587102e921da1253d32")
            .body_json(&json!({
                "name": "House deposit",
                "targetAmount": 40000,
                "targetDate": "2027-01-01T00:00:00Z"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_204_after_delete() {
        let mut service = MockGoals::new();
        service.expect_delete().returning(|_| Ok(()));

        let resp = client(service)
            .delete("/api/Goal/62a3f587102e921da1253d32")
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }
}
