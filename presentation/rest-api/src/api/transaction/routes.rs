use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::transaction::service::TransactionsService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::transaction::dto::{TransactionRequest, TransactionResponse};

pub struct TransactionApi {
    service: Arc<dyn TransactionsService>,
}

impl TransactionApi {
    pub fn new(service: Arc<dyn TransactionsService>) -> Self {
        Self { service }
    }
}

/// Transaction ledger API
#[OpenApi]
impl TransactionApi {
    /// List all transactions
    #[oai(path = "/api/Transaction", method = "get", tag = "ApiTags::Transactions")]
    async fn get_all_transactions(&self) -> GetTransactionsResponse {
        match self.service.get_all().await {
            Ok(transactions) => GetTransactionsResponse::Ok(Json(
                transactions.into_iter().map(|t| t.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetTransactionsResponse::BadRequest(json),
                    _ => GetTransactionsResponse::InternalError(json),
                }
            }
        }
    }

    /// List the transactions of a user
    #[oai(
        path = "/api/Transaction/User/:id",
        method = "get",
        tag = "ApiTags::Transactions"
    )]
    async fn get_transactions_for_user(&self, id: Path<String>) -> GetTransactionsResponse {
        match self.service.get_for_user(&id.0).await {
            Ok(transactions) => GetTransactionsResponse::Ok(Json(
                transactions.into_iter().map(|t| t.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetTransactionsResponse::BadRequest(json),
                    _ => GetTransactionsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a transaction by ID
    #[oai(
        path = "/api/Transaction/:id",
        method = "get",
        tag = "ApiTags::Transactions"
    )]
    async fn get_transaction_by_id(&self, id: Path<String>) -> GetTransactionByIdResponse {
        match self.service.get_by_id(&id.0).await {
            Ok(transaction) => GetTransactionByIdResponse::Ok(Json(transaction.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetTransactionByIdResponse::BadRequest(json),
                    404 => GetTransactionByIdResponse::NotFound(json),
                    _ => GetTransactionByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Record a transaction
    #[oai(path = "/api/Transaction", method = "post", tag = "ApiTags::Transactions")]
    async fn create_transaction(
        &self,
        body: Json<TransactionRequest>,
    ) -> CreateTransactionResponse {
        match self.service.create(body.0.into()).await {
            Ok(transaction) => CreateTransactionResponse::Created(Json(transaction.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateTransactionResponse::BadRequest(json),
                    _ => CreateTransactionResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a transaction
    #[oai(
        path = "/api/Transaction/:id",
        method = "put",
        tag = "ApiTags::Transactions"
    )]
    async fn update_transaction(
        &self,
        id: Path<String>,
        body: Json<TransactionRequest>,
    ) -> UpdateTransactionResponse {
        match self.service.update(&id.0, body.0.into()).await {
            Ok(transaction) => UpdateTransactionResponse::Ok(Json(transaction.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateTransactionResponse::BadRequest(json),
                    404 => UpdateTransactionResponse::NotFound(json),
                    _ => UpdateTransactionResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a transaction
    #[oai(
        path = "/api/Transaction/:id",
        method = "delete",
        tag = "ApiTags::Transactions"
    )]
    async fn delete_transaction(&self, id: Path<String>) -> DeleteTransactionResponse {
        match self.service.delete(&id.0).await {
            Ok(()) => DeleteTransactionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteTransactionResponse::BadRequest(json),
                    404 => DeleteTransactionResponse::NotFound(json),
                    _ => DeleteTransactionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTransactionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TransactionResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTransactionByIdResponse {
    #[oai(status = 200)]
    Ok(Json<TransactionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateTransactionResponse {
    #[oai(status = 201)]
    Created(Json<TransactionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateTransactionResponse {
    #[oai(status = 200)]
    Ok(Json<TransactionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteTransactionResponse {
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

    use business::domain::errors::RepositoryError;
    use business::domain::transaction::errors::TransactionError;
    use business::domain::transaction::model::{NewTransactionProps, Transaction};
    use business::domain::transaction::value_objects::TransactionType;

    mock! {
        pub Transactions {}

        #[async_trait]
        impl TransactionsService for Transactions {
            async fn get_all(&self) -> Result<Vec<Transaction>, TransactionError>;
            async fn get_by_id(&self, id: &str) -> Result<Transaction, TransactionError>;
            async fn get_for_user(&self, user_id: &str) -> Result<Vec<Transaction>, TransactionError>;
            async fn create(&self, props: NewTransactionProps) -> Result<Transaction, TransactionError>;
            async fn update(&self, id: &str, props: NewTransactionProps) -> Result<Transaction, TransactionError>;
            async fn delete(&self, id: &str) -> Result<(), TransactionError>;
        }
    }

    fn client(service: MockTransactions) -> TestClient<impl Endpoint> {
        TestClient::new(
            OpenApiService::new(TransactionApi::new(Arc::new(service)), "test", "1.0")
                .into_endpoint(),
        )
    }

    #[tokio::test]
    async fn should_record_debit_transaction() {
        let mut service = MockTransactions::new();
        service
            .expect_create()
            .withf(|props| props.transaction_type == TransactionType::Debit)
            .returning(|props| {
                Ok(Transaction {
                    id: Some("62a3f587102e921da1253d32".to_string()),
                    transaction_type: props.transaction_type,
                    amount: props.amount,
                    date_time: Utc::now(),
                    goal_id: None,
                    tag_ids: vec![],
                    user_id: props.user_id,
                })
            });

        let resp = client(service)
            .post("/api/Transaction")
            .body_json(&json!({
                "transactionType": "debit",
                "amount": 42.1,
                "dateTime": "2026-10-01T09:30:00Z",
                "userId": "62a29c15f4605c4c9fa7f306"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("transactionType").assert_string("debit");
        body.get("userId").assert_string("62a29c15f4605c4c9fa7f306");
    }

    #[tokio::test]
    async fn should_reject_unknown_transaction_type_before_service() {
        let service = MockTransactions::new();

        let resp = client(service)
            .post("/api/Transaction")
            .body_json(&json!({
                "transactionType": "refund",
                "amount": 1.0,
                "dateTime": "2026-10-01T09:30:00Z"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_user_id() {
        let mut service = MockTransactions::new();
        service
            .expect_get_for_user()
            .returning(|_| Err(TransactionError::Repository(RepositoryError::InvalidId)));

        let resp = client(service)
            .get("/api/Transaction/User/not-an-id")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
