use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::account::model::NewAccountProps;
use business::domain::account::service::AccountsService;

use crate::api::account::dto::{AccountRequest, AccountResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AccountApi {
    service: Arc<dyn AccountsService>,
}

impl AccountApi {
    pub fn new(service: Arc<dyn AccountsService>) -> Self {
        Self { service }
    }
}

/// Bank account management API
#[OpenApi]
impl AccountApi {
    /// List all accounts
    #[oai(path = "/api/Account", method = "get", tag = "ApiTags::Accounts")]
    async fn get_all_accounts(&self) -> GetAllAccountsResponse {
        match self.service.get_all().await {
            Ok(accounts) => {
                let responses: Vec<AccountResponse> =
                    accounts.into_iter().map(|a| a.into()).collect();
                GetAllAccountsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllAccountsResponse::InternalError(json)
            }
        }
    }

    /// Get an account by ID
    #[oai(path = "/api/Account/:id", method = "get", tag = "ApiTags::Accounts")]
    async fn get_account_by_id(&self, id: Path<String>) -> GetAccountByIdResponse {
        match self.service.get_by_id(&id.0).await {
            Ok(account) => GetAccountByIdResponse::Ok(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAccountByIdResponse::BadRequest(json),
                    404 => GetAccountByIdResponse::NotFound(json),
                    _ => GetAccountByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create an account
    #[oai(path = "/api/Account", method = "post", tag = "ApiTags::Accounts")]
    async fn create_account(&self, body: Json<AccountRequest>) -> CreateAccountResponse {
        let props: NewAccountProps = body.0.into();

        match self.service.create(props).await {
            Ok(account) => CreateAccountResponse::Created(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateAccountResponse::BadRequest(json),
                    _ => CreateAccountResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace an account
    #[oai(path = "/api/Account/:id", method = "put", tag = "ApiTags::Accounts")]
    async fn update_account(
        &self,
        id: Path<String>,
        body: Json<AccountRequest>,
    ) -> UpdateAccountResponse {
        match self.service.update(&id.0, body.0.into()).await {
            Ok(account) => UpdateAccountResponse::Ok(Json(account.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateAccountResponse::BadRequest(json),
                    404 => UpdateAccountResponse::NotFound(json),
                    _ => UpdateAccountResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an account
    #[oai(path = "/api/Account/:id", method = "delete", tag = "ApiTags::Accounts")]
    async fn delete_account(&self, id: Path<String>) -> DeleteAccountResponse {
        match self.service.delete(&id.0).await {
            Ok(()) => DeleteAccountResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteAccountResponse::BadRequest(json),
                    404 => DeleteAccountResponse::NotFound(json),
                    _ => DeleteAccountResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllAccountsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AccountResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAccountByIdResponse {
    #[oai(status = 200)]
    Ok(Json<AccountResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateAccountResponse {
    #[oai(status = 200)]
    Ok(Json<AccountResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateAccountResponse {
    #[oai(status = 201)]
    Created(Json<AccountResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteAccountResponse {
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

    use business::domain::account::errors::AccountError;
    use business::domain::account::model::Account;
    use business::domain::account::value_objects::AccountType;
    use business::domain::errors::RepositoryError;

    mock! {
        pub Accounts {}

        #[async_trait]
        impl AccountsService for Accounts {
            async fn get_all(&self) -> Result<Vec<Account>, AccountError>;
            async fn get_by_id(&self, id: &str) -> Result<Account, AccountError>;
            async fn create(&self, props: NewAccountProps) -> Result<Account, AccountError>;
            async fn update(&self, id: &str, props: NewAccountProps) -> Result<Account, AccountError>;
            async fn delete(&self, id: &str) -> Result<(), AccountError>;
        }
    }

    fn client(service: MockAccounts) -> TestClient<impl Endpoint> {
        TestClient::new(
            OpenApiService::new(AccountApi::new(Arc::new(service)), "test", "1.0")
                .into_endpoint(),
        )
    }

    fn account(id: &str) -> Account {
        Account {
            id: Some(id.to_string()),
            number: "0612-3456".to_string(),
            name: "Everyday".to_string(),
            balance: 120.5,
            account_type: AccountType::Checking,
            transaction_ids: vec![],
        }
    }

    #[tokio::test]
    async fn should_create_account_and_return_201() {
        let mut service = MockAccounts::new();
        service
            .expect_create()
            .withf(|props| props.name == "Everyday")
            .returning(|_| Ok(account("62a3f587102e921da1253d32")));

        let resp = client(service)
            .post("/api/Account")
            .body_json(&json!({
                "number": "0612-3456",
                "name": "Everyday",
                "balance": 120.5,
                "accountType": "checking"
            }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("id").assert_string("62a3f587102e921da1253d32");
        body.get("accountType").assert_string("checking");
    }

    #[tokio::test]
    async fn should_return_404_for_missing_account() {
        let mut service = MockAccounts::new();
        service
            .expect_get_by_id()
            .returning(|_| Err(AccountError::NotFound));

        let resp = client(service)
            .get("/api/Account/62a3f587102e921da1253d32")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("account.not_found");
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_id() {
        let mut service = MockAccounts::new();
        service
            .expect_delete()
            .returning(|_| Err(AccountError::Repository(RepositoryError::InvalidId)));

        let resp = client(service).delete("/api/Account/nope").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_500_when_store_fails() {
        let mut service = MockAccounts::new();
        service
            .expect_get_all()
            .returning(|| Err(AccountError::Repository(RepositoryError::DatabaseError)));

        let resp = client(service).get("/api/Account").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
