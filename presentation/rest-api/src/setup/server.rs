use poem::{
    EndpointExt, IntoEndpoint, Route, Server as PoemServer, endpoint::BoxEndpoint,
    listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::config::{app_config::AppConfig, cors_config::init_cors};
use crate::setup::dependency_injection::DependencyContainer;
use crate::setup::middleware::{Authorization, HttpsRedirect};

const API_TITLE: &str = "CommBank Server API";

pub struct Server;

impl Server {
    /// Assembles the HTTP pipeline.
    ///
    /// Outside in: tracing, CORS, HTTPS redirection, then the routes. The controllers
    /// additionally sit behind the authorization stage; API docs are only mounted when
    /// the deployment mode allows it.
    pub fn build_app(config: &AppConfig, container: DependencyContainer) -> BoxEndpoint<'static> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.account_api,
                container.auth_api,
                container.goal_api,
                container.tag_api,
                container.transaction_api,
                container.user_api,
            ),
            API_TITLE,
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));

        let docs = config
            .environment
            .exposes_api_docs()
            .then(|| (api_service.swagger_ui(), api_service.spec_endpoint()));

        let api = api_service
            .into_endpoint()
            .with(Authorization::default());

        let mut app = Route::new().nest("/", api);
        if let Some((ui, spec)) = docs {
            app = app.nest("/docs", ui).nest("/openapi.json", spec);
        }

        if config.server.https_port.is_none() {
            tracing::warn!("HTTPS_PORT is not set; plain HTTP requests will not be redirected");
        }

        app.with(HttpsRedirect::new(config.server.https_port))
            .with(init_cors())
            .with(Tracing)
            .map_to_response()
            .boxed()
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::build_app(&config, container);

        tracing::info!(environment = %config.environment, "Server running at http://{}", addr);
        if config.environment.exposes_api_docs() {
            tracing::info!("Swagger UI at http://{}/docs", addr);
            tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        }

        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::{StatusCode, header};
    use poem::test::TestClient;

    use crate::config::environment::DeploymentMode;
    use crate::config::server_config::ServerConfig;
    use crate::setup::dependency_injection::{ServiceRegistry, tests::offline_database};

    fn config(environment: DeploymentMode, https_port: Option<u16>) -> AppConfig {
        AppConfig {
            server: ServerConfig {
                ip: "127.0.0.1".to_string(),
                port: 8080,
                https_port,
            },
            environment,
        }
    }

    async fn client(environment: DeploymentMode) -> TestClient<BoxEndpoint<'static>> {
        let registry = ServiceRegistry::new(&offline_database().await);
        let container = DependencyContainer::new(&registry);
        TestClient::new(Server::build_app(&config(environment, None), container))
    }

    #[tokio::test]
    async fn should_hide_api_docs_in_production() {
        let cli = client(DeploymentMode::Production).await;

        cli.get("/docs")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.get("/openapi.json")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_serve_api_docs_in_development() {
        let cli = client(DeploymentMode::Development).await;

        cli.get("/docs").send().await.assert_status_is_ok();
        let resp = cli.get("/openapi.json").send().await;
        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value()
            .object()
            .get("info")
            .object()
            .get("title")
            .assert_string(API_TITLE);
    }

    #[tokio::test]
    async fn should_serve_health_check() {
        let cli = client(DeploymentMode::Production).await;

        cli.get("/health").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_accept_preflight_from_any_origin() {
        let cli = client(DeploymentMode::Production).await;

        let resp = cli
            .options("/api/Goal")
            .header(header::ORIGIN, "https://some-frontend.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
            .send()
            .await;

        assert!(resp.0.status().is_success());
        resp.assert_header_exist(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    }

    #[tokio::test]
    async fn should_redirect_plain_http_when_https_port_configured() {
        let registry = ServiceRegistry::new(&offline_database().await);
        let container = DependencyContainer::new(&registry);
        let cli = TestClient::new(Server::build_app(
            &config(DeploymentMode::Production, Some(443)),
            container,
        ));

        let resp = cli
            .get("/health")
            .header(header::HOST, "api.commbank.example")
            .send()
            .await;

        resp.assert_status(StatusCode::TEMPORARY_REDIRECT);
        resp.assert_header(header::LOCATION, "https://api.commbank.example/health");
    }
}
