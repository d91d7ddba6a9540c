use std::sync::Arc;

use poem::http::StatusCode;
use poem::{Endpoint, Error, IntoResponse, Middleware, Request, Response, Result};

/// Decides whether a request may reach the controllers.
pub trait AuthorizationPolicy: Send + Sync {
    fn authorize(&self, req: &Request) -> bool;
}

/// Admits every request. Endpoints currently carry no access requirements.
pub struct AllowAnonymous;

impl AuthorizationPolicy for AllowAnonymous {
    fn authorize(&self, _req: &Request) -> bool {
        true
    }
}

/// Authorization stage placed in front of routing. Rejected requests get `403`.
#[derive(Clone)]
pub struct Authorization {
    policy: Arc<dyn AuthorizationPolicy>,
}

impl Authorization {
    pub fn new(policy: Arc<dyn AuthorizationPolicy>) -> Self {
        Self { policy }
    }
}

impl Default for Authorization {
    fn default() -> Self {
        Self::new(Arc::new(AllowAnonymous))
    }
}

impl<E: Endpoint> Middleware<E> for Authorization {
    type Output = AuthorizationEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        AuthorizationEndpoint {
            inner: ep,
            policy: Arc::clone(&self.policy),
        }
    }
}

pub struct AuthorizationEndpoint<E> {
    inner: E,
    policy: Arc<dyn AuthorizationPolicy>,
}

impl<E: Endpoint> Endpoint for AuthorizationEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if !self.policy.authorize(&req) {
            tracing::warn!(path = %req.uri().path(), "Request rejected by authorization policy");
            return Err(Error::from_status(StatusCode::FORBIDDEN));
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}
