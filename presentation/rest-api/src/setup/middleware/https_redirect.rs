use poem::http::{header, uri::Scheme};
use poem::web::Redirect;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};

/// Answers plain-HTTP requests with a `307` to the same URL on HTTPS.
///
/// TLS is terminated in front of the service, so a request counts as secure when its
/// URI scheme is `https` or the proxy sent `X-Forwarded-Proto: https`. Without an
/// HTTPS port every request passes through.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsRedirect {
    https_port: Option<u16>,
}

impl HttpsRedirect {
    pub fn new(https_port: Option<u16>) -> Self {
        Self { https_port }
    }
}

impl<E: Endpoint> Middleware<E> for HttpsRedirect {
    type Output = HttpsRedirectEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        HttpsRedirectEndpoint {
            inner: ep,
            https_port: self.https_port,
        }
    }
}

pub struct HttpsRedirectEndpoint<E> {
    inner: E,
    https_port: Option<u16>,
}

impl<E: Endpoint> Endpoint for HttpsRedirectEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        if let Some(port) = self.https_port
            && !is_secure(&req)
            && let Some(location) = https_location(&req, port)
        {
            return Ok(Redirect::temporary(location).into_response());
        }

        self.inner.call(req).await.map(IntoResponse::into_response)
    }
}

/// TLS listeners tag the request scheme; origin-form URIs never carry one.
fn is_secure(req: &Request) -> bool {
    *req.scheme() == Scheme::HTTPS
        || req
            .header("x-forwarded-proto")
            .is_some_and(|proto| proto.eq_ignore_ascii_case("https"))
}

fn https_location(req: &Request, port: u16) -> Option<String> {
    let authority = req
        .header(header::HOST)
        .or_else(|| req.uri().authority().map(|a| a.as_str()))?;
    let host = strip_port(authority);
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Some(if port == 443 {
        format!("https://{}{}", host, path)
    } else {
        format!("https://{}:{}{}", host, port, path)
    })
}

fn strip_port(authority: &str) -> &str {
    // Bracketed IPv6 literal, e.g. "[::1]:8080".
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    authority
        .split_once(':')
        .map_or(authority, |(host, _)| host)
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::web::{LocalAddr, RemoteAddr};
    use poem::{Body, EndpointExt, RequestParts, handler};

    #[handler]
    fn ok() -> &'static str {
        "ok"
    }

    #[tokio::test]
    async fn should_redirect_plain_http_to_default_https_port() {
        let cli = TestClient::new(ok.with(HttpsRedirect::new(Some(443))));

        let resp = cli
            .get("/api/Goal?user=1")
            .header(header::HOST, "commbank.example:8080")
            .send()
            .await;

        resp.assert_status(StatusCode::TEMPORARY_REDIRECT);
        resp.assert_header(header::LOCATION, "https://commbank.example/api/Goal?user=1");
    }

    #[tokio::test]
    async fn should_keep_non_default_https_port_in_location() {
        let cli = TestClient::new(ok.with(HttpsRedirect::new(Some(5001))));

        let resp = cli
            .get("/health")
            .header(header::HOST, "localhost:5000")
            .send()
            .await;

        resp.assert_status(StatusCode::TEMPORARY_REDIRECT);
        resp.assert_header(header::LOCATION, "https://localhost:5001/health");
    }

    #[tokio::test]
    async fn should_pass_requests_forwarded_over_https() {
        let cli = TestClient::new(ok.with(HttpsRedirect::new(Some(443))));

        let resp = cli
            .get("/health")
            .header(header::HOST, "commbank.example")
            .header("X-Forwarded-Proto", "https")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_text("ok").await;
    }

    fn request_over_tls(path: &str) -> Request {
        let (parts, ()) = poem::http::Request::builder()
            .uri(path)
            .header(header::HOST, "commbank.example")
            .body(())
            .unwrap()
            .into_parts();
        let parts = RequestParts::from((
            parts,
            LocalAddr::default(),
            RemoteAddr::default(),
            Scheme::HTTPS,
        ));
        Request::from_parts(parts, Body::empty())
    }

    #[tokio::test]
    async fn should_pass_origin_form_requests_accepted_over_tls() {
        let ep = ok.with(HttpsRedirect::new(Some(443)));

        let resp = ep.call(request_over_tls("/health")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn should_pass_everything_when_no_https_port() {
        let cli = TestClient::new(ok.with(HttpsRedirect::new(None)));

        let resp = cli
            .get("/health")
            .header(header::HOST, "commbank.example")
            .send()
            .await;

        resp.assert_status_is_ok();
    }

    #[test]
    fn should_strip_port_from_ipv6_authority() {
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
        assert_eq!(strip_port("localhost"), "localhost");
    }
}
