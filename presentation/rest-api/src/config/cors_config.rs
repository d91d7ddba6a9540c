use poem::middleware::Cors;

/// Initialize CORS middleware for cross-origin requests
///
/// Security note: this policy is fully permissive. Any origin, any method and any
/// request header is accepted, and credentials are not allowed. Browser clients are
/// served from arbitrary hosts, so no allow-list is configured. Tighten this with
/// `allow_origins` before exposing endpoints that rely on ambient credentials.
pub fn init_cors() -> Cors {
    // An empty allow-list in poem means "allow everything".
    Cors::new().allow_credentials(false)
}
