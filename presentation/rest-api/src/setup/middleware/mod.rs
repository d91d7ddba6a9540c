pub mod authorization;
pub mod https_redirect;

pub use authorization::Authorization;
pub use https_redirect::HttpsRedirect;
