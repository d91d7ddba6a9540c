pub mod dependency_injection;
pub mod middleware;
pub mod server;
