use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards service log lines to `tracing` under the `commbank::service` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "commbank::service", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "commbank::service", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "commbank::service", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "commbank::service", "{}", message);
    }
}
