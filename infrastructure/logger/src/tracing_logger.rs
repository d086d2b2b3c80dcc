use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under a single target,
/// so `RUST_LOG=guild_jobs=debug` selects them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "guild_jobs", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "guild_jobs", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "guild_jobs", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "guild_jobs", "{}", message);
    }
}
