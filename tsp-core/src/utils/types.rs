use std::sync::Arc;

/// Alias to a scalar floating type used for weights and costs.
pub type Float = f64;

/// A logger type which is called with various information regarding the work done around solvers.
/// Solvers themselves never log: they are pure computations which return their results or errors.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_| {})
}
