//! Tokio Runtime Bridge
//!
//! The runtime itself is synchronous event dispatch; the async edges
//! (form submission awaits, status auto-clear timers) run on a shared
//! tokio runtime initialized on first use.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Block on a future synchronously (application startup)
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

/// Spawn a detached task (timers). The task runs independently and its
/// result is not awaited.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future);
}
