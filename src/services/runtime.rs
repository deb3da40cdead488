//! Tokio Runtime Bridge
//!
//! GPUI drives its own executor, but reqwest needs tokio. Catalog work is spawned
//! onto a process-wide tokio runtime and results travel back over channels.
//!
//! ## Pattern
//!
//! ```text
//! GPUI listener
//!       │ ServiceCommand (flume)
//!       ▼
//! spawn_named_in_tokio(command loop)
//!       │ AppEvent (flume)
//!       ▼
//! Workspace event pump ─▶ entity.update()
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .thread_name("artwork-table-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Spawn a task in the tokio runtime, keeping its handle for cancellation
pub fn spawn_in_tokio<F>(future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future)
}

/// Spawn a detached task with a name (for debugging)
pub fn spawn_named_in_tokio<F>(name: &'static str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::debug!("Spawning tokio task: {}", name);
    get_runtime().spawn(async move {
        future.await;
        tracing::debug!("Tokio task completed: {}", name);
    });
}
