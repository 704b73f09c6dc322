pub mod render;
pub mod routes;
pub mod settings;
pub mod upgrade;

use std::future::Future;

/// Runs a future on a single-threaded runtime; the dispatcher is not `Send`
pub(crate) fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
