//! Callback-style consumption of client operations.
//!
//! Every [`Client`](crate::Client) operation is an `async fn`. These adapters
//! hand the finished `Result` to a callback instead, so the two styles share
//! all validation and network logic.
//!
//! ```no_run
//! # async fn demo() -> Result<(), tdf_api::Error> {
//! use tdf_api::{callback, Client, CurrentStatusOptions};
//!
//! let client = Client::new()?;
//! let handle = callback::spawn_notify(
//!     async move { client.current_status(&CurrentStatusOptions::default()).await },
//!     |result| match result {
//!         Ok(status) => println!("{}", status),
//!         Err(err) => eprintln!("{}", err),
//!     },
//! );
//! handle.await.ok();
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use tokio::task::JoinHandle;

/// Awaits `operation` and passes its outcome to `callback`.
pub async fn notify<T, E, Fut, F>(operation: Fut, callback: F)
where
    Fut: Future<Output = Result<T, E>>,
    F: FnOnce(Result<T, E>),
{
    callback(operation.await)
}

/// Runs `operation` on the tokio runtime and passes its outcome to
/// `callback` when it completes. Must be called from within a runtime.
pub fn spawn_notify<T, E, Fut, F>(operation: Fut, callback: F) -> JoinHandle<()>
where
    T: Send + 'static,
    E: Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
    F: FnOnce(Result<T, E>) + Send + 'static,
{
    tokio::spawn(notify(operation, callback))
}
