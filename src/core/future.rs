use std::future::Future;
use std::panic::UnwindSafe;

use futures::future::FutureExt;

use super::option::Option;
use super::panic::{caught, Panic};
use super::result::Result;

impl<T, E> Result<T, E> {
    /// Awaits `future` and wraps its output.
    ///
    /// Works like [`Result::from`], but for asynchronous computations: a
    /// panic raised while the future is polled becomes `Err`.
    pub async fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + UnwindSafe,
        E: From<Panic>,
    {
        future
            .catch_unwind()
            .await
            .map_err(caught)
            .map_err(<E as From<Panic>>::from)
            .into()
    }
}

impl<T> Option<T> {
    /// Awaits `future`, yielding `None` if it panics.
    pub async fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = T> + UnwindSafe,
    {
        future.catch_unwind().await.map_err(caught).ok().into()
    }
}
