//! Remote collection fetching.
//!
//! [`use_remote_list`] is the one pattern every listing page uses: fire the
//! read once on mount, expose `loading`/`error`/`items` as signals. Each
//! instance is independent — the dashboard runs three of them concurrently
//! and a failure in one neither blocks nor corrupts the others. There is no
//! automatic retry; navigating back to the page re-runs the fetch.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

use crate::session::{surface_error, use_session};

/// Observable state of one remotely fetched collection.
pub struct RemoteList<T: 'static> {
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
    pub items: Signal<Vec<T>>,
}

impl<T: 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteList<T> {}

impl<T: 'static> RemoteList<T> {
    pub fn loading(&self) -> bool {
        self.loading.cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.error.cloned()
    }
}

/// Fetch a collection once on mount.
pub fn use_remote_list<T, F>(load: impl FnMut() -> F + 'static) -> RemoteList<T>
where
    T: 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let error = use_signal(|| None);
    use_remote_list_with(error, load)
}

/// Variant taking a shared error slot. When several lists report into the
/// same slot, the first failure wins and later failures leave the message
/// untouched.
pub fn use_remote_list_with<T, F>(
    error: Signal<Option<String>>,
    mut load: impl FnMut() -> F + 'static,
) -> RemoteList<T>
where
    T: 'static,
    F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let session = use_session();
    let list = RemoteList {
        loading: use_signal(|| true),
        error,
        items: use_signal(Vec::new),
    };

    let mut state = list;
    let _loader = use_resource(move || {
        let request = load();
        async move {
            match request.await {
                Ok(items) => state.items.set(items),
                Err(err) => {
                    tracing::warn!("no se pudo cargar la colección: {err}");
                    if let Some(message) = surface_error(err, session) {
                        if state.error.peek().is_none() {
                            state.error.set(Some(message));
                        }
                    }
                }
            }
            state.loading.set(false);
        }
    });

    list
}
