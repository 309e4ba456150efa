//! Session context and centralized authorization handling.
//!
//! The bearer credential is request-scoped state: views read it from a
//! context signal and hand it to [`api_client`] per call, instead of every
//! call site reaching into browser storage. On the web the provider seeds
//! the signal from `localStorage` (key `jwtToken`) so a reload keeps the
//! session; on native targets storage is a no-op and the session starts
//! empty. A 401 from any call funnels through [`surface_error`] into
//! [`expire_session`], the single expiry path.

use api::{ApiClient, ApiConfig, ApiError};
use dioxus::prelude::*;

/// The signed-in state of the app.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Get the current session. Panics outside a [`SessionProvider`] subtree.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| Session {
        token: storage::load_token(),
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Build an API client carrying the session's bearer credential.
pub fn api_client(session: &Session) -> ApiClient {
    ApiClient::new(ApiConfig::default()).with_token(session.token.clone())
}

pub fn sign_in(mut session: Signal<Session>, token: String) {
    storage::store_token(&token);
    session.set(Session { token: Some(token) });
}

pub fn sign_out(mut session: Signal<Session>) {
    storage::clear_token();
    session.set(Session::default());
}

/// Clear the credential and return to the login page. Every 401 lands here.
pub fn expire_session(session: Signal<Session>) {
    tracing::warn!("sesión expirada o no autorizada; redirigiendo al login");
    sign_out(session);
    redirect_to_login();
}

/// Funnel an API failure into the session-expiry path or an inline message.
/// Returns `None` when the session was expired and the view is going away.
pub fn surface_error(error: ApiError, session: Signal<Session>) -> Option<String> {
    match error {
        ApiError::Unauthorized => {
            expire_session(session);
            None
        }
        other => Some(other.user_message()),
    }
}

/// Redirect to the login page when no session is present. Call once at the
/// top of every view behind the login.
pub fn use_session_guard() {
    let session = use_session();
    use_effect(move || {
        if !session().is_authenticated() {
            redirect_to_login();
        }
    });
}

fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod storage {
    const TOKEN_KEY: &str = "jwtToken";

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load_token() -> Option<String> {
        local_storage()?
            .get_item(TOKEN_KEY)
            .ok()?
            .filter(|token| !token.is_empty())
    }

    pub fn store_token(token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    pub fn clear_token() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod storage {
    pub fn load_token() -> Option<String> {
        None
    }

    pub fn store_token(_token: &str) {}

    pub fn clear_token() {}
}
