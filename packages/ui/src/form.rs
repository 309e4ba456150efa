//! Form submission state shared by the create and edit pages.
//!
//! Every form drives the same machine: validate synchronously, and either
//! show the message without touching the network, or send the one request
//! with the submit control disabled, then navigate away on success or stay
//! put with the extracted server message on failure.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;

use crate::dialog;
use crate::session::{surface_error, Session};

/// States of an edit form's initial record fetch. `Ready` gates submission:
/// until the record arrives, there is nothing to update.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordLoad<T> {
    Loading,
    Ready(T),
    NotFound,
    Failed(String),
}

impl<T> RecordLoad<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, RecordLoad::Ready(_))
    }
}

/// Submission state of one form.
pub struct FormSubmit {
    pub busy: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl Clone for FormSubmit {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for FormSubmit {}

pub fn use_form_submit() -> FormSubmit {
    FormSubmit {
        busy: use_signal(|| false),
        error: use_signal(|| None),
    }
}

impl FormSubmit {
    pub fn busy(&self) -> bool {
        self.busy.cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.error.cloned()
    }

    /// Run one submission attempt.
    ///
    /// A failed validation sets the inline message and makes no request. A
    /// validated payload is sent through `send`; on success the user gets
    /// `confirmation` and `on_success` navigates away, on failure the
    /// extracted message lands in `error` and the user stays on the page.
    /// A 401 expires the session instead of showing a message.
    pub fn run<P, Fut>(
        mut self,
        session: Signal<Session>,
        validated: Result<P, String>,
        send: impl FnOnce(P) -> Fut,
        confirmation: &'static str,
        on_success: impl FnOnce() + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let payload = match validated {
            Ok(payload) => payload,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let request = send(payload);
        self.error.set(None);
        self.busy.set(true);
        spawn(async move {
            match request.await {
                Ok(()) => {
                    self.busy.set(false);
                    dialog::alert(confirmation);
                    on_success();
                }
                Err(err) => {
                    self.busy.set(false);
                    if let Some(message) = surface_error(err, session) {
                        self.error.set(Some(message));
                    }
                }
            }
        });
    }
}
