//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{
    api_client, expire_session, sign_in, sign_out, surface_error, use_session, use_session_guard,
    Session, SessionProvider,
};

mod fetch;
pub use fetch::{use_remote_list, use_remote_list_with, RemoteList};

mod form;
pub use form::{use_form_submit, FormSubmit, RecordLoad};

pub mod dialog;

pub mod components;
pub use components::{
    ActionCard, CheckboxGroup, ErrorText, PageCard, SelectField, StatusBadge, SubmitRow, TextField,
};
