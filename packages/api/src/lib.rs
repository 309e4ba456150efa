//! # API crate — transport boundary for the personnel-management service
//!
//! Everything that touches the external HTTP API lives here: the typed
//! client, the response-shape decoding, the error taxonomy, the domain
//! models, and the pure helpers the views lean on (form validation,
//! dashboard row normalization, date formatting). The crate has no UI
//! dependency and every piece of logic in it is exercised by native unit
//! tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | One async method per endpoint; uniform bearer attachment; 401 → [`ApiError::Unauthorized`] |
//! | [`config`] | Base-URL configuration with a local-deployment default |
//! | [`envelope`] | Decode-once handling of the two response shapes (bare collection vs `{success, data, error}`) |
//! | [`error`] | Failure classes and user-facing message extraction |
//! | [`models`] | Records, write payloads, id normalization, status and access-type helpers |
//! | [`forms`] | Per-form validation and payload builders, run before any network call |
//! | [`dashboard`] | Normalization of the three request collections into one row shape |
//! | [`dates`] | Date-input seeding and display formatting |

pub mod client;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod envelope;
pub mod error;
pub mod forms;
pub mod models;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{AccessRequest, Assignment, Computer, Person, RecordId};
