//! Core logic for the project board.
//! Holds the reactive project store and the validation that gates it.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod rules;
pub mod store;
pub mod validation;
pub mod view;

pub use app::App;
pub use config::CoreConfig;
pub use form::project_input::{InputRejected, ProjectInput, RawProjectInput, REJECTION_MESSAGE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use rules::{check_project, FieldViolation, ProjectField};
pub use store::project_store::{Listener, ProjectStore, StoreError};
pub use validation::{check, validate, ConstraintViolation, FieldValue, Validatable};
pub use view::project_list::{filter_by_status, ListKind, ProjectList};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
