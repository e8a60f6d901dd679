//! Domain model for recorded projects.
//!
//! # Responsibility
//! - Define the record type shared by the store, the views and the form.
//!
//! # Invariants
//! - Records are immutable after construction.
//! - Every record carries one stable `ProjectId`.

pub mod project;
