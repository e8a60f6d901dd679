//! Reactive project state.
//!
//! # Responsibility
//! - Hold the project log for the lifetime of the application.
//! - Publish a snapshot to every subscriber after each mutation.
//!
//! # Invariants
//! - The store is a trusted sink: `add_project` never validates; gating
//!   happens at the form boundary or through `add_validated_project`.

pub mod project_store;
