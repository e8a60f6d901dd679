//! Input boundary between front-ends and the store.
//!
//! # Responsibility
//! - Turn raw form text into validated store mutations.
//!
//! # Invariants
//! - All gating happens here; the store trusts what it receives.

pub mod project_input;
