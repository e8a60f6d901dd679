//! Front-end agnostic views over store snapshots.
//!
//! # Responsibility
//! - Route projects into the active and finished lists.
//! - Expose render text without depending on any UI toolkit.

pub mod project_list;
