//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by the board lists.
//! - Keep the record immutable once constructed.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused within one store lifetime.
//! - Fields have no setters; changes are expressed as new records.
//! - Field constraints (non-empty title, headcount range) are enforced at the
//!   form boundary, not here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
pub type ProjectId = Uuid;

/// Lifecycle state used to route a project into a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly recorded work. Every store-created project starts here.
    Active,
    /// Completed work.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase label, also used for list element ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl Project {
    /// Creates a project with caller-provided identity and status.
    ///
    /// The store calls this with an id it generated itself; import and
    /// fixture paths use it for records that already exist elsewhere.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
        status: ProjectStatus,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned.
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns whether this project belongs to the given list.
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
