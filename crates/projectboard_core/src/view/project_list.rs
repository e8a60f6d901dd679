//! Status-filtered project list.
//!
//! # Responsibility
//! - Subscribe once to the store and keep the projects routed to this list.
//! - Produce the text a front-end renders (heading, element ids, titles).
//!
//! # Invariants
//! - A project lands in a list only when its status equals the list status.
//! - Snapshot order is preserved after filtering.

use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::ProjectStore;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Which list a view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    /// Status routed into this list.
    pub fn status(self) -> ProjectStatus {
        match self {
            Self::Active => ProjectStatus::Active,
            Self::Finished => ProjectStatus::Finished,
        }
    }
}

/// Keeps only projects whose status equals `status`, in snapshot order.
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| project.has_status(status))
        .cloned()
        .collect()
}

/// One rendered list of projects.
#[derive(Debug)]
pub struct ProjectList {
    kind: ListKind,
    assigned: RefCell<Vec<Project>>,
}

impl ProjectList {
    /// Creates a list without subscribing it.
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            assigned: RefCell::new(Vec::new()),
        }
    }

    /// Creates a list and subscribes it to `store`.
    ///
    /// The listener closure owns an `Rc` to the list, so it stays bound to
    /// this instance however the store invokes it.
    pub fn attach(kind: ListKind, store: &ProjectStore) -> Rc<Self> {
        let list = Rc::new(Self::new(kind));
        let receiver = Rc::clone(&list);
        store.add_listener(move |projects| receiver.assign(&projects));
        list
    }

    /// Replaces the assigned projects from a full snapshot.
    pub fn assign(&self, projects: &[Project]) {
        let relevant = filter_by_status(projects, self.kind.status());
        debug!(
            "event=list_rendered module=view status=ok list={} items={}",
            self.kind.status(),
            relevant.len()
        );
        *self.assigned.borrow_mut() = relevant;
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Element id of the list container, e.g. `active-projects`.
    pub fn element_id(&self) -> String {
        format!("{}-projects", self.kind.status())
    }

    /// Element id of the inner list, e.g. `active-projects-list`.
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.kind.status())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.kind.status().as_str().to_uppercase())
    }

    pub fn assigned_projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    /// Titles in render order.
    pub fn rendered_titles(&self) -> Vec<String> {
        self.assigned
            .borrow()
            .iter()
            .map(|project| project.title().to_string())
            .collect()
    }
}
