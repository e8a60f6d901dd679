//! In-memory reactive project store.
//!
//! # Responsibility
//! - Own the ordered project log and the ordered listener registry.
//! - Notify every listener synchronously after each append.
//!
//! # Invariants
//! - Insertion order is list order; registration order is notification order.
//! - Listeners receive owned snapshots, never the live log.
//! - One snapshot is captured per `add_project` call, before any listener
//!   runs; every listener of that pass gets a clone of it.
//! - The listener registry is captured together with the snapshot, so a
//!   listener registered mid-pass first hears about the next mutation.
//! - No `RefCell` borrow is held while listeners run, which makes nested
//!   `add_project`/`add_listener` calls from inside a listener safe. A nested
//!   `add_project` completes its own full pass before the outer pass resumes.
//! - Project ids are unique for the lifetime of the store.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::rules::{check_project, FieldViolation};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::rc::Rc;
use uuid::Uuid;

/// Callback receiving a snapshot of all projects after every mutation.
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

/// Errors from the strict store entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Submitted fields failed project rules; nothing was stored.
    InvalidInput(FieldViolation),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "invalid project input: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
        }
    }
}

impl From<FieldViolation> for StoreError {
    fn from(value: FieldViolation) -> Self {
        Self::InvalidInput(value)
    }
}

#[derive(Default)]
struct StoreState {
    projects: RefCell<Vec<Project>>,
    ids: RefCell<HashSet<ProjectId>>,
    listeners: RefCell<Vec<Listener>>,
}

/// Shared handle to one project store.
///
/// Cloning the handle shares the same store; use [`ProjectStore::ptr_eq`] to
/// compare identity. The application creates exactly one store at its
/// composition root and hands out clones.
#[derive(Clone, Default)]
pub struct ProjectStore {
    state: Rc<StoreState>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether both handles point at the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    /// Registers a listener. No deduplication, no removal.
    pub fn add_listener(&self, listener: impl Fn(Vec<Project>) + 'static) {
        let mut listeners = self.state.listeners.borrow_mut();
        listeners.push(Rc::new(listener));
        debug!(
            "event=listener_added module=store status=ok listeners={}",
            listeners.len()
        );
    }

    /// Appends a new active project and notifies all listeners.
    ///
    /// Trusts the caller to have validated the fields; see
    /// [`ProjectStore::add_validated_project`] for the checked variant.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project_id = self.next_id();
        let project = Project::with_id(
            project_id,
            title,
            description,
            people,
            ProjectStatus::Active,
        );

        let (snapshot, listeners) = {
            let mut projects = self.state.projects.borrow_mut();
            projects.push(project);
            (projects.clone(), self.state.listeners.borrow().clone())
        };

        info!(
            "event=project_added module=store status=ok project_id={} total={} listeners={}",
            project_id,
            snapshot.len(),
            listeners.len()
        );

        for listener in &listeners {
            listener(snapshot.clone());
        }

        project_id
    }

    /// Checks project rules before appending.
    ///
    /// # Errors
    /// - Returns `StoreError::InvalidInput` naming the first failing field.
    ///   State and listeners are untouched in that case.
    pub fn add_validated_project(
        &self,
        title: &str,
        description: &str,
        people: u32,
    ) -> Result<ProjectId, StoreError> {
        if let Err(err) = check_project(title, description, f64::from(people)) {
            warn!(
                "event=project_rejected module=store status=error field={} constraint={}",
                err.field.as_str(),
                err.violation.constraint()
            );
            return Err(err.into());
        }
        Ok(self.add_project(title, description, people))
    }

    /// Returns an owned copy of all projects in insertion order.
    pub fn snapshot(&self) -> Vec<Project> {
        self.state.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.state.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }

    fn next_id(&self) -> ProjectId {
        let mut ids = self.state.ids.borrow_mut();
        loop {
            let candidate = Uuid::new_v4();
            if ids.insert(candidate) {
                return candidate;
            }
        }
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectStore, StoreError};
    use crate::rules::ProjectField;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn clones_share_one_store() {
        let store = ProjectStore::new();
        let handle = store.clone();
        handle.add_project("Board", "Kanban board", 2);

        assert!(store.ptr_eq(&handle));
        assert_eq!(store.len(), 1);
        assert!(!store.ptr_eq(&ProjectStore::new()));
    }

    #[test]
    fn listener_registered_mid_pass_waits_for_next_mutation() {
        let store = ProjectStore::new();
        let late_calls = Rc::new(Cell::new(0));
        let registered = Rc::new(Cell::new(false));

        let inner_store = store.clone();
        let inner_calls = Rc::clone(&late_calls);
        let inner_registered = Rc::clone(&registered);
        store.add_listener(move |_| {
            if !inner_registered.replace(true) {
                let calls = Rc::clone(&inner_calls);
                inner_store.add_listener(move |_| calls.set(calls.get() + 1));
            }
        });

        store.add_project("First", "first one", 1);
        assert_eq!(late_calls.get(), 0);
        assert_eq!(store.listener_count(), 2);

        store.add_project("Second", "second one", 1);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn validated_entry_rejects_without_side_effects() {
        let store = ProjectStore::new();
        let notified = Rc::new(Cell::new(false));
        let flag = Rc::clone(&notified);
        store.add_listener(move |_| flag.set(true));

        let err = store
            .add_validated_project("Board", "abc", 2)
            .expect_err("short description must be rejected");
        let StoreError::InvalidInput(violation) = err;
        assert_eq!(violation.field, ProjectField::Description);
        assert!(store.is_empty());
        assert!(!notified.get());

        let err = store
            .add_validated_project("Board", "Kanban board", 0)
            .expect_err("zero headcount must be rejected");
        assert!(err.to_string().contains("people"));
    }

    #[test]
    fn validated_entry_appends_and_notifies() {
        let store = ProjectStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.add_listener(move |projects| sink.borrow_mut().push(projects.len()));

        let id = store
            .add_validated_project("Board", "Kanban board", 5)
            .expect("valid input should be stored");
        assert_eq!(store.snapshot()[0].id(), id);
        assert_eq!(*seen.borrow(), vec![1]);
    }
}
