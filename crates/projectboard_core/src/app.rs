//! Application composition root.
//!
//! # Responsibility
//! - Create the one project store for the process.
//! - Wire forms and lists to that store.
//!
//! # Invariants
//! - `App::store` always returns the same store instance.
//! - Every form and list built here shares that store.

use crate::form::project_input::ProjectInput;
use crate::store::project_store::ProjectStore;
use crate::view::project_list::{ListKind, ProjectList};
use log::info;
use std::rc::Rc;

/// Owns the shared store and builds the components bound to it.
#[derive(Debug, Default)]
pub struct App {
    store: ProjectStore,
}

impl App {
    pub fn new() -> Self {
        info!("event=app_start module=app status=ok");
        Self {
            store: ProjectStore::new(),
        }
    }

    /// The single store owned by this application.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Builds a submission form bound to the shared store.
    pub fn project_input(&self) -> ProjectInput {
        ProjectInput::new(self.store.clone())
    }

    /// Builds and subscribes one status-filtered list.
    pub fn project_list(&self, kind: ListKind) -> Rc<ProjectList> {
        ProjectList::attach(kind, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::view::project_list::ListKind;

    #[test]
    fn store_accessor_returns_one_instance() {
        let app = App::new();
        assert!(app.store().ptr_eq(app.store()));
        assert!(std::ptr::eq(app.store(), app.store()));
    }

    #[test]
    fn components_share_the_app_store() {
        let app = App::new();
        let list = app.project_list(ListKind::Active);
        let mut form = app.project_input();
        form.set_title("Board");
        form.set_description("Kanban board");
        form.set_people("2");
        form.submit().expect("valid input should be accepted");

        assert_eq!(app.store().len(), 1);
        assert_eq!(list.rendered_titles(), vec!["Board"]);
    }
}
