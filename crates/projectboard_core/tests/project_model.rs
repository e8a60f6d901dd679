use projectboard_core::{Project, ProjectStatus};
use uuid::Uuid;

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let project = Project::with_id(id, "Board", "Kanban board", 3, ProjectStatus::Finished);

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Board");
    assert_eq!(json["description"], "Kanban board");
    assert_eq!(json["people"], 3);
    assert_eq!(json["status"], "finished");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn accessors_expose_constructor_values() {
    let id = Uuid::new_v4();
    let project = Project::with_id(id, "Board", "Kanban board", 3, ProjectStatus::Active);
    assert_eq!(project.id(), id);
    assert_eq!(project.title(), "Board");
    assert_eq!(project.description(), "Kanban board");
    assert_eq!(project.people(), 3);
    assert!(project.has_status(ProjectStatus::Active));
}
