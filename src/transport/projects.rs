//! Project endpoints.

use serde_json::{Map, Value};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{CreateProject, ProjectResourceKind, UpdateProject};

pub(crate) fn list() -> RequestDescriptor {
    RequestDescriptor::get("projects")
}

pub(crate) fn get(project_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("projects/{project_id}"))
}

pub(crate) fn create(request: &CreateProject) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "name", &request.name);
    set_opt(&mut body, "description", request.description.as_deref());
    set_opt(&mut body, "avatar_id", request.avatar_id.as_deref());
    RequestDescriptor::post("projects").json(Value::Object(body))
}

pub(crate) fn update(project_id: u64, request: &UpdateProject) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "name", request.name.as_deref());
    set_opt(&mut body, "description", request.description.as_deref());
    set_opt(&mut body, "avatar_id", request.avatar_id.as_deref());
    RequestDescriptor::patch(format!("projects/{project_id}")).json(Value::Object(body))
}

pub(crate) fn delete(project_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("projects/{project_id}"))
}

pub(crate) fn resources(project_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("projects/{project_id}/resources"))
}

pub(crate) fn add_resource(
    project_id: u64,
    kind: ProjectResourceKind,
    resource_id: u64,
) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "resource_id", resource_id);
    RequestDescriptor::post(format!(
        "projects/{project_id}/resources/{}",
        kind.path_segment()
    ))
    .json(Value::Object(body))
}

pub(crate) fn move_resource(
    project_id: u64,
    to_project: u64,
    resource_id: u64,
    resource_type: &str,
) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "to_project", to_project);
    set(&mut body, "resource_id", resource_id);
    set(&mut body, "resource_type", resource_type);
    RequestDescriptor::put(format!("projects/{project_id}/resources/transfer"))
        .json(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::Method;
    use super::*;

    #[test]
    fn create_omits_absent_description() {
        let request = CreateProject::new("infra").unwrap();
        assert_eq!(create(&request).body().unwrap(), &json!({"name": "infra"}));
    }

    #[test]
    fn resources_addresses_the_nested_collection() {
        assert_eq!(resources(3).path(), "projects/3/resources");
    }

    #[test]
    fn add_resource_posts_to_the_kind_collection() {
        let descriptor = add_resource(3, ProjectResourceKind::DedicatedServer, 77);
        assert_eq!(descriptor.path(), "projects/3/resources/dedicated");
        assert_eq!(descriptor.body().unwrap(), &json!({"resource_id": 77}));
    }

    #[test]
    fn move_resource_puts_the_transfer_body() {
        let descriptor = move_resource(3, 8, 77, "server");
        assert_eq!(descriptor.method(), Method::Put);
        assert_eq!(descriptor.path(), "projects/3/resources/transfer");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"to_project": 8, "resource_id": 77, "resource_type": "server"})
        );
    }
}
