//! SSH key endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{CreateSshKey, UpdateSshKey};

pub(crate) fn list() -> RequestDescriptor {
    RequestDescriptor::get("ssh-keys")
}

pub(crate) fn get(ssh_key_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("ssh-keys/{ssh_key_id}"))
}

pub(crate) fn create(request: &CreateSshKey) -> RequestDescriptor {
    RequestDescriptor::post("ssh-keys").json(json!({
        "name": request.name,
        "body": request.body,
        "is_default": request.is_default,
    }))
}

pub(crate) fn update(ssh_key_id: u64, request: &UpdateSshKey) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "name", request.name.as_deref());
    set_opt(&mut body, "body", request.body.as_deref());
    set_opt(&mut body, "is_default", request.is_default);
    RequestDescriptor::patch(format!("ssh-keys/{ssh_key_id}")).json(Value::Object(body))
}

pub(crate) fn delete(ssh_key_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("ssh-keys/{ssh_key_id}"))
}

pub(crate) fn add_to_server(server_id: u64, ssh_key_ids: &[u64]) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "ssh_key_ids", ssh_key_ids);
    RequestDescriptor::post(format!("servers/{server_id}/ssh-keys")).json(Value::Object(body))
}

pub(crate) fn remove_from_server(server_id: u64, ssh_key_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("servers/{server_id}/ssh-keys/{ssh_key_id}"))
}

#[cfg(test)]
mod tests {
    use super::super::Method;
    use super::*;

    #[test]
    fn create_always_sends_all_three_fields() {
        let request = CreateSshKey::new("laptop", "ssh-ed25519 AAAA...", false).unwrap();
        let descriptor = create(&request);
        assert_eq!(descriptor.path(), "ssh-keys");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({
                "name": "laptop",
                "body": "ssh-ed25519 AAAA...",
                "is_default": false,
            })
        );
    }

    #[test]
    fn server_attachment_uses_the_server_scoped_path() {
        let descriptor = add_to_server(12, &[1, 2]);
        assert_eq!(descriptor.method(), Method::Post);
        assert_eq!(descriptor.path(), "servers/12/ssh-keys");
        assert_eq!(descriptor.body().unwrap(), &json!({"ssh_key_ids": [1, 2]}));

        let descriptor = remove_from_server(12, 2);
        assert_eq!(descriptor.path(), "servers/12/ssh-keys/2");
        assert!(descriptor.body().is_none());
    }
}
