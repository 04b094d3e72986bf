//! Cloud server endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{CreateServer, ServerAction, ServerHardware, UpdateServer};

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("servers")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(server_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("servers/{server_id}"))
}

pub(crate) fn create(request: &CreateServer) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "name", &request.name);
    set(&mut body, "os_id", request.os_id);
    set(&mut body, "is_ddos_guard", request.is_ddos_guard);
    set(&mut body, "bandwidth", request.bandwidth);
    match &request.hardware {
        ServerHardware::Preset(preset_id) => set(&mut body, "preset_id", preset_id),
        ServerHardware::Configurator(configurator) => set(
            &mut body,
            "configurator",
            json!({
                "configurator_id": configurator.configurator_id,
                "disk": configurator.disk,
                "cpu": configurator.cpu,
                "ram": configurator.ram,
            }),
        ),
    }
    set_opt(&mut body, "software_id", request.software_id);
    set_opt(&mut body, "avatar_id", request.avatar_id.as_deref());
    set_opt(&mut body, "comment", request.comment.as_deref());
    if !request.ssh_key_ids.is_empty() {
        set(&mut body, "ssh_keys_ids", &request.ssh_key_ids);
    }
    set_opt(&mut body, "is_local_network", request.is_local_network);
    RequestDescriptor::post("servers").json(Value::Object(body))
}

pub(crate) fn update(server_id: u64, request: &UpdateServer) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "name", request.name.as_deref());
    set_opt(&mut body, "os_id", request.os_id);
    set_opt(&mut body, "bandwidth", request.bandwidth);
    set_opt(&mut body, "preset_id", request.preset_id);
    if let Some(configurator) = &request.configurator {
        set(
            &mut body,
            "configurator",
            json!({
                "configurator_id": configurator.configurator_id,
                "disk": configurator.disk,
                "cpu": configurator.cpu,
                "ram": configurator.ram,
            }),
        );
    }
    set_opt(&mut body, "software_id", request.software_id);
    set_opt(&mut body, "avatar_id", request.avatar_id.as_deref());
    set_opt(&mut body, "comment", request.comment.as_deref());
    RequestDescriptor::patch(format!("servers/{server_id}")).json(Value::Object(body))
}

pub(crate) fn delete(server_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("servers/{server_id}"))
}

pub(crate) fn action(server_id: u64, action: ServerAction) -> RequestDescriptor {
    RequestDescriptor::post(format!("servers/{server_id}/action"))
        .json(json!({"action": action.as_str()}))
}

pub(crate) fn disks(server_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("servers/{server_id}/disks"))
}

pub(crate) fn disk(server_id: u64, disk_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("servers/{server_id}/disks/{disk_id}"))
}

pub(crate) fn create_disk(server_id: u64, size: u32) -> RequestDescriptor {
    RequestDescriptor::post(format!("servers/{server_id}/disks")).json(json!({"size": size}))
}

pub(crate) fn resize_disk(server_id: u64, disk_id: u64, size: u32) -> RequestDescriptor {
    RequestDescriptor::patch(format!("servers/{server_id}/disks/{disk_id}"))
        .json(json!({"size": size}))
}

pub(crate) fn delete_disk(server_id: u64, disk_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("servers/{server_id}/disks/{disk_id}"))
}

#[cfg(test)]
mod tests {
    use super::super::{Method, test_support::body_keys};
    use super::*;
    use crate::domain::Configurator;

    #[test]
    fn create_sends_exactly_the_set_fields() {
        let request = CreateServer::builder("srv1", 1, 500, ServerHardware::Preset(42))
            .ddos_guard(false)
            .build()
            .unwrap();
        let descriptor = create(&request);

        assert_eq!(descriptor.method(), Method::Post);
        assert_eq!(descriptor.path(), "servers");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({
                "name": "srv1",
                "os_id": 1,
                "is_ddos_guard": false,
                "bandwidth": 500,
                "preset_id": 42,
            })
        );
        assert_eq!(
            body_keys(&descriptor),
            ["bandwidth", "is_ddos_guard", "name", "os_id", "preset_id"]
        );
    }

    #[test]
    fn create_with_configurator_nests_the_hardware_object() {
        let request = CreateServer::builder(
            "srv2",
            2,
            100,
            ServerHardware::Configurator(Configurator {
                configurator_id: 11,
                disk: 10240,
                cpu: 2,
                ram: 4096,
            }),
        )
        .ssh_key_ids(vec![5, 6])
        .build()
        .unwrap();
        let descriptor = create(&request);

        let body = descriptor.body().unwrap();
        assert_eq!(
            body["configurator"],
            json!({"configurator_id": 11, "disk": 10240, "cpu": 2, "ram": 4096})
        );
        assert_eq!(body["ssh_keys_ids"], json!([5, 6]));
        assert!(body.get("preset_id").is_none());
        assert!(body.get("comment").is_none());
    }

    #[test]
    fn update_sends_only_changed_fields() {
        let request = UpdateServer::builder().comment("maintenance").build().unwrap();
        let descriptor = update(17, &request);

        assert_eq!(descriptor.method(), Method::Patch);
        assert_eq!(descriptor.path(), "servers/17");
        assert_eq!(descriptor.body().unwrap(), &json!({"comment": "maintenance"}));
    }

    #[test]
    fn action_wraps_the_verb() {
        let descriptor = action(9, ServerAction::HardReboot);
        assert_eq!(descriptor.path(), "servers/9/action");
        assert_eq!(descriptor.body().unwrap(), &json!({"action": "hard_reboot"}));
    }

    #[test]
    fn disks_live_under_the_server_collection() {
        assert_eq!(disks(5).path(), "servers/5/disks");
        assert_eq!(disk(5, 11).path(), "servers/5/disks/11");
        assert_eq!(delete_disk(5, 11).method(), Method::Delete);

        let descriptor = resize_disk(5, 11, 10240);
        assert_eq!(descriptor.method(), Method::Patch);
        assert_eq!(descriptor.body().unwrap(), &json!({"size": 10240}));
    }

    #[test]
    fn list_carries_pagination_in_the_query() {
        let descriptor = list(Some(50), Some(100));
        assert_eq!(
            descriptor.query_pairs(),
            &[("limit", "50".to_owned()), ("offset", "100".to_owned())]
        );
    }
}
