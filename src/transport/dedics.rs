//! Dedicated server endpoints.

use serde_json::{Map, Value};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::CreateDedicatedServer;

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("dedicated-servers")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(dedicated_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("dedicated-servers/{dedicated_id}"))
}

pub(crate) fn create(request: &CreateDedicatedServer) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "plan_id", request.plan_id);
    set(&mut body, "preset_id", request.preset_id);
    set(&mut body, "name", &request.name);
    set(&mut body, "payment_period", request.payment_period.as_str());
    set_opt(&mut body, "os_id", request.os_id);
    set_opt(&mut body, "cp_id", request.cp_id);
    set_opt(&mut body, "bandwidth_id", request.bandwidth_id);
    set_opt(&mut body, "network_drive_id", request.network_drive_id);
    set_opt(
        &mut body,
        "additional_ip_addr_id",
        request.additional_ip_addr_id,
    );
    set_opt(&mut body, "comment", request.comment.as_deref());
    RequestDescriptor::post("dedicated-servers").json(Value::Object(body))
}

pub(crate) fn update(dedicated_id: u64, comment: &str) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "comment", comment);
    RequestDescriptor::patch(format!("dedicated-servers/{dedicated_id}")).json(Value::Object(body))
}

pub(crate) fn delete(dedicated_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("dedicated-servers/{dedicated_id}"))
}

pub(crate) fn presets(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("presets/dedicated-servers")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::PaymentPeriod;

    #[test]
    fn create_spells_the_payment_period_as_iso() {
        let request =
            CreateDedicatedServer::builder(1, 2, "db-host", PaymentPeriod::SixMonths)
                .os_id(42)
                .build()
                .unwrap();
        let body = create(&request).body().unwrap().clone();
        assert_eq!(body["payment_period"], json!("P6M"));
        assert_eq!(body["os_id"], json!(42));
        assert!(body.get("cp_id").is_none());
        assert!(body.get("comment").is_none());
    }

    #[test]
    fn presets_endpoint_is_under_the_presets_prefix() {
        assert_eq!(presets(None, None).path(), "presets/dedicated-servers");
    }
}
