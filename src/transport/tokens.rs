//! API token endpoints.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use uuid::Uuid;

use super::{RequestDescriptor, set, set_opt};
use crate::domain::CreateApiKey;

fn expire_str(expires_at: DateTime<Utc>) -> String {
    expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub(crate) fn list() -> RequestDescriptor {
    RequestDescriptor::get("auth/api-keys")
}

pub(crate) fn create(request: &CreateApiKey) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "name", &request.name);
    set_opt(&mut body, "expire", request.expires_at.map(expire_str));
    RequestDescriptor::post("auth/api-keys").json(Value::Object(body))
}

pub(crate) fn rename(token_id: Uuid, name: &str) -> RequestDescriptor {
    RequestDescriptor::patch(format!("auth/api-keys/{token_id}")).json(json!({"name": name}))
}

pub(crate) fn reissue(token_id: Uuid, expires_at: Option<DateTime<Utc>>) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "expire", expires_at.map(expire_str));
    RequestDescriptor::put(format!("auth/api-keys/{token_id}")).json(Value::Object(body))
}

pub(crate) fn delete(token_id: Uuid) -> RequestDescriptor {
    RequestDescriptor::delete(format!("auth/api-keys/{token_id}"))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::super::Method;
    use super::*;

    #[test]
    fn create_formats_expiry_as_rfc3339() {
        let expiry = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let request = CreateApiKey::new("ci").unwrap().expires_at(expiry);
        let body = create(&request).body().unwrap().clone();
        assert_eq!(body["name"], json!("ci"));
        assert_eq!(body["expire"], json!("2027-01-01T00:00:00Z"));
    }

    #[test]
    fn create_without_expiry_sends_only_the_name() {
        let request = CreateApiKey::new("ci").unwrap();
        assert_eq!(create(&request).body().unwrap(), &json!({"name": "ci"}));
    }

    #[test]
    fn reissue_uses_put_on_the_token_path() {
        let id = Uuid::nil();
        let descriptor = reissue(id, None);
        assert_eq!(descriptor.method(), Method::Put);
        assert_eq!(
            descriptor.path(),
            "auth/api-keys/00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(descriptor.body().unwrap(), &json!({}));
    }
}
