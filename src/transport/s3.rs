//! Object storage endpoints.

use serde_json::{Map, Value, json};

use super::{RequestDescriptor, set_opt};
use crate::domain::{CreateBucket, UpdateBucket};

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("storages/buckets")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn create(request: &CreateBucket) -> RequestDescriptor {
    RequestDescriptor::post("storages/buckets").json(json!({
        "name": request.name,
        "type": request.bucket_type.as_str(),
        "preset_id": request.preset_id,
    }))
}

pub(crate) fn update(bucket_id: u64, request: &UpdateBucket) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "preset_id", request.preset_id);
    set_opt(&mut body, "type", request.bucket_type.map(|t| t.as_str()));
    RequestDescriptor::patch(format!("storages/buckets/{bucket_id}")).json(Value::Object(body))
}

pub(crate) fn delete(bucket_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("storages/buckets/{bucket_id}"))
}

pub(crate) fn presets(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("presets/storages")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::s3::BucketType;

    #[test]
    fn create_uses_the_wire_name_for_the_type_field() {
        let request = CreateBucket::new("assets", BucketType::Public, 5).unwrap();
        assert_eq!(
            create(&request).body().unwrap(),
            &json!({"name": "assets", "type": "public", "preset_id": 5})
        );
    }

    #[test]
    fn update_sends_only_what_changed() {
        let request = UpdateBucket {
            bucket_type: Some(BucketType::Private),
            ..UpdateBucket::default()
        };
        let descriptor = update(9, &request);
        assert_eq!(descriptor.path(), "storages/buckets/9");
        assert_eq!(descriptor.body().unwrap(), &json!({"type": "private"}));
    }
}
