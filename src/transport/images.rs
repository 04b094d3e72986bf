//! Disk image endpoints.

use serde_json::json;
use uuid::Uuid;

use super::RequestDescriptor;
use crate::domain::CreateImage;

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("images")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(image_id: Uuid) -> RequestDescriptor {
    RequestDescriptor::get(format!("images/{image_id}"))
}

pub(crate) fn create(request: &CreateImage) -> RequestDescriptor {
    RequestDescriptor::post("images").json(json!({
        "disk_id": request.disk_id,
        "description": request.description,
    }))
}

pub(crate) fn update(image_id: Uuid, description: &str) -> RequestDescriptor {
    RequestDescriptor::patch(format!("images/{image_id}")).json(json!({
        "description": description,
    }))
}

pub(crate) fn delete(image_id: Uuid) -> RequestDescriptor {
    RequestDescriptor::delete(format!("images/{image_id}"))
}

#[cfg(test)]
mod tests {
    use super::super::Method;
    use super::*;

    #[test]
    fn create_sends_disk_and_description() {
        let request = CreateImage::new(77, "pre-upgrade snapshot").unwrap();
        let descriptor = create(&request);
        assert_eq!(descriptor.method(), Method::Post);
        assert_eq!(descriptor.path(), "images");
        assert_eq!(
            descriptor.body().unwrap(),
            &json!({"disk_id": 77, "description": "pre-upgrade snapshot"})
        );
    }

    #[test]
    fn item_paths_embed_the_image_uuid() {
        let id: Uuid = "6c1adf15-9f2b-466a-8d98-7c2ce42b2e7b".parse().unwrap();
        assert_eq!(
            get(id).path(),
            "images/6c1adf15-9f2b-466a-8d98-7c2ce42b2e7b"
        );
        assert_eq!(delete(id).method(), Method::Delete);
    }
}
