//! Typed response models.
//!
//! Every model keeps the fields it does not declare in an [`Extra`] side-map
//! so that additive API changes survive deserialization; enumerated fields
//! are closed enums that reject values outside the documented set.

use std::collections::BTreeMap;

use serde::Deserialize;

pub mod account;
pub mod balancers;
pub mod databases;
pub mod dedics;
pub mod domains;
pub mod images;
pub mod kubernetes;
pub mod mail;
pub mod projects;
pub mod s3;
pub mod servers;
pub mod ssh_keys;
pub mod tokens;

/// Fields present in a response but not declared by the model.
pub type Extra = BTreeMap<String, serde_json::Value>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Collection metadata attached to list responses.
pub struct Meta {
    pub total: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::servers::{ServerStatus, ServersResponse};
    use super::*;

    #[test]
    fn undeclared_fields_land_in_extra() {
        let body = serde_json::json!({
            "response_id": "8f2d7bfc-df69-4e19-87a5-f0f8a5a54a33",
            "meta": {"total": 1, "page": 3},
            "servers": []
        });
        let parsed: ServersResponse = serde_json::from_value(body).unwrap();
        let meta = parsed.meta.unwrap();
        assert_eq!(meta.total, Some(1));
        assert_eq!(meta.extra["page"], serde_json::json!(3));
    }

    #[test]
    fn closed_enums_reject_unknown_variants() {
        assert!(serde_json::from_str::<ServerStatus>("\"on\"").is_ok());
        assert!(serde_json::from_str::<ServerStatus>("\"hibernating\"").is_err());
    }
}
