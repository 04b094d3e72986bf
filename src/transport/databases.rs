//! Managed database endpoints.

use serde_json::{Map, Value};

use super::{RequestDescriptor, set, set_opt};
use crate::domain::{CreateDatabase, DbConfig, UpdateDatabase};

pub(crate) fn list(limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("dbs")
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn get(db_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("dbs/{db_id}"))
}

fn config_body(config: &DbConfig) -> Value {
    let mut body = Map::new();
    set_opt(
        &mut body,
        "auto_increment_increment",
        config.auto_increment_increment.as_deref(),
    );
    set_opt(
        &mut body,
        "auto_increment_offset",
        config.auto_increment_offset.as_deref(),
    );
    set_opt(
        &mut body,
        "innodb_read_io_threads",
        config.innodb_read_io_threads.as_deref(),
    );
    set_opt(
        &mut body,
        "innodb_write_io_threads",
        config.innodb_write_io_threads.as_deref(),
    );
    set_opt(&mut body, "join_buffer_size", config.join_buffer_size.as_deref());
    set_opt(
        &mut body,
        "max_allowed_packet",
        config.max_allowed_packet.as_deref(),
    );
    Value::Object(body)
}

pub(crate) fn create(request: &CreateDatabase) -> RequestDescriptor {
    let mut body = Map::new();
    set(&mut body, "password", &request.password);
    set(&mut body, "name", &request.name);
    set(&mut body, "type", request.db_type.as_str());
    set(&mut body, "preset_id", request.preset_id);
    set_opt(&mut body, "login", request.login.as_deref());
    set_opt(&mut body, "hash_type", request.hash_type.map(|h| h.as_str()));
    if let Some(config) = &request.config_parameters {
        set(&mut body, "config_parameters", config_body(config));
    }
    RequestDescriptor::post("dbs").json(Value::Object(body))
}

pub(crate) fn update(db_id: u64, request: &UpdateDatabase) -> RequestDescriptor {
    let mut body = Map::new();
    set_opt(&mut body, "password", request.password.as_deref());
    set_opt(&mut body, "name", request.name.as_deref());
    set_opt(&mut body, "preset_id", request.preset_id);
    if let Some(config) = &request.config_parameters {
        set(&mut body, "config_parameters", config_body(config));
    }
    set_opt(&mut body, "is_external_ip", request.is_external_ip);
    RequestDescriptor::patch(format!("dbs/{db_id}")).json(Value::Object(body))
}

pub(crate) fn delete(db_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("dbs/{db_id}"))
}

pub(crate) fn backups(db_id: u64, limit: Option<u32>, offset: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get(format!("dbs/{db_id}/backups"))
        .opt_query("limit", limit)
        .opt_query("offset", offset)
}

pub(crate) fn create_backup(db_id: u64) -> RequestDescriptor {
    RequestDescriptor::post(format!("dbs/{db_id}/backups"))
}

pub(crate) fn get_backup(db_id: u64, backup_id: u64) -> RequestDescriptor {
    RequestDescriptor::get(format!("dbs/{db_id}/backups/{backup_id}"))
}

pub(crate) fn delete_backup(db_id: u64, backup_id: u64) -> RequestDescriptor {
    RequestDescriptor::delete(format!("dbs/{db_id}/backups/{backup_id}"))
}

pub(crate) fn restore_backup(db_id: u64, backup_id: u64) -> RequestDescriptor {
    RequestDescriptor::put(format!("dbs/{db_id}/backups/{backup_id}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::super::Method;
    use super::*;
    use crate::schemas::databases::{DbHashType, DbType};

    #[test]
    fn create_spells_out_engine_and_hash() {
        let request = CreateDatabase::builder("appdb", "s3cret", DbType::Mysql5, 8)
            .hash_type(DbHashType::CachingSha2)
            .build()
            .unwrap();
        let body = create(&request).body().unwrap().clone();
        assert_eq!(body["type"], json!("mysql5"));
        assert_eq!(body["hash_type"], json!("caching_sha2"));
        assert!(body.get("login").is_none());
        assert!(body.get("config_parameters").is_none());
    }

    #[test]
    fn config_parameters_drop_unset_entries() {
        let request = CreateDatabase::builder("appdb", "s3cret", DbType::Mysql, 8)
            .config_parameters(DbConfig {
                max_allowed_packet: Some("16M".to_owned()),
                ..DbConfig::default()
            })
            .build()
            .unwrap();
        let body = create(&request).body().unwrap().clone();
        assert_eq!(
            body["config_parameters"],
            json!({"max_allowed_packet": "16M"})
        );
    }

    #[test]
    fn backup_restore_replays_the_backup_path_with_put() {
        let descriptor = restore_backup(3, 44);
        assert_eq!(descriptor.method(), Method::Put);
        assert_eq!(descriptor.path(), "dbs/3/backups/44");
        assert!(descriptor.body().is_none());
    }
}
