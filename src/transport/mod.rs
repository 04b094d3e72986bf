//! Wire-level request descriptions.
//!
//! Builders in this module turn validated domain input into inert
//! [`RequestDescriptor`] values: method, path relative to the API root,
//! query pairs, and an optional JSON body. Nothing here performs I/O, so
//! both client variants and the tests share one source of truth for what
//! goes on the wire.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value, json};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A fully assembled API request, not yet bound to any HTTP client.
///
/// Immutable once built; failed calls carry the descriptor inside the error
/// so callers can see exactly what was sent.
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub(crate) fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub(crate) fn opt_query(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub(crate) fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Path relative to the API root, without a leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// Inserts a required body field.
pub(crate) fn set<T: Serialize>(body: &mut Map<String, Value>, key: &str, value: T) {
    body.insert(key.to_owned(), json!(value));
}

/// Inserts a body field only when the value is present; omitted optionals
/// never appear in the payload.
pub(crate) fn set_opt<T: Serialize>(body: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        set(body, key, value);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use super::RequestDescriptor;

    /// Sorted list of top-level keys in a descriptor's JSON body.
    pub(crate) fn body_keys(descriptor: &RequestDescriptor) -> Vec<&str> {
        match descriptor.body() {
            Some(Value::Object(map)) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn descriptor_accumulates_query_pairs_in_order() {
        let descriptor = RequestDescriptor::get("servers")
            .opt_query("limit", Some(25))
            .opt_query("offset", None::<u32>);
        assert_eq!(descriptor.method(), Method::Get);
        assert_eq!(descriptor.path(), "servers");
        assert_eq!(descriptor.query_pairs(), &[("limit", "25".to_owned())]);
        assert!(descriptor.body().is_none());
    }

    #[test]
    fn set_opt_skips_absent_values() {
        let mut body = Map::new();
        set(&mut body, "name", "srv1");
        set_opt(&mut body, "comment", None::<&str>);
        set_opt(&mut body, "software_id", Some(7));
        assert_eq!(
            Value::Object(body),
            json!({"name": "srv1", "software_id": 7})
        );
    }
}
