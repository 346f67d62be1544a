//! Request descriptors for resource manager operations.
//!
//! An operation turns a typed resource ID into the method, path and
//! expected status codes of one API call. Sending the request, following
//! `nextLink`s and polling long-running operations is left to the transport
//! that consumes these descriptors.

use std::fmt;

use arm_resourceids::ResourceId;
use serde::Serialize;

/// Content type sent with every resource manager request.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the response of an operation is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// One request, one response.
    Single,
    /// A list whose pages are linked through `nextLink`.
    Paged,
    /// The response starts an operation that has to be polled to completion.
    LongRunning,
}

/// Everything a transport needs to issue one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestOptions {
    pub content_type: &'static str,
    pub expected_status_codes: Vec<u16>,
    pub http_method: HttpMethod,
    pub path: String,
    pub operation: OperationKind,
}

impl RequestOptions {
    /// A single request expecting `200 OK`.
    pub fn new(http_method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            content_type: CONTENT_TYPE_JSON,
            expected_status_codes: vec![200],
            http_method,
            path: path.into(),
            operation: OperationKind::Single,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// A paged `GET` list.
    pub fn list(path: impl Into<String>) -> Self {
        Self {
            operation: OperationKind::Paged,
            ..Self::get(path)
        }
    }

    /// Marks the operation as long-running.
    #[must_use]
    pub fn long_running(mut self) -> Self {
        self.operation = OperationKind::LongRunning;
        self
    }

    /// Replaces the expected status codes.
    #[must_use]
    pub fn expecting(mut self, status_codes: &[u16]) -> Self {
        self.expected_status_codes = status_codes.to_vec();
        self
    }

    /// Returns true if `status` is one of the expected status codes.
    pub fn accepts(&self, status: u16) -> bool {
        self.expected_status_codes.contains(&status)
    }

    pub fn is_paged(&self) -> bool {
        self.operation == OperationKind::Paged
    }

    pub fn is_long_running(&self) -> bool {
        self.operation == OperationKind::LongRunning
    }
}

/// Path of a collection or action nested under `id`.
pub(crate) fn nested<T: ResourceId>(id: &T, suffix: &str) -> String {
    format!("{}/{}", id.id(), suffix)
}

#[cfg(test)]
mod tests {
    use arm_resourceids::commonids::SubscriptionId;

    use super::*;

    #[test]
    fn test_list_defaults() {
        let options = RequestOptions::list("/subscriptions/sub/providers/Microsoft.Web/sites");
        assert_eq!(options.http_method, HttpMethod::Get);
        assert_eq!(options.content_type, CONTENT_TYPE_JSON);
        assert_eq!(options.expected_status_codes, vec![200]);
        assert!(options.is_paged());
        assert!(!options.is_long_running());
    }

    #[test]
    fn test_long_running_builder() {
        let options = RequestOptions::post("/x/deploy")
            .expecting(&[200, 202])
            .long_running();
        assert!(options.accepts(202));
        assert!(!options.accepts(201));
        assert!(options.is_long_running());
    }

    #[test]
    fn test_nested_path() {
        let id = SubscriptionId::new("12345678-1234-9876-4563-123456789012");
        assert_eq!(
            nested(&id, "providers/Microsoft.ScVmm/vmmServers"),
            "/subscriptions/12345678-1234-9876-4563-123456789012/providers/Microsoft.ScVmm/vmmServers"
        );
    }

    #[test]
    fn test_serialization() {
        let options = RequestOptions::delete("/x").expecting(&[200, 202, 204]);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["http_method"], "DELETE");
        assert_eq!(json["operation"], "single");
        assert_eq!(json["expected_status_codes"], serde_json::json!([200, 202, 204]));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}
