use serde::Serialize;
use serde_json::Value;

use super::{MapMatcher, Matcher};
use crate::error::ContractError;

/// Describes the request a consumer expects to send to a provider.
///
/// Every part is optional; absent parts are left out of the serialized
/// interaction so the contract engine can apply its own defaults. The body
/// type is generic so protocol-specific layers can embed a typed body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request<B = Value> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Matcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<MapMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<MapMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<B>,
}

impl<B> Request<B> {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            query: None,
            headers: None,
            body: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<Matcher>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Matcher>) -> Self {
        self.headers
            .get_or_insert_with(MapMatcher::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: MapMatcher) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<Matcher>) -> Self {
        self.query
            .get_or_insert_with(MapMatcher::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, query: MapMatcher) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }
}

impl<B: Serialize> Request<B> {
    /// Serialize the request description into its contract JSON form
    pub fn to_json(&self) -> Result<Value, ContractError> {
        let value = serde_json::to_value(self)?;
        tracing::trace!(request = %value, "serialized interaction request");
        Ok(value)
    }
}

impl<B> Default for Request<B> {
    fn default() -> Self {
        Self::new()
    }
}
