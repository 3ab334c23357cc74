use http_interaction_contract::{MapMatcher, Matcher, Request};

use super::{GraphQLBody, Variables};
use crate::use_cases::{graphql, normalize_query};

/// Accumulates the description of an expected GraphQL-over-HTTP request.
///
/// Setters never validate their input. Call [`GraphQLRequest::build`] to get
/// the generic request description handed to the contract engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphQLRequest {
    /// HTTP headers
    pub headers: Option<MapMatcher>,
    /// Path to the GraphQL endpoint
    pub path: Option<Matcher>,
    /// HTTP query string
    pub query_string: Option<MapMatcher>,
    /// Literal GraphQL document
    pub query: Option<String>,
    /// GraphQL variables
    pub variables: Option<Variables>,
    /// GraphQL operation name
    pub operation: Option<String>,
    /// Usually POST. Left unset, the contract engine picks its default.
    pub method: Option<String>,
}

impl GraphQLRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Replace the variables as a whole
    pub fn with_variables(mut self, variables: impl Into<Variables>) -> Self {
        self.variables = Some(variables.into());
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
        self.query_string
            .get_or_insert_with(MapMatcher::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_query_string(mut self, query_string: MapMatcher) -> Self {
        self.query_string = Some(query_string);
        self
    }

    /// Whitespace-tolerant pattern for the current query text
    pub fn query_pattern(&self) -> String {
        normalize_query(self.query.as_deref().unwrap_or_default())
    }

    /// Assemble the request description; `self` is left untouched
    pub fn build(&self) -> Request<GraphQLBody> {
        graphql(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_interaction_contract::Method;
    use serde_json::json;

    #[test]
    fn test_graphql_request_new_is_unset() {
        let request = GraphQLRequest::new();
        assert!(request.query.is_none());
        assert!(request.operation.is_none());
        assert!(request.method.is_none());
        assert!(request.variables.is_none());
        assert!(request.path.is_none());
        assert!(request.headers.is_none());
        assert!(request.query_string.is_none());
    }

    #[test]
    fn test_setters_overwrite() {
        let request = GraphQLRequest::new()
            .with_operation("First")
            .with_operation("Second")
            .with_method("GET")
            .with_method(Method::Post);
        assert_eq!(request.operation.as_deref(), Some("Second"));
        assert_eq!(request.method.as_deref(), Some("POST"));
    }

    #[test]
    fn test_with_variables_replaces_whole_map() {
        let request = GraphQLRequest::new()
            .with_variables(Variables::new().with("a", 1).with("b", 2))
            .with_variables(Variables::new().with("c", 3));
        let variables = request.variables.unwrap();
        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get("c"), Some(&json!(3)));
        assert!(variables.get("a").is_none());
    }

    #[test]
    fn test_explicit_empty_query_is_distinct_from_unset() {
        let request = GraphQLRequest::new().with_query("");
        assert_eq!(request.query.as_deref(), Some(""));
        assert_ne!(request, GraphQLRequest::new());
    }

    #[test]
    fn test_query_pattern_tracks_current_query() {
        let request = GraphQLRequest::new().with_query("{ a }");
        assert_eq!(request.query_pattern(), r"\{\s*a\s*\}");

        let request = request.with_query("{ b }");
        assert_eq!(request.query_pattern(), r"\{\s*b\s*\}");
    }

    #[test]
    fn test_query_pattern_without_query() {
        assert_eq!(GraphQLRequest::new().query_pattern(), "");
    }

    #[test]
    fn test_headers_and_query_params_accumulate() {
        let request = GraphQLRequest::new()
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", Matcher::term("Bearer abc", r"Bearer .+"))
            .with_query_param("tenant", "acme");
        assert_eq!(request.headers.as_ref().unwrap().len(), 2);
        assert_eq!(
            request.query_string.as_ref().unwrap()["tenant"],
            Matcher::from("acme")
        );
    }
}
