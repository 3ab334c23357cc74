//! Integration tests for http-interaction-contract

use http_interaction_contract::{ContractError, MapMatcher, Matcher, Method, Request};
use serde_json::json;

#[test]
fn test_root_exports_build_a_request() {
    let mut headers = MapMatcher::new();
    headers.insert("Accept".to_string(), Matcher::from("application/json"));

    let request: Request = Request::new()
        .with_method(Method::Post)
        .with_path(Matcher::term("/graphql", r"/graph\w+"))
        .with_headers(headers)
        .with_body(json!({"query": "{ a }"}));

    let contract = request.to_json().unwrap();
    assert_eq!(contract["method"], "POST");
    assert_eq!(contract["headers"]["Accept"], "application/json");
    assert_eq!(contract["path"]["json_class"], "Pact::Term");
}

#[test]
fn test_root_exports_report_errors() {
    let err: ContractError = "BREW".parse::<Method>().unwrap_err();
    assert!(matches!(err, ContractError::ConfigurationError(_)));
}
