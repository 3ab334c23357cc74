use http_interaction_contract::Matcher;
use serde::Serialize;

use super::Variables;

/// The JSON body of a GraphQL-over-HTTP request expectation.
///
/// `operation` and `variables` are left out of the serialized body when they
/// were never set. A value that was explicitly set, even an empty one, is
/// always written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQLBody {
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    pub query: Matcher,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_omits_unset_fields() {
        let body = GraphQLBody {
            operation: None,
            query: Matcher::term("{ a }", r"\{\s*a\s*\}"),
            variables: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value["query"]["json_class"], "Pact::Term");
    }

    #[test]
    fn test_body_keeps_explicit_empty_values() {
        let body = GraphQLBody {
            operation: Some(String::new()),
            query: Matcher::term("", ""),
            variables: Some(Variables::new()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["operationName"], "");
        assert_eq!(value["variables"], json!({}));
    }
}
