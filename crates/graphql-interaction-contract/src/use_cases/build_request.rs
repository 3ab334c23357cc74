use http_interaction_contract::{Matcher, Request};

use super::normalize_query;
use crate::entities::{GraphQLBody, GraphQLRequest};

/// Build the generic request description for a GraphQL expectation.
///
/// The query becomes a regex matcher whose example is the literal text and
/// whose pattern is [`normalize_query`] of it; operation name and variables
/// are copied as literals. The method is passed through as-is, unset stays
/// unset.
pub fn graphql(request: &GraphQLRequest) -> Request<GraphQLBody> {
    let query = request.query.clone().unwrap_or_default();
    let pattern = normalize_query(&query);

    tracing::debug!(
        operation = request.operation.as_deref().unwrap_or_default(),
        method = request.method.as_deref().unwrap_or_default(),
        pattern_len = pattern.len(),
        "built GraphQL request expectation"
    );

    let body = GraphQLBody {
        operation: request.operation.clone(),
        query: Matcher::term(query, pattern),
        variables: request.variables.clone(),
    };

    Request {
        method: request.method.clone(),
        path: request.path.clone(),
        query: request.query_string.clone(),
        headers: request.headers.clone(),
        body: Some(body),
    }
}
