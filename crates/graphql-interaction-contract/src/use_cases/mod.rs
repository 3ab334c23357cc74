mod build_request;
mod normalize_query;

pub use build_request::graphql;
pub use normalize_query::{normalize_query, WHITESPACE_TOKEN};
