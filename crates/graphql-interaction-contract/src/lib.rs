//! GraphQL Interaction Contract
//!
//! Describe the GraphQL requests a consumer expects to send, as request
//! expectations for consumer-driven contract tests.
//!
//! The query document is turned into a regex matcher that accepts the same
//! document with any whitespace layout, so a provider test does not break
//! when a client reformats its queries.
//!
//! # Example
//!
//! ```rust
//! use graphql_interaction_contract::prelude::*;
//!
//! let request = GraphQLRequest::new()
//!     .with_path("/graphql")
//!     .with_method(Method::Post)
//!     .with_header("Content-Type", "application/json")
//!     .with_operation("GetUser")
//!     .with_query("query GetUser($id: ID!) { user(id: $id) { name } }")
//!     .with_variables(Variables::new().with("id", "123"))
//!     .build();
//!
//! let body = request.body.as_ref().unwrap();
//! assert_eq!(body.operation.as_deref(), Some("GetUser"));
//! assert_eq!(
//!     body.query.pattern(),
//!     Some(r"query\s*GetUser\(\$id:\s*ID!\)\s*\{\s*user\(id:\s*\$id\)\s*\{\s*name\s*\}\s*\}")
//! );
//! ```

pub mod entities;
pub mod error;
pub mod use_cases;

pub use error::GraphQLContractError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{GraphQLBody, GraphQLRequest, Variables};
    pub use crate::error::GraphQLContractError;
    pub use crate::use_cases::{graphql, normalize_query};

    pub use http_interaction_contract::prelude::*;
}
