//! HTTP Interaction Contract
//!
//! Building blocks for describing the HTTP requests a consumer expects to
//! send in a consumer-driven contract test: matchers pairing examples with
//! matching rules, and a request description that a contract engine can
//! serialize and verify.
//!
//! # Example
//!
//! ```rust
//! use http_interaction_contract::prelude::*;
//!
//! let request: Request = Request::new()
//!     .with_method(Method::Post)
//!     .with_path("/api/users")
//!     .with_header("Content-Type", Matcher::term("application/json", r"application/.*json"))
//!     .with_body(json!({"name": "Alice"}));
//!
//! let contract = request.to_json().unwrap();
//! assert_eq!(contract["method"], "POST");
//! ```

pub mod entities;
pub mod error;

pub use entities::{MapMatcher, Matcher, Method, Request};
pub use error::ContractError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{MapMatcher, Matcher, Method, Request};
    pub use crate::error::ContractError;

    pub use serde_json::json;
}
