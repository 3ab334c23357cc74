mod graphql_body;
mod graphql_request;
mod variables;

pub use graphql_body::GraphQLBody;
pub use graphql_request::GraphQLRequest;
pub use variables::Variables;
