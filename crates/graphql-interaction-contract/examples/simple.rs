//! Builds a GraphQL request expectation and prints its contract JSON.
//!
//! Run with `RUST_LOG=debug` to see the builder's log output.

use graphql_interaction_contract::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GraphQLContractError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request = GraphQLRequest::new()
        .with_path("/graphql")
        .with_method(Method::Post)
        .with_header("Content-Type", "application/json")
        .with_operation("GetUsers")
        .with_query(
            r#"
            query GetUsers($first: Int) {
              users(first: $first) {
                id
                name
              }
            }
            "#,
        )
        .with_variables(Variables::try_from(json!({"first": 10}))?);

    let contract = request.build().to_json()?;
    let pretty = serde_json::to_string_pretty(&contract).map_err(ContractError::from)?;
    println!("{pretty}");

    Ok(())
}
