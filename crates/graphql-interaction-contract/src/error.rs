use http_interaction_contract::ContractError;
use thiserror::Error;

/// Errors that can occur while assembling a GraphQL expectation
#[derive(Error, Debug)]
pub enum GraphQLContractError {
    #[error("Invalid variables: {0}")]
    InvalidVariables(String),

    #[error(transparent)]
    Contract(#[from] ContractError),
}
