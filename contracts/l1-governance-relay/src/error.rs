//! Error types for the L1 governance relay

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotGovernor: only the executor can perform this action")]
    NotGovernor,
}
