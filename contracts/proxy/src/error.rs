//! Error types for the upgrade proxy

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotAdmin: only the proxy admin can perform this action")]
    NotAdmin,

    #[error("AlreadyInitialized: the proxy already has a target")]
    AlreadyInitialized,

    #[error("NotInitialized: the proxy has no target yet")]
    NotInitialized,

    #[error("The proxy is not the wasm admin of {target}")]
    NotTargetAdmin { target: String },

    #[error("Target runs code {actual}, expected {expected}")]
    ImplementationMismatch { expected: u64, actual: u64 },
}
