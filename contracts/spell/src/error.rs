//! Error types for the spell contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotCreator: only the spell creator can perform this action")]
    NotCreator,

    #[error("Spell is locked and can no longer be changed")]
    Locked,

    #[error("A spell needs at least one action")]
    NoActions,
}
