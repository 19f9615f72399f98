//! Error types for the static token contract

use common::MathError;
use cosmwasm_std::{OverflowError, StdError, Uint256};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("NotBridge: only the registered bridge can perform this action")]
    NotBridge,

    #[error("NotOwner: only the owner can perform this action")]
    NotOwner,

    // ========================================================================
    // Rewards Index Errors
    // ========================================================================

    #[error("StaleIndex: block {block_number} is not after last pushed block {last_block}")]
    StaleIndex { last_block: u64, block_number: u64 },

    #[error("IndexRegression: index {index} is below current index {current}")]
    IndexRegression { current: Uint256, index: Uint256 },
}
