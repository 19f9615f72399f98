//! Error types for the L1 bridge contract

use common::MathError;
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("NotGovernor: only the governor can perform this action")]
    NotGovernor,

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("AlreadyMapped: {l1_token} is already mapped to {l2_token}")]
    AlreadyMapped { l1_token: String, l2_token: String },

    #[error("UnmappedToken: {token} has no token mapping")]
    UnmappedToken { token: String },

    // ========================================================================
    // Deposit Errors
    // ========================================================================

    #[error("AboveCeiling: deposit would raise the ledger balance above the ceiling of {ceiling}")]
    AboveCeiling { ceiling: Uint128 },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Token {token} cannot be deposited for {l1_token}")]
    InvalidDepositAsset { token: String, l1_token: String },

    #[error("Deposit of {amount} was not credited to the bridge in full")]
    DepositNotCredited { amount: Uint128 },

    // ========================================================================
    // Cancellation Errors
    // ========================================================================

    #[error("No cancellation started by this depositor for deposit nonce {nonce}")]
    CancellationNotStarted { nonce: u64 },

    // ========================================================================
    // Rewards Errors
    // ========================================================================

    #[error("InsufficientRewards: requested {requested}, available {available}")]
    InsufficientRewards {
        requested: Uint128,
        available: Uint128,
    },
}
