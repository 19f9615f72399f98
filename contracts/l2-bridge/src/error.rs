//! Error types for the L2 bridge contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("NotGovernor: only the governor can perform this action")]
    NotGovernor,

    #[error("Unauthorized: only the messenger can deliver L1 messages")]
    NotMessenger,

    #[error("UnauthorizedSender: {sender} is not the registered L1 bridge")]
    UnauthorizedSender { sender: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("AlreadyMapped: {token} is already mapped to {mapped_to}")]
    AlreadyMapped { token: String, mapped_to: String },

    #[error("UnmappedToken: {token} has no token mapping")]
    UnmappedToken { token: String },

    #[error("L1 bridge not set")]
    L1BridgeNotSet,

    #[error("Reward token not set")]
    RewardTokenNotSet,

    // ========================================================================
    // Amount Errors
    // ========================================================================

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Only the reward token can be bridged back, got {token}")]
    InvalidRewardToken { token: String },
}
