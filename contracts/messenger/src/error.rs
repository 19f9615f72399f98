//! Error types for the messenger contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Transport State Errors
    // ========================================================================

    #[error("Message not found: {key}")]
    MessageNotFound { key: String },

    #[error("AlreadyConsumed: message {key} was already consumed")]
    AlreadyConsumed { key: String },

    #[error("OutOfOrder: message {nonce} waits on earlier message {earliest} from the same sender")]
    OutOfOrder { nonce: u64, earliest: u64 },

    #[error("NotYetFinalized: message is consumable from height {ready_at_height}")]
    NotYetFinalized { ready_at_height: u64 },

    #[error("NotCancellable: message {key} was already consumed")]
    NotCancellable { key: String },

    #[error("Message {key} was cancelled")]
    MessageCancelled { key: String },

    #[error("Cancellation not started for message {key}")]
    CancellationNotStarted { key: String },

    #[error("Cancellation not ready: {remaining_seconds} seconds remaining")]
    CancellationNotReady { remaining_seconds: u64 },
}
