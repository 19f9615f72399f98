//! Error types for the L2 governance relay

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("NotAdmin: only the deployer can initialize the relay")]
    NotAdmin,

    #[error("Unauthorized: only the messenger can deliver L1 messages")]
    NotMessenger,

    #[error("UnauthorizedSender: {sender} is not the L1 governance relay")]
    UnauthorizedSender { sender: String },

    #[error("Unauthorized: spells can only be executed by the relay itself")]
    NotSelf,

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("AlreadyInitialized: the L1 governance relay is already set")]
    AlreadyInitialized,

    #[error("NotInitialized: the L1 governance relay is not set")]
    NotInitialized,

    #[error("Spell {spell} is not locked")]
    SpellNotLocked { spell: String },

    #[error("Spell {spell} has a wasm admin and could be migrated")]
    SpellHasAdmin { spell: String },

    #[error("Unknown spell execution {id}")]
    UnknownExecution { id: u64 },
}
