//! Message types for the messenger contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

use crate::state::MessageStatus;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub finality_delay_blocks: u64,
    pub cancellation_delay_seconds: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // L1 -> L2
    // ========================================================================
    /// Queue a message for an L2 contract
    ///
    /// Authorization: Anyone (the caller becomes the message sender)
    ///
    /// The assigned nonce is returned as response data.
    SendMessageToL2 { to: String, payload: Binary },

    /// Deliver a finalized message to its L2 recipient
    ///
    /// Authorization: Anyone (relayer)
    RelayMessageToL2 {
        from: String,
        to: String,
        payload: Binary,
        nonce: u64,
    },

    /// Start cancelling an undelivered message
    ///
    /// Authorization: Original sender only
    StartL1ToL2MessageCancellation {
        to: String,
        payload: Binary,
        nonce: u64,
    },

    /// Complete a cancellation after the cancellation delay
    ///
    /// Authorization: Original sender only
    CancelL1ToL2Message {
        to: String,
        payload: Binary,
        nonce: u64,
    },

    // ========================================================================
    // L2 -> L1
    // ========================================================================
    /// Queue a message for an L1 contract
    ///
    /// Authorization: Anyone (the caller becomes the message sender)
    SendMessageToL1 { to: String, payload: Binary },

    /// Consume a finalized message addressed to the caller
    ///
    /// Authorization: The L1 recipient of the message
    ConsumeMessageFromL2 { from: String, payload: Binary },

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Authorization: Owner only
    UpdateConfig {
        finality_delay_blocks: Option<u64>,
        cancellation_delay_seconds: Option<u64>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Nonce the next L1 -> L2 message will receive
    #[returns(NonceResponse)]
    L1ToL2Nonce {},

    #[returns(L1ToL2MessageResponse)]
    L1ToL2Message {
        from: String,
        to: String,
        payload: Binary,
        nonce: u64,
    },

    #[returns(L2ToL1MessageResponse)]
    L2ToL1Message {
        from: String,
        to: String,
        payload: Binary,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub finality_delay_blocks: u64,
    pub cancellation_delay_seconds: u64,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct L1ToL2MessageResponse {
    /// Message key as 0x-prefixed hex
    pub key: String,
    pub exists: bool,
    pub status: Option<MessageStatus>,
    pub sent_at_height: Option<u64>,
    pub cancellation_requested_at: Option<Timestamp>,
}

#[cw_serde]
pub struct L2ToL1MessageResponse {
    pub key: String,
    /// Messages sent and not yet consumed
    pub pending: u64,
    pub consumed: u64,
}
