//! State definitions for the messenger contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Empty, Timestamp};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// May update the delays
    pub owner: Addr,
    /// Blocks a message must wait after being sent before it can be consumed
    pub finality_delay_blocks: u64,
    /// Seconds between starting and completing an L1 -> L2 cancellation
    pub cancellation_delay_seconds: u64,
}

/// Lifecycle of an L1 -> L2 message
#[cw_serde]
pub enum MessageStatus {
    Pending,
    Consumed,
    Cancelled,
}

#[cw_serde]
pub struct L1ToL2Message {
    pub from: Addr,
    pub to: String,
    pub payload: Binary,
    pub nonce: u64,
    pub sent_at_height: u64,
    pub status: MessageStatus,
    /// Set once the sender starts a cancellation
    pub cancellation_requested_at: Option<Timestamp>,
}

/// L2 -> L1 messages sharing one key
#[cw_serde]
pub struct L2ToL1Entry {
    /// Send heights of messages not consumed yet, oldest first
    pub pending: Vec<u64>,
    pub consumed: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-messenger";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Next nonce assigned to an L1 -> L2 message
pub const L1_TO_L2_NONCE: Item<u64> = Item::new("l1_to_l2_nonce");

/// L1 -> L2 messages
/// Key: 32-byte message key, Value: L1ToL2Message
pub const L1_TO_L2_MESSAGES: Map<&[u8], L1ToL2Message> = Map::new("l1_to_l2_messages");

/// Undelivered L1 -> L2 nonces per sender and recipient
/// Key: (from, to, nonce)
pub const L1_TO_L2_QUEUE: Map<(&str, &str, u64), Empty> = Map::new("l1_to_l2_queue");

/// L2 -> L1 messages
/// Key: 32-byte message key, Value: L2ToL1Entry
pub const L2_TO_L1_MESSAGES: Map<&[u8], L2ToL1Entry> = Map::new("l2_to_l1_messages");
