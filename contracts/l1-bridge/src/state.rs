//! State definitions for the L1 bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub governor: Addr,
    pub messenger: Addr,
    /// L2 bridge address, recipient of every L1 -> L2 message
    pub l2_bridge: String,
    pub incentives_controller: Addr,
    /// Reward token of the incentives controller, read at instantiation
    pub reward_token: Addr,
}

/// A started deposit cancellation, keyed by the deposit's message nonce
#[cw_serde]
pub struct PendingCancellation {
    pub depositor: Addr,
    pub l1_token: Addr,
    pub l2_recipient: String,
    /// Static amount carried by the deposit
    pub amount: Uint128,
    pub rewards_index: Uint256,
    pub block_number: u64,
    /// Refund in the underlying asset
    pub from_underlying: bool,
    /// L2 bridge the deposit was addressed to
    pub l2_bridge: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-l1-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ceiling of a newly approved token (no cap)
pub const UNBOUNDED_CEILING: Uint128 = Uint128::MAX;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: yield-bearing L1 token, Value: static token address on L2
pub const TOKEN_MAPPINGS: Map<&Addr, String> = Map::new("token_mappings");

/// Key: yield-bearing L1 token, Value: maximum ledger balance
pub const CEILINGS: Map<&Addr, Uint128> = Map::new("ceilings");

/// Key: deposit message nonce
pub const PENDING_CANCELLATIONS: Map<u64, PendingCancellation> =
    Map::new("pending_cancellations");
