//! State definitions for the L2 bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    pub governor: Addr,
    /// Only contract allowed to deliver L1 messages
    pub messenger: Addr,
    /// L1 bridge address, the only accepted L1 sender
    pub l1_bridge: Option<String>,
    /// L2 reward token; this contract must be its minter
    pub reward_token: Option<Addr>,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-l2-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: L1 token address, Value: static token
pub const L1_TO_L2_TOKENS: Map<&str, Addr> = Map::new("l1_to_l2_tokens");

/// Key: static token, Value: L1 token address
pub const L2_TO_L1_TOKENS: Map<&Addr, String> = Map::new("l2_to_l1_tokens");
