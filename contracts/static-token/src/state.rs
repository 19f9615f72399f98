//! State definitions for the static token contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

#[cw_serde]
pub struct Config {
    /// May replace the bridge and hand over ownership
    pub owner: Addr,
    /// Only caller allowed to mint, burn and push the rewards index
    pub bridge: Addr,
}

/// Global rewards index and the L1 block it was taken at
#[cw_serde]
pub struct RewardsIndex {
    /// Wad-scaled
    pub index: Uint256,
    pub block_number: u64,
}

/// Per-holder accrual snapshot
#[cw_serde]
#[derive(Default)]
pub struct UserRewards {
    /// Global index at the holder's last settlement
    pub index: Uint256,
    /// Rewards settled but not yet claimed
    pub unclaimed: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-static-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

// Balances, allowances and token info live in `cw20_base::state`.

pub const CONFIG: Item<Config> = Item::new("config");

pub const REWARDS_INDEX: Item<RewardsIndex> = Item::new("rewards_index");

pub const USER_REWARDS: Map<&Addr, UserRewards> = Map::new("user_rewards");
