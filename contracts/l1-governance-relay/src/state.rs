//! State definitions for the L1 governance relay

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// The only account allowed to relay spells
    pub executor: Addr,
    pub messenger: Addr,
    /// L2 governance relay address
    pub l2_governance_relay: String,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-l1-governance-relay";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
