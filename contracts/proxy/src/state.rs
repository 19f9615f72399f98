//! State definitions for the upgrade proxy

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    pub admin: Addr,
}

/// Contract the proxy upgrades, bound by `Initialize`
#[cw_serde]
pub struct Target {
    pub address: Addr,
    /// Code id the target currently runs
    pub implementation: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-proxy";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

pub const TARGET: Item<Target> = Item::new("target");
