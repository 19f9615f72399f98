//! State definitions for the L2 governance relay

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// May call `Initialize` once
    pub deployer: Addr,
    pub messenger: Addr,
    /// Set by `Initialize`
    pub l1_governance_relay: Option<String>,
}

#[cw_serde]
pub enum ExecutionStatus {
    Pending,
    Succeeded,
    Failed { error: String },
}

#[cw_serde]
pub struct SpellExecution {
    pub id: u64,
    pub spell: Addr,
    pub height: u64,
    pub status: ExecutionStatus,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:atoken-bridge-l2-governance-relay";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Id of the next spell execution (also its reply id)
pub const NEXT_EXECUTION_ID: Item<u64> = Item::new("next_execution_id");

pub const EXECUTIONS: Map<u64, SpellExecution> = Map::new("executions");
