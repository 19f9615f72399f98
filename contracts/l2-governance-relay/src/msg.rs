//! Message types for the L2 governance relay

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

use crate::state::SpellExecution;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub messenger: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Set the L1 governance relay, once
    ///
    /// Authorization: Deployer only
    Initialize { l1_governance_relay: String },

    /// Deliver a message from L1
    ///
    /// Authorization: Messenger only, `from_address` must be the L1
    /// governance relay
    ReceiveFromL1 {
        from_address: String,
        payload: Binary,
    },

    /// Run every action of a locked spell
    ///
    /// Authorization: The relay itself
    ExecuteSpell { spell: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(SpellExecutionResponse)]
    SpellExecution { id: u64 },

    /// Executions ordered by id
    #[returns(SpellExecutionsResponse)]
    SpellExecutions {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub deployer: Addr,
    pub messenger: Addr,
    pub l1_governance_relay: Option<String>,
}

#[cw_serde]
pub struct SpellExecutionResponse {
    pub execution: Option<SpellExecution>,
}

#[cw_serde]
pub struct SpellExecutionsResponse {
    pub executions: Vec<SpellExecution>,
}
