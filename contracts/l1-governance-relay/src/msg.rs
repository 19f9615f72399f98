//! Message types for the L1 governance relay

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub executor: String,
    pub messenger: String,
    pub l2_governance_relay: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Send `spell` (an L2 spell contract) to the L2 governance relay
    ///
    /// Authorization: Executor only
    Relay { spell: String },

    /// Authorization: Executor only
    SetExecutor { executor: String },

    /// Authorization: Executor only
    SetL2GovernanceRelay { l2_governance_relay: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub executor: Addr,
    pub messenger: Addr,
    pub l2_governance_relay: String,
}
