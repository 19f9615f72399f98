//! Message types for the upgrade proxy

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Bind the target contract. The proxy must be its wasm admin and it must
    /// run `implementation`.
    ///
    /// Authorization: Admin only, once
    Initialize { target: String, implementation: u64 },

    /// Migrate the target to `new_implementation`
    ///
    /// Authorization: Admin only
    Upgrade {
        new_implementation: u64,
        migrate_msg: Binary,
    },

    /// Authorization: Admin only
    ChangeAdmin { admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub target: Option<Addr>,
    pub implementation: Option<u64>,
}
