//! Message types for the spell contract

use cosmwasm_schema::cw_serde;

use common::spell::SpellAction;
pub use common::spell::{SpellQueryMsg as QueryMsg, SpellResponse};

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct InstantiateMsg {
    pub description: String,
    pub actions: Vec<SpellAction>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Replace the drafted actions
    ///
    /// Authorization: Creator only, before `Lock`
    UpdateActions {
        description: Option<String>,
        actions: Vec<SpellAction>,
    },

    /// Freeze the spell so the relay can run it
    ///
    /// Authorization: Creator only
    Lock {},
}
