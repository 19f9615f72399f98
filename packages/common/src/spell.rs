//! Spells: administrative payloads executed by the L2 governance relay.
//!
//! A spell is a list of typed [`SpellAction`] commands. The relay renders each
//! command into a contract call made with its own authority (it is the
//! governor of the L2 bridge and the owner of the static tokens). Only the
//! commands listed here can be expressed; there is no raw message escape hatch.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, WasmMsg};

#[cw_serde]
pub enum SpellAction {
    /// Point a static token at a new bridge
    SetWrapperBridge { token: String, bridge: String },
    /// Hand a static token's ownership to a new owner
    TransferWrapperOwnership { token: String, new_owner: String },
    /// Register an (l1_token, l2_token) mapping on the L2 bridge
    ApproveBridge {
        l2_bridge: String,
        l1_token: String,
        l2_token: String,
    },
    SetL1Bridge { l2_bridge: String, l1_bridge: String },
    SetRewardToken {
        l2_bridge: String,
        reward_token: String,
    },
    SetBridgeGovernor { l2_bridge: String, governor: String },
}

/// Owner-gated entry points of the static token reachable from a spell
#[cw_serde]
enum WrapperAdminMsg {
    SetBridge { bridge: String },
    TransferOwnership { new_owner: String },
}

/// Governor-gated entry points of the L2 bridge reachable from a spell
#[cw_serde]
enum RegistryAdminMsg {
    ApproveBridge { l1_token: String, l2_token: String },
    SetL1Bridge { l1_bridge: String },
    SetRewardToken { reward_token: String },
    SetGovernor { governor: String },
}

impl SpellAction {
    /// Contract the action is applied to
    pub fn target(&self) -> &str {
        match self {
            SpellAction::SetWrapperBridge { token, .. }
            | SpellAction::TransferWrapperOwnership { token, .. } => token,
            SpellAction::ApproveBridge { l2_bridge, .. }
            | SpellAction::SetL1Bridge { l2_bridge, .. }
            | SpellAction::SetRewardToken { l2_bridge, .. }
            | SpellAction::SetBridgeGovernor { l2_bridge, .. } => l2_bridge,
        }
    }

    pub fn to_cosmos_msg(&self) -> StdResult<CosmosMsg> {
        let msg = match self {
            SpellAction::SetWrapperBridge { bridge, .. } => {
                to_json_binary(&WrapperAdminMsg::SetBridge {
                    bridge: bridge.clone(),
                })?
            }
            SpellAction::TransferWrapperOwnership { new_owner, .. } => {
                to_json_binary(&WrapperAdminMsg::TransferOwnership {
                    new_owner: new_owner.clone(),
                })?
            }
            SpellAction::ApproveBridge {
                l1_token, l2_token, ..
            } => to_json_binary(&RegistryAdminMsg::ApproveBridge {
                l1_token: l1_token.clone(),
                l2_token: l2_token.clone(),
            })?,
            SpellAction::SetL1Bridge { l1_bridge, .. } => {
                to_json_binary(&RegistryAdminMsg::SetL1Bridge {
                    l1_bridge: l1_bridge.clone(),
                })?
            }
            SpellAction::SetRewardToken { reward_token, .. } => {
                to_json_binary(&RegistryAdminMsg::SetRewardToken {
                    reward_token: reward_token.clone(),
                })?
            }
            SpellAction::SetBridgeGovernor { governor, .. } => {
                to_json_binary(&RegistryAdminMsg::SetGovernor {
                    governor: governor.clone(),
                })?
            }
        };

        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.target().to_string(),
            msg,
            funds: vec![],
        }))
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum SpellQueryMsg {
    #[returns(SpellResponse)]
    Spell {},
}

#[cw_serde]
pub struct SpellResponse {
    pub creator: Addr,
    pub description: String,
    pub actions: Vec<SpellAction>,
    /// Locked spells can no longer be edited and are the only ones the relay runs
    pub locked: bool,
}
