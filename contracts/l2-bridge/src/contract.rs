//! L2 Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve_bridge, execute_initiate_withdraw, execute_mint_rewards, execute_receive,
    execute_receive_from_l1, execute_set_governor, execute_set_l1_bridge,
    execute_set_reward_token,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_l1_token, query_l2_token, query_mappings};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        governor: deps.api.addr_validate(&msg.governor)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l1_bridge: msg.l1_bridge,
        reward_token: msg
            .reward_token
            .map(|token| deps.api.addr_validate(&token))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("governor", config.governor)
        .add_attribute("messenger", config.messenger))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::ReceiveFromL1 {
            from_address,
            payload,
        } => execute_receive_from_l1(deps, info, from_address, payload),
        ExecuteMsg::InitiateWithdraw {
            l2_token,
            l1_recipient,
            amount,
            to_underlying,
        } => execute_initiate_withdraw(deps, info, l2_token, l1_recipient, amount, to_underlying),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::MintRewards { recipient, amount } => {
            execute_mint_rewards(deps, info, recipient, amount)
        }
        ExecuteMsg::ApproveBridge { l1_token, l2_token } => {
            execute_approve_bridge(deps, info, l1_token, l2_token)
        }
        ExecuteMsg::SetL1Bridge { l1_bridge } => execute_set_l1_bridge(deps, info, l1_bridge),
        ExecuteMsg::SetRewardToken { reward_token } => {
            execute_set_reward_token(deps, info, reward_token)
        }
        ExecuteMsg::SetGovernor { governor } => execute_set_governor(deps, info, governor),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::L2Token { l1_token } => to_json_binary(&query_l2_token(deps, l1_token)?),
        QueryMsg::L1Token { l2_token } => to_json_binary(&query_l1_token(deps, l2_token)?),
        QueryMsg::Mappings { start_after, limit } => {
            to_json_binary(&query_mappings(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
