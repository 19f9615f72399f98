//! Static Token Contract - Entry Points
//!
//! Balances and allowances are plain cw20-base; every path that moves a
//! balance settles the affected holders' rewards first.

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Storage, Uint128, Uint256, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20Coin, MinterResponse};
use cw20_base::allowances::{
    execute_decrease_allowance, execute_increase_allowance, execute_transfer_from,
    query_allowance,
};
use cw20_base::contract::{
    execute_burn as cw20_burn, execute_mint as cw20_mint, execute_send, execute_transfer,
    query_balance, query_token_info,
};
use cw20_base::state::TOKEN_INFO;

use common::messaging::RewardsMinterMsg;

use crate::error::ContractError;
use crate::msg::{
    ClaimableRewardsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg,
    RewardsIndexResponse, UserRewardsIndexResponse,
};
use crate::rewards::{pending, settle, validate_push};
use crate::state::{
    Config, RewardsIndex, UserRewards, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REWARDS_INDEX,
    USER_REWARDS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        bridge: deps.api.addr_validate(&msg.bridge)?,
    };
    let recipient = deps.api.addr_validate(&msg.recipient)?;

    let initial_balances = if msg.initial_supply.is_zero() {
        vec![]
    } else {
        vec![Cw20Coin {
            address: recipient.to_string(),
            amount: msg.initial_supply,
        }]
    };
    // The bridge is the cw20 minter; SetBridge keeps the two in step.
    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info,
        cw20_base::msg::InstantiateMsg {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            initial_balances,
            mint: Some(MinterResponse {
                minter: config.bridge.to_string(),
                cap: None,
            }),
            marketing: None,
        },
    )?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(deps.storage, &config)?;
    REWARDS_INDEX.save(
        deps.storage,
        &RewardsIndex {
            index: Uint256::zero(),
            block_number: 0,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("owner", config.owner)
        .add_attribute("bridge", config.bridge)
        .add_attribute("initial_supply", msg.initial_supply)
        .add_attribute("recipient", recipient))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            let to = deps.api.addr_validate(&recipient)?;
            settle_pair(deps.storage, &info.sender, &to)?;
            Ok(execute_transfer(deps, env, info, recipient, amount)?)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => {
            let from = deps.api.addr_validate(&owner)?;
            let to = deps.api.addr_validate(&recipient)?;
            settle_pair(deps.storage, &from, &to)?;
            Ok(execute_transfer_from(deps, env, info, owner, recipient, amount)?)
        }
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => {
            let to = deps.api.addr_validate(&contract)?;
            settle_pair(deps.storage, &info.sender, &to)?;
            Ok(execute_send(deps, env, info, contract, amount, msg)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, env, info, recipient, amount),
        ExecuteMsg::Burn { holder, amount } => execute_burn(deps, env, info, holder, amount),
        ExecuteMsg::PushRewardsIndex {
            block_number,
            index,
        } => execute_push_rewards_index(deps, info, block_number, index),
        ExecuteMsg::ClaimRewards { recipient } => execute_claim_rewards(deps, info, recipient),
        ExecuteMsg::SetBridge { bridge } => execute_set_bridge(deps, info, bridge),
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

/// Settle both sides of a balance move at their current balances
fn settle_pair(storage: &mut dyn Storage, from: &Addr, to: &Addr) -> Result<(), ContractError> {
    settle(storage, from)?;
    settle(storage, to)?;
    Ok(())
}

// ============================================================================
// Bridge
// ============================================================================

fn assert_bridge(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if CONFIG.load(storage)?.bridge != *sender {
        return Err(ContractError::NotBridge);
    }
    Ok(())
}

fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_bridge(deps.storage, &info.sender)?;

    let holder = deps.api.addr_validate(&recipient)?;
    settle(deps.storage, &holder)?;
    Ok(cw20_mint(deps, env, info, recipient, amount)?)
}

fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    holder: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_bridge(deps.storage, &info.sender)?;

    let holder = deps.api.addr_validate(&holder)?;
    settle(deps.storage, &holder)?;
    // cw20-base burns from the caller's balance
    let burner = MessageInfo {
        sender: holder,
        funds: vec![],
    };
    let res = cw20_burn(deps, env, burner, amount)?;
    Ok(res.add_attribute("by", info.sender))
}

fn execute_push_rewards_index(
    deps: DepsMut,
    info: MessageInfo,
    block_number: u64,
    index: Uint256,
) -> Result<Response, ContractError> {
    assert_bridge(deps.storage, &info.sender)?;

    let current = REWARDS_INDEX.load(deps.storage)?;
    validate_push(&current, block_number, index)?;
    REWARDS_INDEX.save(
        deps.storage,
        &RewardsIndex {
            index,
            block_number,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "push_rewards_index")
        .add_attribute("block_number", block_number.to_string())
        .add_attribute("index", index.to_string()))
}

// ============================================================================
// Rewards
// ============================================================================

fn execute_claim_rewards(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let user = settle(deps.storage, &info.sender)?;
    let amount = user.unclaimed;

    let response = Response::new()
        .add_attribute("method", "claim_rewards")
        .add_attribute("holder", info.sender.as_str())
        .add_attribute("recipient", recipient.as_str())
        .add_attribute("amount", amount);

    if amount.is_zero() {
        return Ok(response);
    }

    USER_REWARDS.save(
        deps.storage,
        &info.sender,
        &UserRewards {
            index: user.index,
            unclaimed: Uint128::zero(),
        },
    )?;

    let bridge = CONFIG.load(deps.storage)?.bridge;
    Ok(response.add_message(WasmMsg::Execute {
        contract_addr: bridge.to_string(),
        msg: to_json_binary(&RewardsMinterMsg::MintRewards {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

// ============================================================================
// Owner
// ============================================================================

fn execute_set_bridge(
    deps: DepsMut,
    info: MessageInfo,
    bridge: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotOwner);
    }

    config.bridge = deps.api.addr_validate(&bridge)?;
    CONFIG.save(deps.storage, &config)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.mint = Some(cw20_base::state::MinterData {
        minter: config.bridge.clone(),
        cap: None,
    });
    TOKEN_INFO.save(deps.storage, &token_info)?;

    Ok(Response::new()
        .add_attribute("method", "set_bridge")
        .add_attribute("bridge", config.bridge))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::NotOwner);
    }

    config.owner = deps.api.addr_validate(&new_owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("new_owner", config.owner))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                owner: config.owner,
                bridge: config.bridge,
            })
        }
        QueryMsg::RewardsIndex {} => {
            let index = REWARDS_INDEX.load(deps.storage)?;
            to_json_binary(&RewardsIndexResponse {
                index: index.index,
                block_number: index.block_number,
            })
        }
        QueryMsg::UserRewardsIndex { address } => {
            let address = deps.api.addr_validate(&address)?;
            let user = USER_REWARDS
                .may_load(deps.storage, &address)?
                .unwrap_or_default();
            to_json_binary(&UserRewardsIndexResponse {
                index: user.index,
                unclaimed: user.unclaimed,
            })
        }
        QueryMsg::ClaimableRewards { address } => {
            to_json_binary(&query_claimable_rewards(deps, address)?)
        }
    }
}

fn query_claimable_rewards(deps: Deps, address: String) -> StdResult<ClaimableRewardsResponse> {
    let address = deps.api.addr_validate(&address)?;
    let user =
        pending(deps.storage, &address).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(ClaimableRewardsResponse {
        amount: user.unclaimed,
    })
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
