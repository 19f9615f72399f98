//! L1 Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `querier` - Queries against the yield source, incentives and messenger

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::incentives::{IncentivesQueryMsg, RewardTokenResponse};

use crate::error::ContractError;
use crate::execute::{
    execute_approve_token, execute_cancel_deposit, execute_clear_deposit_cancellation,
    execute_receive, execute_receive_rewards, execute_set_ceiling, execute_set_governor,
    execute_set_l2_bridge, execute_start_deposit_cancellation, execute_update_l2_state,
    execute_withdraw, DepositRecord, WithdrawalRecord,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_ceiling, query_config, query_ledger_balance, query_pending_cancellation,
    query_rewards_index, query_token_mapping,
};
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

    let incentives_controller = deps.api.addr_validate(&msg.incentives_controller)?;
    let reward_token: RewardTokenResponse = deps
        .querier
        .query_wasm_smart(&incentives_controller, &IncentivesQueryMsg::RewardToken {})?;

    let config = Config {
        governor: deps.api.addr_validate(&msg.governor)?,
        messenger: deps.api.addr_validate(&msg.messenger)?,
        l2_bridge: msg.l2_bridge,
        incentives_controller,
        reward_token: reward_token.reward_token,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("governor", config.governor)
        .add_attribute("messenger", config.messenger)
        .add_attribute("l2_bridge", config.l2_bridge)
        .add_attribute("reward_token", config.reward_token))
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
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::StartDepositCancellation {
            l1_token,
            amount,
            l2_recipient,
            rewards_index,
            block_number,
            from_underlying,
            nonce,
        } => execute_start_deposit_cancellation(
            deps,
            info,
            DepositRecord {
                l1_token,
                amount,
                l2_recipient,
                rewards_index,
                block_number,
                from_underlying,
                nonce,
            },
        ),
        ExecuteMsg::CancelDeposit {
            l1_token,
            amount,
            l2_recipient,
            rewards_index,
            block_number,
            from_underlying,
            nonce,
        } => execute_cancel_deposit(
            deps,
            info,
            DepositRecord {
                l1_token,
                amount,
                l2_recipient,
                rewards_index,
                block_number,
                from_underlying,
                nonce,
            },
        ),
        ExecuteMsg::ClearDepositCancellation { nonce } => {
            execute_clear_deposit_cancellation(deps, info, nonce)
        }
        ExecuteMsg::Withdraw {
            l1_token,
            l2_sender,
            recipient,
            amount,
            l2_rewards_index,
            to_underlying,
        } => execute_withdraw(
            deps,
            env,
            WithdrawalRecord {
                l1_token,
                l2_sender,
                recipient,
                amount,
                l2_rewards_index,
                to_underlying,
            },
        ),
        ExecuteMsg::ReceiveRewards {
            l2_sender,
            recipient,
            amount,
        } => execute_receive_rewards(deps, env, l2_sender, recipient, amount),
        ExecuteMsg::UpdateL2State { l1_token } => execute_update_l2_state(deps, env, l1_token),
        ExecuteMsg::ApproveToken { l1_token, l2_token } => {
            execute_approve_token(deps, info, l1_token, l2_token)
        }
        ExecuteMsg::SetCeiling { l1_token, ceiling } => {
            execute_set_ceiling(deps, info, l1_token, ceiling)
        }
        ExecuteMsg::SetL2Bridge { l2_bridge } => execute_set_l2_bridge(deps, info, l2_bridge),
        ExecuteMsg::SetGovernor { governor } => execute_set_governor(deps, info, governor),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::TokenMapping { l1_token } => {
            to_json_binary(&query_token_mapping(deps, l1_token)?)
        }
        QueryMsg::Ceiling { l1_token } => to_json_binary(&query_ceiling(deps, l1_token)?),
        QueryMsg::LedgerBalance { l1_token } => {
            to_json_binary(&query_ledger_balance(deps, env, l1_token)?)
        }
        QueryMsg::RewardsIndex { l1_token } => {
            to_json_binary(&query_rewards_index(deps, env, l1_token)?)
        }
        QueryMsg::PendingCancellation { nonce } => {
            to_json_binary(&query_pending_cancellation(deps, nonce)?)
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
