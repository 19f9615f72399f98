//! Withdrawals from L2 and rewards index propagation.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, DepsMut, Env, QuerierWrapper, Response, Uint128, Uint256,
    WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::math::to_uint128;
use common::messaging::encode_payload;
use common::yield_source::YieldSourceExecuteMsg;
use common::{ray_mul, L1ToL2Payload, L2ToL1Payload, MessengerExecuteMsg};

use super::mapped_l2_token;
use crate::error::ContractError;
use crate::querier::{current_rewards_index, liquidity_index};
use crate::state::{Config, CONFIG};

/// Withdrawal as carried by the L2 message
pub struct WithdrawalRecord {
    pub l1_token: String,
    pub l2_sender: String,
    pub recipient: String,
    pub amount: Uint128,
    pub l2_rewards_index: Uint256,
    pub to_underlying: bool,
}

pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    withdrawal: WithdrawalRecord,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let l1_token = deps.api.addr_validate(&withdrawal.l1_token)?;
    let recipient = deps.api.addr_validate(&withdrawal.recipient)?;
    mapped_l2_token(deps.storage, &l1_token)?;

    let payload = encode_payload(&L2ToL1Payload::Withdrawal {
        l1_token: withdrawal.l1_token.clone(),
        l2_sender: withdrawal.l2_sender.clone(),
        recipient: withdrawal.recipient.clone(),
        amount: withdrawal.amount,
        l2_rewards_index: withdrawal.l2_rewards_index,
        to_underlying: withdrawal.to_underlying,
    })?;
    let consume = MessengerExecuteMsg::ConsumeMessageFromL2 {
        from: config.l2_bridge.clone(),
        payload,
    }
    .into_cosmos_msg(config.messenger.clone())?;

    let index = liquidity_index(&deps.querier, &l1_token)?;
    let release = to_uint128(ray_mul(Uint256::from(withdrawal.amount), index)?)?;

    let release_msg = if withdrawal.to_underlying {
        WasmMsg::Execute {
            contract_addr: l1_token.to_string(),
            msg: to_json_binary(&YieldSourceExecuteMsg::Withdraw {
                amount: release,
                to: recipient.to_string(),
            })?,
            funds: vec![],
        }
    } else {
        WasmMsg::Execute {
            contract_addr: l1_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient.to_string(),
                amount: release,
            })?,
            funds: vec![],
        }
    };

    let mut response = Response::new()
        .add_message(consume)
        .add_message(release_msg)
        .add_attribute("method", "withdraw")
        .add_attribute("l1_token", l1_token.as_str())
        .add_attribute("l2_sender", withdrawal.l2_sender)
        .add_attribute("recipient", recipient)
        .add_attribute("static_amount", withdrawal.amount)
        .add_attribute("amount", release)
        .add_attribute("to_underlying", withdrawal.to_underlying.to_string());

    // L2 lags behind: refresh it so the withdrawn rewards keep accruing there
    let (update, rewards_index) = index_update_msg(&deps.querier, &config, &l1_token, &env)?;
    if withdrawal.l2_rewards_index < rewards_index {
        response = response
            .add_message(update)
            .add_attribute("rewards_index", rewards_index.to_string());
    }

    Ok(response)
}

pub fn execute_update_l2_state(
    deps: DepsMut,
    env: Env,
    l1_token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let l1_token = deps.api.addr_validate(&l1_token)?;
    mapped_l2_token(deps.storage, &l1_token)?;

    let (update, rewards_index) = index_update_msg(&deps.querier, &config, &l1_token, &env)?;

    Ok(Response::new()
        .add_message(update)
        .add_attribute("method", "update_l2_state")
        .add_attribute("l1_token", l1_token)
        .add_attribute("block_number", env.block.height.to_string())
        .add_attribute("rewards_index", rewards_index.to_string()))
}

/// `IndexUpdate` message carrying the current rewards index of `l1_token`
fn index_update_msg(
    querier: &QuerierWrapper,
    config: &Config,
    l1_token: &Addr,
    env: &Env,
) -> Result<(CosmosMsg, Uint256), ContractError> {
    let rewards_index = current_rewards_index(querier, config, l1_token, env.block.time.seconds())?;
    let payload = encode_payload(&L1ToL2Payload::IndexUpdate {
        l1_token: l1_token.to_string(),
        block_number: env.block.height,
        rewards_index,
    })?;
    let msg = MessengerExecuteMsg::SendMessageToL2 {
        to: config.l2_bridge.clone(),
        payload,
    }
    .into_cosmos_msg(config.messenger.clone())?;
    Ok((msg, rewards_index))
}
