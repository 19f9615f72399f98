//! Handlers that send messages to L1 (withdrawals and bridged rewards).

use cosmwasm_std::{from_json, to_json_binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::messaging::encode_payload;
use common::{L2ToL1Payload, MessengerExecuteMsg};
use static_token::msg::{
    ExecuteMsg as StaticTokenExecuteMsg, QueryMsg as StaticTokenQueryMsg, RewardsIndexResponse,
};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{CONFIG, L2_TO_L1_TOKENS};

/// Burn the caller's static tokens and send a `Withdrawal` to the L1 bridge.
pub fn execute_initiate_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    l2_token: String,
    l1_recipient: String,
    amount: Uint128,
    to_underlying: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let l1_bridge = config.l1_bridge.ok_or(ContractError::L1BridgeNotSet)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let l2_token = deps.api.addr_validate(&l2_token)?;
    let l1_token = L2_TO_L1_TOKENS
        .may_load(deps.storage, &l2_token)?
        .ok_or_else(|| ContractError::UnmappedToken {
            token: l2_token.to_string(),
        })?;

    let index: RewardsIndexResponse = deps
        .querier
        .query_wasm_smart(&l2_token, &StaticTokenQueryMsg::RewardsIndex {})?;

    let burn = WasmMsg::Execute {
        contract_addr: l2_token.to_string(),
        msg: to_json_binary(&StaticTokenExecuteMsg::Burn {
            holder: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let payload = encode_payload(&L2ToL1Payload::Withdrawal {
        l1_token: l1_token.clone(),
        l2_sender: info.sender.to_string(),
        recipient: l1_recipient.clone(),
        amount,
        l2_rewards_index: index.index,
        to_underlying,
    })?;
    let send = MessengerExecuteMsg::SendMessageToL1 {
        to: l1_bridge,
        payload,
    }
    .into_cosmos_msg(config.messenger)?;

    Ok(Response::new()
        .add_message(burn)
        .add_message(send)
        .add_attribute("method", "initiate_withdraw")
        .add_attribute("l1_token", l1_token)
        .add_attribute("l2_token", l2_token)
        .add_attribute("sender", info.sender)
        .add_attribute("l1_recipient", l1_recipient)
        .add_attribute("amount", amount)
        .add_attribute("l2_rewards_index", index.index.to_string())
        .add_attribute("to_underlying", to_underlying.to_string()))
}

/// cw20 hook: reward tokens sent here are burned and bridged to L1.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let reward_token = config
        .reward_token
        .ok_or(ContractError::RewardTokenNotSet)?;
    if info.sender != reward_token {
        return Err(ContractError::InvalidRewardToken {
            token: info.sender.to_string(),
        });
    }
    let l1_bridge = config.l1_bridge.ok_or(ContractError::L1BridgeNotSet)?;

    let amount = cw20_msg.amount;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    let ReceiveMsg::BridgeRewards { l1_recipient } = from_json(&cw20_msg.msg)?;

    let burn = WasmMsg::Execute {
        contract_addr: reward_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    };

    let payload = encode_payload(&L2ToL1Payload::Rewards {
        l2_sender: sender.to_string(),
        recipient: l1_recipient.clone(),
        amount,
    })?;
    let send = MessengerExecuteMsg::SendMessageToL1 {
        to: l1_bridge,
        payload,
    }
    .into_cosmos_msg(config.messenger)?;

    Ok(Response::new()
        .add_message(burn)
        .add_message(send)
        .add_attribute("method", "bridge_rewards")
        .add_attribute("sender", sender)
        .add_attribute("l1_recipient", l1_recipient)
        .add_attribute("amount", amount))
}
