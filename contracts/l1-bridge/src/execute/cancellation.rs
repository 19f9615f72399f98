//! Two-step deposit cancellation.
//!
//! A deposit that L2 has not consumed can be cancelled by its depositor. The
//! messenger settles the race: once the deposit is relayed the cancellation
//! fails with `NotCancellable`, and once cancelled the deposit can no longer be
//! relayed. A depositor whose deposit was delivered first can clear the
//! stale pending entry.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, MessageInfo, Response, Uint128, Uint256, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::math::to_uint128;
use common::messaging::encode_payload;
use common::yield_source::YieldSourceExecuteMsg;
use common::{ray_mul, L1ToL2Payload, MessengerExecuteMsg};

use crate::error::ContractError;
use crate::querier::liquidity_index;
use crate::state::{PendingCancellation, CONFIG, PENDING_CANCELLATIONS};

/// Deposit tuple as the depositor presents it
pub struct DepositRecord {
    pub l1_token: String,
    pub amount: Uint128,
    pub l2_recipient: String,
    pub rewards_index: Uint256,
    pub block_number: u64,
    pub from_underlying: bool,
    pub nonce: u64,
}

impl DepositRecord {
    fn payload(&self, depositor: &Addr) -> Result<Binary, ContractError> {
        Ok(encode_payload(&L1ToL2Payload::Deposit {
            l1_token: self.l1_token.clone(),
            depositor: depositor.to_string(),
            l2_recipient: self.l2_recipient.clone(),
            amount: self.amount,
            block_number: self.block_number,
            rewards_index: self.rewards_index,
            from_underlying: self.from_underlying,
        })?)
    }

    fn matches(&self, pending: &PendingCancellation, depositor: &Addr) -> bool {
        pending.depositor == *depositor
            && pending.l1_token.as_str() == self.l1_token
            && pending.l2_recipient == self.l2_recipient
            && pending.amount == self.amount
            && pending.rewards_index == self.rewards_index
            && pending.block_number == self.block_number
            && pending.from_underlying == self.from_underlying
    }
}

pub fn execute_start_deposit_cancellation(
    deps: DepsMut,
    info: MessageInfo,
    record: DepositRecord,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let l1_token = deps.api.addr_validate(&record.l1_token)?;

    // the messenger rejects the start unless this exact message was sent
    let start = MessengerExecuteMsg::StartL1ToL2MessageCancellation {
        to: config.l2_bridge.clone(),
        payload: record.payload(&info.sender)?,
        nonce: record.nonce,
    }
    .into_cosmos_msg(config.messenger)?;

    PENDING_CANCELLATIONS.save(
        deps.storage,
        record.nonce,
        &PendingCancellation {
            depositor: info.sender.clone(),
            l1_token,
            l2_recipient: record.l2_recipient,
            amount: record.amount,
            rewards_index: record.rewards_index,
            block_number: record.block_number,
            from_underlying: record.from_underlying,
            l2_bridge: config.l2_bridge,
        },
    )?;

    Ok(Response::new()
        .add_message(start)
        .add_attribute("method", "start_deposit_cancellation")
        .add_attribute("depositor", info.sender)
        .add_attribute("l1_token", record.l1_token)
        .add_attribute("amount", record.amount)
        .add_attribute("nonce", record.nonce.to_string()))
}

pub fn execute_cancel_deposit(
    deps: DepsMut,
    info: MessageInfo,
    record: DepositRecord,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let pending = PENDING_CANCELLATIONS
        .may_load(deps.storage, record.nonce)?
        .filter(|pending| record.matches(pending, &info.sender))
        .ok_or(ContractError::CancellationNotStarted {
            nonce: record.nonce,
        })?;

    // addressed to the L2 bridge the deposit was sent to, even after rewiring
    let cancel = MessengerExecuteMsg::CancelL1ToL2Message {
        to: pending.l2_bridge.clone(),
        payload: record.payload(&info.sender)?,
        nonce: record.nonce,
    }
    .into_cosmos_msg(config.messenger)?;

    PENDING_CANCELLATIONS.remove(deps.storage, record.nonce);

    // the static amount at today's index: the deposit plus interest earned while locked
    let index = liquidity_index(&deps.querier, &pending.l1_token)?;
    let refund = to_uint128(ray_mul(Uint256::from(pending.amount), index)?)?;

    let refund_msg = if pending.from_underlying {
        to_json_binary(&YieldSourceExecuteMsg::Withdraw {
            amount: refund,
            to: info.sender.to_string(),
        })?
    } else {
        to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: refund,
        })?
    };

    Ok(Response::new()
        .add_message(cancel)
        .add_message(WasmMsg::Execute {
            contract_addr: pending.l1_token.to_string(),
            msg: refund_msg,
            funds: vec![],
        })
        .add_attribute("method", "cancel_deposit")
        .add_attribute("depositor", info.sender)
        .add_attribute("l1_token", pending.l1_token)
        .add_attribute("static_amount", pending.amount)
        .add_attribute("refund", refund)
        .add_attribute("to_underlying", pending.from_underlying.to_string())
        .add_attribute("nonce", record.nonce.to_string()))
}

/// Drop a pending cancellation the depositor no longer pursues, typically
/// because L2 consumed the deposit first
pub fn execute_clear_deposit_cancellation(
    deps: DepsMut,
    info: MessageInfo,
    nonce: u64,
) -> Result<Response, ContractError> {
    PENDING_CANCELLATIONS
        .may_load(deps.storage, nonce)?
        .filter(|pending| pending.depositor == info.sender)
        .ok_or(ContractError::CancellationNotStarted { nonce })?;

    PENDING_CANCELLATIONS.remove(deps.storage, nonce);

    Ok(Response::new()
        .add_attribute("method", "clear_deposit_cancellation")
        .add_attribute("depositor", info.sender)
        .add_attribute("nonce", nonce.to_string()))
}
