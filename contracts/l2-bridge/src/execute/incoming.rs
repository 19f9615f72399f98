//! Handlers for messages delivered from L1.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, MessageInfo, Response, StdResult,
    Storage, Uint128, Uint256, WasmMsg,
};

use common::messaging::decode_payload;
use common::L1ToL2Payload;
use static_token::msg::{
    ExecuteMsg as StaticTokenExecuteMsg, QueryMsg as StaticTokenQueryMsg, RewardsIndexResponse,
};

use crate::error::ContractError;
use crate::state::{CONFIG, L1_TO_L2_TOKENS};

/// Entry point for `ReceiveFromL1`; authenticates both the messenger and the
/// L1 sender before dispatching on the payload.
pub fn execute_receive_from_l1(
    deps: DepsMut,
    info: MessageInfo,
    from_address: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.messenger {
        return Err(ContractError::NotMessenger);
    }
    if config.l1_bridge.as_deref() != Some(from_address.as_str()) {
        return Err(ContractError::UnauthorizedSender {
            sender: from_address,
        });
    }

    match decode_payload::<L1ToL2Payload>(&payload)? {
        L1ToL2Payload::Deposit {
            l1_token,
            depositor,
            l2_recipient,
            amount,
            block_number,
            rewards_index,
            from_underlying: _,
        } => handle_deposit(
            deps,
            l1_token,
            depositor,
            l2_recipient,
            amount,
            block_number,
            rewards_index,
        ),
        L1ToL2Payload::IndexUpdate {
            l1_token,
            block_number,
            rewards_index,
        } => handle_index_update(deps, l1_token, block_number, rewards_index),
    }
}

fn mapped_l2_token(storage: &dyn Storage, l1_token: &str) -> Result<Addr, ContractError> {
    L1_TO_L2_TOKENS
        .may_load(storage, l1_token)?
        .ok_or_else(|| ContractError::UnmappedToken {
            token: l1_token.to_string(),
        })
}

/// Push to the static token only when the index comes from a newer L1 block
/// and does not lower it. Older or lower indices are dropped: messages can
/// arrive out of order and a stale index must never fail a delivery.
fn index_push_msg(
    deps: Deps,
    l2_token: &Addr,
    block_number: u64,
    rewards_index: Uint256,
) -> StdResult<Option<CosmosMsg>> {
    let current: RewardsIndexResponse = deps
        .querier
        .query_wasm_smart(l2_token, &StaticTokenQueryMsg::RewardsIndex {})?;
    if block_number <= current.block_number || rewards_index < current.index {
        return Ok(None);
    }

    Ok(Some(
        WasmMsg::Execute {
            contract_addr: l2_token.to_string(),
            msg: to_json_binary(&StaticTokenExecuteMsg::PushRewardsIndex {
                block_number,
                index: rewards_index,
            })?,
            funds: vec![],
        }
        .into(),
    ))
}

fn handle_deposit(
    deps: DepsMut,
    l1_token: String,
    depositor: String,
    l2_recipient: String,
    amount: Uint128,
    block_number: u64,
    rewards_index: Uint256,
) -> Result<Response, ContractError> {
    let l2_token = mapped_l2_token(deps.storage, &l1_token)?;
    let recipient = deps.api.addr_validate(&l2_recipient)?;

    // Index first, so the new balance only accrues from this deposit onwards
    let push = index_push_msg(deps.as_ref(), &l2_token, block_number, rewards_index)?;
    let index_pushed = push.is_some();

    let mint = WasmMsg::Execute {
        contract_addr: l2_token.to_string(),
        msg: to_json_binary(&StaticTokenExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_messages(push)
        .add_message(mint)
        .add_attribute("method", "handle_deposit")
        .add_attribute("l1_token", l1_token)
        .add_attribute("l2_token", l2_token)
        .add_attribute("depositor", depositor)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("block_number", block_number.to_string())
        .add_attribute("rewards_index", rewards_index.to_string())
        .add_attribute("index_pushed", index_pushed.to_string()))
}

fn handle_index_update(
    deps: DepsMut,
    l1_token: String,
    block_number: u64,
    rewards_index: Uint256,
) -> Result<Response, ContractError> {
    let l2_token = mapped_l2_token(deps.storage, &l1_token)?;
    let push = index_push_msg(deps.as_ref(), &l2_token, block_number, rewards_index)?;
    let index_pushed = push.is_some();

    Ok(Response::new()
        .add_messages(push)
        .add_attribute("method", "handle_index_update")
        .add_attribute("l1_token", l1_token)
        .add_attribute("l2_token", l2_token)
        .add_attribute("block_number", block_number.to_string())
        .add_attribute("rewards_index", rewards_index.to_string())
        .add_attribute("index_pushed", index_pushed.to_string()))
}
