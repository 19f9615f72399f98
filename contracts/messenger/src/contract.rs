//! Messenger Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;

use common::L2HandlerMsg;

use crate::error::ContractError;
use crate::hash::{bytes32_to_hex, l1_to_l2_message_key, l2_to_l1_message_key};
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, L1ToL2MessageResponse, L2ToL1MessageResponse,
    MigrateMsg, NonceResponse, QueryMsg,
};
use crate::state::{
    Config, L1ToL2Message, L2ToL1Entry, MessageStatus, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    L1_TO_L2_MESSAGES, L1_TO_L2_NONCE, L1_TO_L2_QUEUE, L2_TO_L1_MESSAGES,
};

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
        owner: deps.api.addr_validate(&msg.owner)?,
        finality_delay_blocks: msg.finality_delay_blocks,
        cancellation_delay_seconds: msg.cancellation_delay_seconds,
    };
    CONFIG.save(deps.storage, &config)?;
    L1_TO_L2_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute(
            "finality_delay_blocks",
            config.finality_delay_blocks.to_string(),
        )
        .add_attribute(
            "cancellation_delay_seconds",
            config.cancellation_delay_seconds.to_string(),
        ))
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
        ExecuteMsg::SendMessageToL2 { to, payload } => {
            execute_send_message_to_l2(deps, env, info, to, payload)
        }
        ExecuteMsg::RelayMessageToL2 {
            from,
            to,
            payload,
            nonce,
        } => execute_relay_message_to_l2(deps, env, from, to, payload, nonce),
        ExecuteMsg::StartL1ToL2MessageCancellation { to, payload, nonce } => {
            execute_start_cancellation(deps, env, info, to, payload, nonce)
        }
        ExecuteMsg::CancelL1ToL2Message { to, payload, nonce } => {
            execute_cancel_message(deps, env, info, to, payload, nonce)
        }
        ExecuteMsg::SendMessageToL1 { to, payload } => {
            execute_send_message_to_l1(deps, env, info, to, payload)
        }
        ExecuteMsg::ConsumeMessageFromL2 { from, payload } => {
            execute_consume_message_from_l2(deps, env, info, from, payload)
        }
        ExecuteMsg::UpdateConfig {
            finality_delay_blocks,
            cancellation_delay_seconds,
        } => execute_update_config(deps, info, finality_delay_blocks, cancellation_delay_seconds),
    }
}

// ============================================================================
// L1 -> L2
// ============================================================================

fn execute_send_message_to_l2(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let nonce = L1_TO_L2_NONCE.load(deps.storage)?;
    L1_TO_L2_NONCE.save(deps.storage, &(nonce + 1))?;

    let key = l1_to_l2_message_key(info.sender.as_str(), &to, nonce, payload.as_slice());
    let message = L1ToL2Message {
        from: info.sender.clone(),
        to: to.clone(),
        payload,
        nonce,
        sent_at_height: env.block.height,
        status: MessageStatus::Pending,
        cancellation_requested_at: None,
    };
    L1_TO_L2_MESSAGES.save(deps.storage, &key, &message)?;
    L1_TO_L2_QUEUE.save(deps.storage, (info.sender.as_str(), to.as_str(), nonce), &Empty {})?;

    Ok(Response::new()
        .set_data(to_json_binary(&nonce)?)
        .add_attribute("method", "send_message_to_l2")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message_key", bytes32_to_hex(&key)))
}

fn execute_relay_message_to_l2(
    deps: DepsMut,
    env: Env,
    from: String,
    to: String,
    payload: Binary,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let key = l1_to_l2_message_key(&from, &to, nonce, payload.as_slice());
    let key_hex = bytes32_to_hex(&key);

    let mut message = L1_TO_L2_MESSAGES
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::MessageNotFound {
            key: key_hex.clone(),
        })?;

    match message.status {
        MessageStatus::Consumed => return Err(ContractError::AlreadyConsumed { key: key_hex }),
        MessageStatus::Cancelled => return Err(ContractError::MessageCancelled { key: key_hex }),
        MessageStatus::Pending => {}
    }

    let ready_at_height = message.sent_at_height + config.finality_delay_blocks;
    if env.block.height < ready_at_height {
        return Err(ContractError::NotYetFinalized { ready_at_height });
    }

    // Earlier messages on the same route go first; cancelled ones leave the queue.
    let earliest = L1_TO_L2_QUEUE
        .prefix((from.as_str(), to.as_str()))
        .keys(deps.storage, None, None, Order::Ascending)
        .next()
        .transpose()?;
    if let Some(earliest) = earliest {
        if earliest < nonce {
            return Err(ContractError::OutOfOrder { nonce, earliest });
        }
    }

    message.status = MessageStatus::Consumed;
    L1_TO_L2_MESSAGES.save(deps.storage, &key, &message)?;
    L1_TO_L2_QUEUE.remove(deps.storage, (from.as_str(), to.as_str(), nonce));

    // The recipient runs in this transaction; if it fails, consumption reverts too.
    let delivery = WasmMsg::Execute {
        contract_addr: to.clone(),
        msg: to_json_binary(&L2HandlerMsg::ReceiveFromL1 {
            from_address: from.clone(),
            payload,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(delivery)
        .add_attribute("method", "relay_message_to_l2")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message_key", key_hex))
}

fn execute_start_cancellation(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    payload: Binary,
    nonce: u64,
) -> Result<Response, ContractError> {
    let key = l1_to_l2_message_key(info.sender.as_str(), &to, nonce, payload.as_slice());
    let key_hex = bytes32_to_hex(&key);

    let mut message = L1_TO_L2_MESSAGES
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::MessageNotFound {
            key: key_hex.clone(),
        })?;

    match message.status {
        MessageStatus::Consumed => return Err(ContractError::NotCancellable { key: key_hex }),
        MessageStatus::Cancelled => return Err(ContractError::MessageCancelled { key: key_hex }),
        MessageStatus::Pending => {}
    }

    message.cancellation_requested_at = Some(env.block.time);
    L1_TO_L2_MESSAGES.save(deps.storage, &key, &message)?;

    Ok(Response::new()
        .add_attribute("method", "start_l1_to_l2_message_cancellation")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message_key", key_hex))
}

fn execute_cancel_message(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    payload: Binary,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let key = l1_to_l2_message_key(info.sender.as_str(), &to, nonce, payload.as_slice());
    let key_hex = bytes32_to_hex(&key);

    let mut message = L1_TO_L2_MESSAGES
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::MessageNotFound {
            key: key_hex.clone(),
        })?;

    match message.status {
        MessageStatus::Consumed => return Err(ContractError::NotCancellable { key: key_hex }),
        MessageStatus::Cancelled => return Err(ContractError::MessageCancelled { key: key_hex }),
        MessageStatus::Pending => {}
    }

    let requested_at = message
        .cancellation_requested_at
        .ok_or_else(|| ContractError::CancellationNotStarted {
            key: key_hex.clone(),
        })?;
    let ready_at = requested_at.plus_seconds(config.cancellation_delay_seconds);
    if env.block.time < ready_at {
        return Err(ContractError::CancellationNotReady {
            remaining_seconds: ready_at.seconds() - env.block.time.seconds(),
        });
    }

    message.status = MessageStatus::Cancelled;
    L1_TO_L2_MESSAGES.save(deps.storage, &key, &message)?;
    L1_TO_L2_QUEUE.remove(deps.storage, (info.sender.as_str(), to.as_str(), nonce));

    Ok(Response::new()
        .add_attribute("method", "cancel_l1_to_l2_message")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("message_key", key_hex))
}

// ============================================================================
// L2 -> L1
// ============================================================================

fn execute_send_message_to_l1(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let key = l2_to_l1_message_key(info.sender.as_str(), &to, payload.as_slice());

    let mut entry = L2_TO_L1_MESSAGES
        .may_load(deps.storage, &key)?
        .unwrap_or(L2ToL1Entry {
            pending: vec![],
            consumed: 0,
        });
    entry.pending.push(env.block.height);
    L2_TO_L1_MESSAGES.save(deps.storage, &key, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "send_message_to_l1")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("message_key", bytes32_to_hex(&key)))
}

fn execute_consume_message_from_l2(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let key = l2_to_l1_message_key(&from, info.sender.as_str(), payload.as_slice());
    let key_hex = bytes32_to_hex(&key);

    let mut entry = L2_TO_L1_MESSAGES
        .may_load(deps.storage, &key)?
        .ok_or_else(|| ContractError::MessageNotFound {
            key: key_hex.clone(),
        })?;

    let Some(&sent_at_height) = entry.pending.first() else {
        return Err(ContractError::AlreadyConsumed { key: key_hex });
    };

    let ready_at_height = sent_at_height + config.finality_delay_blocks;
    if env.block.height < ready_at_height {
        return Err(ContractError::NotYetFinalized { ready_at_height });
    }

    entry.pending.remove(0);
    entry.consumed += 1;
    L2_TO_L1_MESSAGES.save(deps.storage, &key, &entry)?;

    Ok(Response::new()
        .add_attribute("method", "consume_message_from_l2")
        .add_attribute("from", from)
        .add_attribute("to", info.sender)
        .add_attribute("message_key", key_hex))
}

// ============================================================================
// Configuration
// ============================================================================

fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    finality_delay_blocks: Option<u64>,
    cancellation_delay_seconds: Option<u64>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if let Some(blocks) = finality_delay_blocks {
        config.finality_delay_blocks = blocks;
    }
    if let Some(seconds) = cancellation_delay_seconds {
        config.cancellation_delay_seconds = seconds;
    }
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute(
            "finality_delay_blocks",
            config.finality_delay_blocks.to_string(),
        )
        .add_attribute(
            "cancellation_delay_seconds",
            config.cancellation_delay_seconds.to_string(),
        ))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::L1ToL2Nonce {} => to_json_binary(&NonceResponse {
            nonce: L1_TO_L2_NONCE.load(deps.storage)?,
        }),
        QueryMsg::L1ToL2Message {
            from,
            to,
            payload,
            nonce,
        } => to_json_binary(&query_l1_to_l2_message(deps, from, to, payload, nonce)?),
        QueryMsg::L2ToL1Message { from, to, payload } => {
            to_json_binary(&query_l2_to_l1_message(deps, from, to, payload)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        finality_delay_blocks: config.finality_delay_blocks,
        cancellation_delay_seconds: config.cancellation_delay_seconds,
    })
}

fn query_l1_to_l2_message(
    deps: Deps,
    from: String,
    to: String,
    payload: Binary,
    nonce: u64,
) -> StdResult<L1ToL2MessageResponse> {
    let key = l1_to_l2_message_key(&from, &to, nonce, payload.as_slice());
    let message = L1_TO_L2_MESSAGES.may_load(deps.storage, &key)?;
    Ok(L1ToL2MessageResponse {
        key: bytes32_to_hex(&key),
        exists: message.is_some(),
        status: message.as_ref().map(|m| m.status.clone()),
        sent_at_height: message.as_ref().map(|m| m.sent_at_height),
        cancellation_requested_at: message.and_then(|m| m.cancellation_requested_at),
    })
}

fn query_l2_to_l1_message(
    deps: Deps,
    from: String,
    to: String,
    payload: Binary,
) -> StdResult<L2ToL1MessageResponse> {
    let key = l2_to_l1_message_key(&from, &to, payload.as_slice());
    let entry = L2_TO_L1_MESSAGES.may_load(deps.storage, &key)?;
    Ok(L2ToL1MessageResponse {
        key: bytes32_to_hex(&key),
        pending: entry.as_ref().map(|e| e.pending.len() as u64).unwrap_or(0),
        consumed: entry.map(|e| e.consumed).unwrap_or(0),
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
