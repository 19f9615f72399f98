//! Deposit handler.
//!
//! Deposits arrive as cw20 `Send`s. The yield-bearing token is credited to
//! the bridge before the hook runs; the underlying asset is forwarded into the
//! yield source on behalf of the bridge within the same transaction.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Uint128, Uint256,
    WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::math::to_uint128;
use common::messaging::encode_payload;
use common::yield_source::YieldSourceHookMsg;
use common::{ray_div, L1ToL2Payload, MessengerExecuteMsg};

use super::mapped_l2_token;
use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::querier::{current_rewards_index, next_message_nonce, reserve_data, token_balance};
use crate::state::{CEILINGS, CONFIG};

pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Deposit {
            l1_token,
            l2_recipient,
            referral_code,
            from_underlying,
        } => {
            let depositor = deps.api.addr_validate(&cw20_msg.sender)?;
            let l1_token = deps.api.addr_validate(&l1_token)?;
            execute_deposit(
                deps,
                env,
                info.sender,
                Deposit {
                    depositor,
                    l1_token,
                    l2_recipient,
                    amount: cw20_msg.amount,
                    referral_code,
                    from_underlying,
                },
            )
        }
    }
}

struct Deposit {
    depositor: Addr,
    l1_token: Addr,
    l2_recipient: String,
    amount: Uint128,
    referral_code: u16,
    from_underlying: bool,
}

fn execute_deposit(
    deps: DepsMut,
    env: Env,
    sent_token: Addr,
    deposit: Deposit,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    mapped_l2_token(deps.storage, &deposit.l1_token)?;

    if deposit.amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let reserve = reserve_data(&deps.querier, &deposit.l1_token)?;
    let bridge = env.contract.address.clone();
    let held = token_balance(&deps.querier, &deposit.l1_token, &bridge)?;

    let mut messages = vec![];
    let ledger_before = if deposit.from_underlying {
        if sent_token != reserve.underlying {
            return Err(ContractError::InvalidDepositAsset {
                token: sent_token.to_string(),
                l1_token: deposit.l1_token.to_string(),
            });
        }
        messages.push(WasmMsg::Execute {
            contract_addr: sent_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: deposit.l1_token.to_string(),
                amount: deposit.amount,
                msg: to_json_binary(&YieldSourceHookMsg::Deposit {
                    on_behalf_of: bridge.to_string(),
                    referral_code: deposit.referral_code,
                })?,
            })?,
            funds: vec![],
        });
        held
    } else {
        if sent_token != deposit.l1_token {
            return Err(ContractError::InvalidDepositAsset {
                token: sent_token.to_string(),
                l1_token: deposit.l1_token.to_string(),
            });
        }
        // the cw20 send has already credited the bridge
        held
            .checked_sub(deposit.amount)
            .map_err(|_| ContractError::DepositNotCredited {
                amount: deposit.amount,
            })?
    };

    let ceiling = CEILINGS.load(deps.storage, &deposit.l1_token)?;
    let ledger_after = ledger_before
        .checked_add(deposit.amount)
        .map_err(|_| ContractError::AboveCeiling { ceiling })?;
    if ledger_after > ceiling {
        return Err(ContractError::AboveCeiling { ceiling });
    }

    let static_amount = to_uint128(ray_div(
        Uint256::from(deposit.amount),
        reserve.liquidity_index,
    )?)?;
    if static_amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let rewards_index =
        current_rewards_index(&deps.querier, &config, &deposit.l1_token, env.block.time.seconds())?;
    let nonce = next_message_nonce(&deps.querier, &config.messenger)?;

    let payload = encode_payload(&L1ToL2Payload::Deposit {
        l1_token: deposit.l1_token.to_string(),
        depositor: deposit.depositor.to_string(),
        l2_recipient: deposit.l2_recipient.clone(),
        amount: static_amount,
        block_number: env.block.height,
        rewards_index,
        from_underlying: deposit.from_underlying,
    })?;
    let send = MessengerExecuteMsg::SendMessageToL2 {
        to: config.l2_bridge,
        payload,
    }
    .into_cosmos_msg(config.messenger)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_message(send)
        .add_attribute("method", "deposit")
        .add_attribute("depositor", deposit.depositor)
        .add_attribute("l1_token", deposit.l1_token)
        .add_attribute("l2_recipient", deposit.l2_recipient)
        .add_attribute("amount", deposit.amount)
        .add_attribute("static_amount", static_amount)
        .add_attribute("from_underlying", deposit.from_underlying.to_string())
        .add_attribute("referral_code", deposit.referral_code.to_string())
        .add_attribute("block_number", env.block.height.to_string())
        .add_attribute("rewards_index", rewards_index.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("ledger_balance", ledger_after))
}
