//! Reward token minting on behalf of static tokens.

use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, L2_TO_L1_TOKENS};

/// Mint reward tokens for a holder's claim. Only mapped static tokens may
/// call this; they have already settled the holder's accrual.
pub fn execute_mint_rewards(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !L2_TO_L1_TOKENS.has(deps.storage, &info.sender) {
        return Err(ContractError::UnmappedToken {
            token: info.sender.to_string(),
        });
    }
    let reward_token = CONFIG
        .load(deps.storage)?
        .reward_token
        .ok_or(ContractError::RewardTokenNotSet)?;

    let recipient = deps.api.addr_validate(&recipient)?;
    let mint = WasmMsg::Execute {
        contract_addr: reward_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("method", "mint_rewards")
        .add_attribute("l2_token", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}
