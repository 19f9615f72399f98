//! Paying out reward tokens bridged back from L2.

use cosmwasm_std::{to_json_binary, DepsMut, Env, Order, Response, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use common::incentives::IncentivesExecuteMsg;
use common::messaging::encode_payload;
use common::{L2ToL1Payload, MessengerExecuteMsg};

use crate::error::ContractError;
use crate::querier::{token_balance, unclaimed_rewards};
use crate::state::{CONFIG, TOKEN_MAPPINGS};

/// Consume a `Rewards` message and pay `amount` of the reward token.
///
/// The bridge pays from its own reward balance first. Any shortfall is claimed
/// from the incentives controller, where the bridge accrues rewards as the
/// holder of every deposited token.
pub fn execute_receive_rewards(
    deps: DepsMut,
    env: Env,
    l2_sender: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }

    let consume = MessengerExecuteMsg::ConsumeMessageFromL2 {
        from: config.l2_bridge.clone(),
        payload: encode_payload(&L2ToL1Payload::Rewards {
            l2_sender: l2_sender.clone(),
            recipient,
            amount,
        })?,
    }
    .into_cosmos_msg(config.messenger.clone())?;

    let bridge = env.contract.address;
    let held = token_balance(&deps.querier, &config.reward_token, &bridge)?;

    let mut response = Response::new()
        .add_message(consume)
        .add_attribute("method", "receive_rewards")
        .add_attribute("l2_sender", l2_sender)
        .add_attribute("recipient", recipient_addr.as_str())
        .add_attribute("amount", amount);

    if held < amount {
        let shortfall = amount.checked_sub(held)?;
        let unclaimed =
            unclaimed_rewards(&deps.querier, &config.incentives_controller, &bridge)?;
        if unclaimed < shortfall {
            return Err(ContractError::InsufficientRewards {
                requested: amount,
                available: held.checked_add(unclaimed)?,
            });
        }

        let assets = TOKEN_MAPPINGS
            .keys(deps.storage, None, None, Order::Ascending)
            .map(|key| key.map(|addr| addr.to_string()))
            .collect::<StdResult<Vec<_>>>()?;

        response = response
            .add_message(WasmMsg::Execute {
                contract_addr: config.incentives_controller.to_string(),
                msg: to_json_binary(&IncentivesExecuteMsg::ClaimRewards {
                    assets,
                    amount: shortfall,
                    to: bridge.to_string(),
                })?,
                funds: vec![],
            })
            .add_attribute("claimed", shortfall);
    }

    Ok(response
        .add_message(WasmMsg::Execute {
            contract_addr: config.reward_token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: recipient_addr.to_string(),
                amount,
            })?,
            funds: vec![],
        }))
}
