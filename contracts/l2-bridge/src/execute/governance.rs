//! Governor-only configuration handlers.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Storage};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, L1_TO_L2_TOKENS, L2_TO_L1_TOKENS};

fn load_as_governor(storage: &dyn Storage, sender: &Addr) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if *sender != config.governor {
        return Err(ContractError::NotGovernor);
    }
    Ok(config)
}

/// Register an (L1 token, static token) mapping.
///
/// Re-approving an identical pair is a no-op; remapping either side fails.
pub fn execute_approve_bridge(
    deps: DepsMut,
    info: MessageInfo,
    l1_token: String,
    l2_token: String,
) -> Result<Response, ContractError> {
    load_as_governor(deps.storage, &info.sender)?;
    let l2_token = deps.api.addr_validate(&l2_token)?;

    let existing_l2 = L1_TO_L2_TOKENS.may_load(deps.storage, &l1_token)?;
    let existing_l1 = L2_TO_L1_TOKENS.may_load(deps.storage, &l2_token)?;

    match (&existing_l2, &existing_l1) {
        (Some(mapped), _) if *mapped != l2_token => {
            return Err(ContractError::AlreadyMapped {
                token: l1_token,
                mapped_to: mapped.to_string(),
            })
        }
        (_, Some(mapped)) if *mapped != l1_token => {
            return Err(ContractError::AlreadyMapped {
                token: l2_token.to_string(),
                mapped_to: mapped.clone(),
            })
        }
        _ => {}
    }

    L1_TO_L2_TOKENS.save(deps.storage, &l1_token, &l2_token)?;
    L2_TO_L1_TOKENS.save(deps.storage, &l2_token, &l1_token)?;

    Ok(Response::new()
        .add_attribute("method", "approve_bridge")
        .add_attribute("l1_token", l1_token)
        .add_attribute("l2_token", l2_token))
}

pub fn execute_set_l1_bridge(
    deps: DepsMut,
    info: MessageInfo,
    l1_bridge: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_governor(deps.storage, &info.sender)?;
    config.l1_bridge = Some(l1_bridge.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_l1_bridge")
        .add_attribute("l1_bridge", l1_bridge))
}

pub fn execute_set_reward_token(
    deps: DepsMut,
    info: MessageInfo,
    reward_token: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_governor(deps.storage, &info.sender)?;
    let reward_token = deps.api.addr_validate(&reward_token)?;
    config.reward_token = Some(reward_token.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_token")
        .add_attribute("reward_token", reward_token))
}

pub fn execute_set_governor(
    deps: DepsMut,
    info: MessageInfo,
    governor: String,
) -> Result<Response, ContractError> {
    let mut config = load_as_governor(deps.storage, &info.sender)?;
    config.governor = deps.api.addr_validate(&governor)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_governor")
        .add_attribute("previous_governor", info.sender)
        .add_attribute("governor", config.governor))
}
